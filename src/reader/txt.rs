//! Plain text reader.
//!
//! The whole input becomes a single paragraph with one unstyled run,
//! embedded newlines included. Flattening keeps the txt round trip exact:
//! writing the document back out reproduces the input byte for byte.

use crate::error::ImportResult;
use crate::model::Document;

pub fn read(data: &[u8]) -> ImportResult<Document> {
    let mut text = String::from_utf8_lossy(data).into_owned();
    if let Some(stripped) = text.strip_prefix('\u{feff}') {
        text = stripped.to_string();
    }
    Ok(Document::from_plain_text(text))
}
