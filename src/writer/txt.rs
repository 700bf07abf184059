//! Plain text writer.

use super::ExportPayload;
use crate::model::Document;

pub fn write(document: &Document) -> ExportPayload {
    ExportPayload {
        bytes: document.to_plain_text().into_bytes(),
        content_type: "text/plain",
        filename: "content.txt",
    }
}
