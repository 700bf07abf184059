//! Email draft writer.
//!
//! Produces a `mailto:` URI whose body is the document's percent-encoded
//! plain text. The channel has no MIME body, so styling cannot survive
//! this path; callers get exactly the plain text rendering.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::model::Document;

/// Fixed subject line for exported drafts.
pub const SUBJECT: &str = "Exported document";

pub fn write(document: &Document) -> String {
    let body = document.to_plain_text();
    format!(
        "mailto:?subject={}&body={}",
        utf8_percent_encode(SUBJECT, NON_ALPHANUMERIC),
        utf8_percent_encode(&body, NON_ALPHANUMERIC),
    )
}
