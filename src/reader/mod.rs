//! Format readers: external bytes into the document model.
//!
//! Each reader is a pure function from raw input to a fresh [`Document`];
//! nothing is mutated in place and no partial tree ever escapes.

mod docx;
mod html;
mod layout;
mod pdf;
mod txt;

pub use layout::{reconstruct_page, Fragment, DEFAULT_LINE_TOLERANCE};

use crate::error::ImportResult;
use crate::format::ImportFormat;
use crate::model::Document;

/// Options shared by the readers.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Baseline tolerance, in layout units, used when grouping PDF text
    /// fragments into lines.
    pub line_tolerance: f64,
}

impl ReadOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PDF line-grouping tolerance.
    pub fn with_line_tolerance(mut self, tolerance: f64) -> Self {
        self.line_tolerance = tolerance;
        self
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            line_tolerance: DEFAULT_LINE_TOLERANCE,
        }
    }
}

/// Read `data` as `format` into a fresh document.
pub fn read(format: ImportFormat, data: &[u8], options: &ReadOptions) -> ImportResult<Document> {
    match format {
        ImportFormat::Txt => txt::read(data),
        ImportFormat::Html => html::read(data),
        ImportFormat::Pdf => pdf::read(data, options),
        ImportFormat::Docx => docx::read(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_options_builder() {
        let options = ReadOptions::new().with_line_tolerance(3.5);
        assert_eq!(options.line_tolerance, 3.5);
    }

    #[test]
    fn test_default_tolerance() {
        assert_eq!(ReadOptions::default().line_tolerance, 2.0);
    }

    #[test]
    fn test_dispatch_txt() {
        let doc = read(ImportFormat::Txt, b"hello", &ReadOptions::default()).unwrap();
        assert_eq!(doc.to_plain_text(), "hello");
    }

    #[test]
    fn test_dispatch_html() {
        let doc = read(ImportFormat::Html, b"<p>hello</p>", &ReadOptions::default()).unwrap();
        assert_eq!(doc.to_plain_text(), "hello");
    }
}
