//! Import format detection from magic bytes and file extensions.

use std::path::Path;

use crate::format::ImportFormat;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// ZIP local-file-header magic; a DOCX package is a ZIP archive.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// How much of the payload to inspect when sniffing markup.
const SNIFF_WINDOW: usize = 512;

/// Sniff the import format of a byte payload.
///
/// PDF and DOCX carry unambiguous magic bytes; a payload whose first
/// non-whitespace character opens markup is treated as HTML; everything
/// else falls back to plain text, which accepts any input.
pub fn detect_format(data: &[u8]) -> ImportFormat {
    if data.starts_with(PDF_MAGIC) {
        return ImportFormat::Pdf;
    }
    if data.starts_with(ZIP_MAGIC) {
        return ImportFormat::Docx;
    }
    if looks_like_html(data) {
        return ImportFormat::Html;
    }
    ImportFormat::Txt
}

/// Map a file path's extension to an import format, if supported.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Option<ImportFormat> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ImportFormat::from_extension)
}

fn looks_like_html(data: &[u8]) -> bool {
    let window = &data[..data.len().min(SNIFF_WINDOW)];
    let text = String::from_utf8_lossy(window);
    text.trim_start().starts_with('<')
}
