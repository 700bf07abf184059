//! Format writers: document model into external representations.
//!
//! Writers only borrow the document; export never mutates editor state.

mod docx;
mod email;
mod html;
mod pdf;
mod txt;

pub use pdf::PageLayout;

use crate::error::ExportResult;
use crate::format::ExportFormat;
use crate::model::Document;

/// A downloadable conversion product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    /// Raw payload bytes.
    pub bytes: Vec<u8>,
    /// MIME content type.
    pub content_type: &'static str,
    /// Suggested filename, fixed per format.
    pub filename: &'static str,
}

/// What an export produces: a file download or a mailto navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportArtifact {
    /// Bytes to hand to the host's download action.
    Download(ExportPayload),
    /// A `mailto:` URI to navigate to.
    Mailto(String),
}

/// Render `document` as `format`.
///
/// Writers are total over the model; the only failure mode is container
/// serialization, which is not expected under normal memory conditions.
pub fn write(
    format: ExportFormat,
    document: &Document,
    layout: &PageLayout,
) -> ExportResult<ExportArtifact> {
    match format {
        ExportFormat::Txt => Ok(ExportArtifact::Download(txt::write(document))),
        ExportFormat::Html => Ok(ExportArtifact::Download(html::write(document))),
        ExportFormat::Pdf => Ok(ExportArtifact::Download(pdf::write(document, layout)?)),
        ExportFormat::Docx => Ok(ExportArtifact::Download(docx::write(document)?)),
        ExportFormat::Email => Ok(ExportArtifact::Mailto(email::write(document))),
    }
}
