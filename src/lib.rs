//! # docport
//!
//! Document interchange engine for rich-text editors.
//!
//! Every conversion passes through one structured [`Document`] model:
//! readers turn external bytes (plain text, HTML, PDF, DOCX) into a
//! document, writers turn a document into a downloadable payload (txt,
//! HTML, PDF, DOCX) or a `mailto:` draft. The [`Interchange`]
//! orchestrator wires both sides to an editor and a delivery sink.
//!
//! ## Quick start
//!
//! ```
//! use docport::{import_bytes, export_document, ExportArtifact, ExportFormat, ImportFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = import_bytes(ImportFormat::Html, b"<p><b>Hello</b> world</p>")?;
//! assert_eq!(doc.to_plain_text(), "Hello world");
//!
//! let artifact = export_document(&doc, ExportFormat::Txt)?;
//! if let ExportArtifact::Download(payload) = artifact {
//!     assert_eq!(payload.content_type, "text/plain");
//!     assert_eq!(payload.bytes, b"Hello world");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **One hub model**: ordered paragraph/divider blocks with styled runs
//! - **PDF line reconstruction**: positioned fragments regrouped into
//!   reading-order paragraphs with a tunable baseline tolerance
//! - **Pagination**: PDF export reflows text across fixed-size pages
//! - **Typed failures**: corrupt input never disturbs editor content

pub mod detect;
pub mod engine;
pub mod error;
pub mod format;
pub mod model;
pub mod reader;
pub mod writer;

// Re-export commonly used types
pub use engine::{
    DeliverySink, DirectorySink, Editor, EditorBuffer, ExportReport, ImportOutcome, ImportReport,
    Interchange, OperationStatus,
};
pub use error::{ExportError, ExportResult, ImportError, ImportResult};
pub use format::{ExportFormat, ImportFormat};
pub use model::{Block, Document, DocumentBuilder, Edit, Paragraph, Run};
pub use reader::{reconstruct_page, Fragment, ReadOptions};
pub use writer::{ExportArtifact, ExportPayload, PageLayout};

/// Read bytes in the given format into a fresh document.
///
/// Uses default reader options; see [`reader::read`] to tune the PDF
/// line-grouping tolerance.
pub fn import_bytes(format: ImportFormat, data: &[u8]) -> ImportResult<Document> {
    reader::read(format, data, &ReadOptions::default())
}

/// Render a document in the given format with default page geometry.
pub fn export_document(document: &Document, format: ExportFormat) -> ExportResult<ExportArtifact> {
    writer::write(format, document, &PageLayout::default())
}
