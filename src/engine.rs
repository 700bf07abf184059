//! Interchange orchestration between the editor and the format converters.
//!
//! The orchestrator owns two host seams: an [`Editor`] holding the current
//! document and a [`DeliverySink`] performing the download or mailto side
//! effect. Operations run strictly one at a time and report their outcome
//! as returned values; there is no shared mutable status state.

use std::fs;
use std::path::PathBuf;

use crate::error::{ExportError, ExportResult, ImportResult};
use crate::format::{ExportFormat, ImportFormat};
use crate::model::Document;
use crate::reader::{self, ReadOptions};
use crate::writer::{self, ExportArtifact, ExportPayload, PageLayout};

/// Capabilities the embedded editor exposes to the engine.
pub trait Editor {
    /// Current structured content.
    fn document(&self) -> Document;

    /// Current content as plain text.
    fn plain_text(&self) -> String;

    /// Atomically replace the current content. The editor becomes sole
    /// owner of the document.
    fn replace_content(&mut self, document: Document);
}

/// In-memory editor backing store.
///
/// The revision counter bumps on every content swap, so hosts and tests
/// can verify that a cancelled or failed operation left the content alone.
#[derive(Debug, Default)]
pub struct EditorBuffer {
    document: Document,
    revision: u64,
}

impl EditorBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `document`.
    pub fn with_document(document: Document) -> Self {
        Self {
            document,
            revision: 0,
        }
    }

    /// Monotonic revision, bumped on every content swap.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Borrow the current content.
    pub fn document_ref(&self) -> &Document {
        &self.document
    }
}

impl Editor for EditorBuffer {
    fn document(&self) -> Document {
        self.document.clone()
    }

    fn plain_text(&self) -> String {
        self.document.to_plain_text()
    }

    fn replace_content(&mut self, document: Document) {
        self.document = document;
        self.revision += 1;
    }
}

/// Host-side delivery seam for export products.
pub trait DeliverySink {
    /// Hand a payload to the host's download action.
    fn deliver_download(&mut self, payload: &ExportPayload) -> ExportResult<()>;

    /// Navigate the host to a `mailto:` URI.
    fn deliver_mailto(&mut self, uri: &str) -> ExportResult<()>;
}

/// Delivery sink that writes downloads into a directory.
///
/// Mailto URIs are written to `content.mailto` alongside the downloads,
/// since a filesystem host has no mail client to navigate.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink targeting `dir`. The directory must already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn write_file(&self, name: &str, bytes: &[u8]) -> ExportResult<()> {
        let path = self.dir.join(name);
        fs::write(&path, bytes)
            .map_err(|e| ExportError::DeliveryBlocked(format!("cannot write {}: {e}", path.display())))
    }
}

impl DeliverySink for DirectorySink {
    fn deliver_download(&mut self, payload: &ExportPayload) -> ExportResult<()> {
        self.write_file(payload.filename, &payload.bytes)
    }

    fn deliver_mailto(&mut self, uri: &str) -> ExportResult<()> {
        self.write_file("content.mailto", uri.as_bytes())
    }
}

/// Status of the most recent operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OperationStatus {
    /// No operation has run yet.
    #[default]
    Idle,
    /// An operation is running.
    InProgress,
    /// The last operation completed.
    Succeeded,
    /// The last operation failed; editor content is untouched for imports.
    Failed,
}

/// Summary of a completed import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// Format that was read.
    pub format: ImportFormat,
    /// Number of blocks in the freshly constructed document.
    pub blocks: usize,
}

/// Outcome of an import driven by the host's file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Editor content was replaced with the freshly read document.
    Replaced(ImportReport),
    /// The picker was dismissed; nothing changed.
    Cancelled,
}

/// Summary of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Format that was written.
    pub format: ExportFormat,
    /// Delivered payload size; `None` for a mailto navigation.
    pub downloaded_bytes: Option<usize>,
}

/// The interchange orchestrator.
///
/// At most one import or export is in flight per editor instance; the
/// host is expected not to start a second operation while one runs, and
/// the synchronous API makes overlap impossible here.
pub struct Interchange<E: Editor, S: DeliverySink> {
    editor: E,
    sink: S,
    read_options: ReadOptions,
    page_layout: PageLayout,
    status: OperationStatus,
}

impl<E: Editor, S: DeliverySink> Interchange<E, S> {
    /// Create an orchestrator over the given seams.
    pub fn new(editor: E, sink: S) -> Self {
        Self {
            editor,
            sink,
            read_options: ReadOptions::default(),
            page_layout: PageLayout::default(),
            status: OperationStatus::Idle,
        }
    }

    /// Set reader options.
    pub fn with_read_options(mut self, options: ReadOptions) -> Self {
        self.read_options = options;
        self
    }

    /// Set PDF page geometry.
    pub fn with_page_layout(mut self, layout: PageLayout) -> Self {
        self.page_layout = layout;
        self
    }

    /// Borrow the editor seam.
    pub fn editor(&self) -> &E {
        &self.editor
    }

    /// Mutably borrow the editor seam.
    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    /// Status of the most recent operation.
    pub fn last_status(&self) -> OperationStatus {
        self.status
    }

    /// Read `data` as `format` and atomically replace the editor content.
    ///
    /// The swap happens only after the full document is constructed; on
    /// failure the editor's existing content is untouched.
    pub fn import(&mut self, format: ImportFormat, data: &[u8]) -> ImportResult<ImportReport> {
        self.status = OperationStatus::InProgress;
        match reader::read(format, data, &self.read_options) {
            Ok(document) => {
                let report = ImportReport {
                    format,
                    blocks: document.block_count(),
                };
                self.editor.replace_content(document);
                self.status = OperationStatus::Succeeded;
                log::debug!("imported {format}: {} blocks", report.blocks);
                Ok(report)
            }
            Err(err) => {
                self.status = OperationStatus::Failed;
                log::warn!("import {format} failed: {err}");
                Err(err)
            }
        }
    }

    /// Import from a file-picker result.
    ///
    /// A dismissed picker (`None`) is a no-op, not a failure: the editor
    /// keeps its current content and no state changes.
    pub fn import_from_picker(
        &mut self,
        format: ImportFormat,
        picked: Option<&[u8]>,
    ) -> ImportResult<ImportOutcome> {
        match picked {
            Some(data) => self.import(format, data).map(ImportOutcome::Replaced),
            None => {
                log::debug!("import {format} cancelled at picker");
                Ok(ImportOutcome::Cancelled)
            }
        }
    }

    /// Write the current document as `format` and hand it to the sink.
    ///
    /// Export is read-only on the document; a blocked delivery surfaces
    /// as an error but rolls nothing back.
    pub fn export(&mut self, format: ExportFormat) -> ExportResult<ExportReport> {
        self.status = OperationStatus::InProgress;
        let result = self.run_export(format);
        match &result {
            Ok(report) => {
                self.status = OperationStatus::Succeeded;
                log::debug!(
                    "exported {format}: {} bytes",
                    report.downloaded_bytes.unwrap_or(0)
                );
            }
            Err(err) => {
                self.status = OperationStatus::Failed;
                log::warn!("export {format} failed: {err}");
            }
        }
        result
    }

    fn run_export(&mut self, format: ExportFormat) -> ExportResult<ExportReport> {
        let document = self.editor.document();
        match writer::write(format, &document, &self.page_layout)? {
            ExportArtifact::Download(payload) => {
                self.sink.deliver_download(&payload)?;
                Ok(ExportReport {
                    format,
                    downloaded_bytes: Some(payload.bytes.len()),
                })
            }
            ExportArtifact::Mailto(uri) => {
                self.sink.deliver_mailto(&uri)?;
                Ok(ExportReport {
                    format,
                    downloaded_bytes: None,
                })
            }
        }
    }

    /// Replace the editor content with the empty document.
    pub fn clear(&mut self) {
        self.editor.replace_content(Document::new());
    }

    /// Current plain text, for the host's clipboard action.
    pub fn copy_plain_text(&self) -> String {
        self.editor.plain_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImportError;

    /// Sink that records deliveries, optionally refusing them.
    #[derive(Debug, Default)]
    struct RecordingSink {
        downloads: Vec<ExportPayload>,
        mailtos: Vec<String>,
        blocked: bool,
    }

    impl DeliverySink for RecordingSink {
        fn deliver_download(&mut self, payload: &ExportPayload) -> ExportResult<()> {
            if self.blocked {
                return Err(ExportError::DeliveryBlocked("host refused".into()));
            }
            self.downloads.push(payload.clone());
            Ok(())
        }

        fn deliver_mailto(&mut self, uri: &str) -> ExportResult<()> {
            if self.blocked {
                return Err(ExportError::DeliveryBlocked("host refused".into()));
            }
            self.mailtos.push(uri.to_string());
            Ok(())
        }
    }

    fn engine() -> Interchange<EditorBuffer, RecordingSink> {
        Interchange::new(EditorBuffer::new(), RecordingSink::default())
    }

    #[test]
    fn test_import_replaces_content() {
        let mut engine = engine();
        let report = engine.import(ImportFormat::Txt, b"hello").unwrap();

        assert_eq!(report.blocks, 1);
        assert_eq!(engine.editor().plain_text(), "hello");
        assert_eq!(engine.last_status(), OperationStatus::Succeeded);
    }

    #[test]
    fn test_failed_import_leaves_editor_untouched() {
        let mut engine = engine();
        engine.import(ImportFormat::Txt, b"original").unwrap();
        let revision = engine.editor().revision();

        let err = engine.import(ImportFormat::Pdf, b"not a pdf").unwrap_err();
        assert!(matches!(err, ImportError::Corrupt(_)));
        assert_eq!(engine.editor().plain_text(), "original");
        assert_eq!(engine.editor().revision(), revision);
        assert_eq!(engine.last_status(), OperationStatus::Failed);
    }

    #[test]
    fn test_picker_cancel_is_a_noop() {
        let mut engine = engine();
        engine.import(ImportFormat::Txt, b"kept").unwrap();
        let revision = engine.editor().revision();

        let outcome = engine.import_from_picker(ImportFormat::Docx, None).unwrap();
        assert_eq!(outcome, ImportOutcome::Cancelled);
        assert_eq!(engine.editor().revision(), revision);
        assert_eq!(engine.editor().plain_text(), "kept");
    }

    #[test]
    fn test_export_delivers_download() {
        let mut engine = engine();
        engine.import(ImportFormat::Txt, b"payload").unwrap();

        let report = engine.export(ExportFormat::Txt).unwrap();
        assert_eq!(report.downloaded_bytes, Some(7));
        assert_eq!(engine.sink.downloads.len(), 1);
        assert_eq!(engine.sink.downloads[0].filename, "content.txt");
    }

    #[test]
    fn test_export_email_delivers_mailto() {
        let mut engine = engine();
        engine.import(ImportFormat::Txt, b"body text").unwrap();

        let report = engine.export(ExportFormat::Email).unwrap();
        assert_eq!(report.downloaded_bytes, None);
        assert_eq!(engine.sink.mailtos.len(), 1);
        assert!(engine.sink.mailtos[0].starts_with("mailto:"));
    }

    #[test]
    fn test_blocked_delivery_surfaces_and_rolls_nothing_back() {
        let mut engine = engine();
        engine.import(ImportFormat::Txt, b"survives").unwrap();
        let revision = engine.editor().revision();
        engine.sink.blocked = true;

        let err = engine.export(ExportFormat::Txt).unwrap_err();
        assert!(matches!(err, ExportError::DeliveryBlocked(_)));
        assert_eq!(engine.last_status(), OperationStatus::Failed);
        assert_eq!(engine.editor().revision(), revision);
        assert_eq!(engine.editor().plain_text(), "survives");
    }

    #[test]
    fn test_clear_and_copy() {
        let mut engine = engine();
        engine.import(ImportFormat::Txt, b"to copy").unwrap();

        assert_eq!(engine.copy_plain_text(), "to copy");
        engine.clear();
        assert!(engine.editor().document_ref().is_empty());
    }
}
