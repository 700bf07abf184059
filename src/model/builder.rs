//! Atomic document construction from an explicit edit list.

use super::{Block, Document, Paragraph, Run};

/// A single document edit.
///
/// Readers accumulate edits while walking their input and apply them in
/// one [`DocumentBuilder::build`] call, so a half-parsed input can never
/// escape as a partial tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Start a new paragraph, closing any open one.
    OpenParagraph,
    /// Append a run to the open paragraph, opening one if necessary.
    AppendRun(Run),
    /// Close the open paragraph.
    CloseParagraph,
    /// Insert a divider, closing any open paragraph first.
    InsertDivider,
}

/// Accumulates [`Edit`] operations and applies them atomically.
///
/// Finalization enforces the model invariants: paragraphs that end up with
/// no runs are dropped, and empty-text runs are never stored.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    edits: Vec<Edit>,
}

impl DocumentBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a paragraph.
    pub fn open_paragraph(&mut self) -> &mut Self {
        self.edits.push(Edit::OpenParagraph);
        self
    }

    /// Record a styled run.
    pub fn run(&mut self, run: Run) -> &mut Self {
        self.edits.push(Edit::AppendRun(run));
        self
    }

    /// Record an unstyled run.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.run(Run::plain(text))
    }

    /// Record the end of a paragraph.
    pub fn close_paragraph(&mut self) -> &mut Self {
        self.edits.push(Edit::CloseParagraph);
        self
    }

    /// Record a divider.
    pub fn divider(&mut self) -> &mut Self {
        self.edits.push(Edit::InsertDivider);
        self
    }

    /// Record a whole paragraph as open/runs/close.
    pub fn paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.open_paragraph();
        for run in paragraph.runs {
            self.run(run);
        }
        self.close_paragraph()
    }

    /// The edits recorded so far.
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Apply all recorded edits and produce the finished document.
    pub fn build(self) -> Document {
        let mut blocks = Vec::new();
        let mut current: Option<Paragraph> = None;

        for edit in self.edits {
            match edit {
                Edit::OpenParagraph => {
                    flush(&mut blocks, current.take());
                    current = Some(Paragraph::new());
                }
                Edit::AppendRun(run) => {
                    current.get_or_insert_with(Paragraph::new).push_run(run);
                }
                Edit::CloseParagraph => {
                    flush(&mut blocks, current.take());
                }
                Edit::InsertDivider => {
                    flush(&mut blocks, current.take());
                    blocks.push(Block::Divider);
                }
            }
        }
        flush(&mut blocks, current);

        Document::from_blocks(blocks)
    }
}

fn flush(blocks: &mut Vec<Block>, paragraph: Option<Paragraph>) {
    if let Some(p) = paragraph {
        if !p.is_empty() {
            blocks.push(Block::Paragraph(p));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_basic_sequence() {
        let mut builder = DocumentBuilder::new();
        builder.open_paragraph().text("Hello").close_paragraph();
        builder.divider();
        builder.open_paragraph().run(Run::bold("World")).close_paragraph();

        let doc = builder.build();
        assert_eq!(doc.block_count(), 3);
        assert_eq!(doc.to_plain_text(), "Hello\n\nWorld");
    }

    #[test]
    fn test_empty_paragraphs_are_dropped() {
        let mut builder = DocumentBuilder::new();
        builder.open_paragraph().close_paragraph();
        builder.open_paragraph().text("").close_paragraph();

        let doc = builder.build();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_run_without_open_paragraph_opens_one() {
        let mut builder = DocumentBuilder::new();
        builder.text("implicit");

        let doc = builder.build();
        assert_eq!(doc.block_count(), 1);
        assert_eq!(doc.to_plain_text(), "implicit");
    }

    #[test]
    fn test_divider_closes_open_paragraph() {
        let mut builder = DocumentBuilder::new();
        builder.open_paragraph().text("A").divider();
        builder.open_paragraph().text("B").close_paragraph();

        let doc = builder.build();
        assert_eq!(doc.block_count(), 3);
        assert!(doc.blocks[1].is_divider());
    }

    #[test]
    fn test_unclosed_trailing_paragraph_is_kept() {
        let mut builder = DocumentBuilder::new();
        builder.open_paragraph().text("tail");

        let doc = builder.build();
        assert_eq!(doc.to_plain_text(), "tail");
    }
}
