//! Document-level types.

use serde::{Deserialize, Serialize};

use super::{Block, Paragraph};

/// The canonical structured representation all conversions pass through.
///
/// A document is an ordered sequence of blocks; order is reading order.
/// Conversions never mutate a document in place: readers build a fresh
/// one, writers only borrow it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Blocks in reading order.
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from a block sequence.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Wrap a whole string as one paragraph with one unstyled run.
    ///
    /// The empty string yields an empty document, since a run may not be
    /// empty.
    pub fn from_plain_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::new();
        }
        Self {
            blocks: vec![Block::Paragraph(Paragraph::with_text(text))],
        }
    }

    /// Join all block texts with a single newline.
    ///
    /// A divider contributes an empty line, so `[P("A"), Divider, P("B")]`
    /// renders as `"A\n\nB"`.
    pub fn to_plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Append a block.
    pub fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Iterate over the paragraphs, skipping dividers.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(p) => Some(p),
            Block::Divider => None,
        })
    }
}
