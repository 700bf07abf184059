//! Block-level and inline types.

use serde::{Deserialize, Serialize};

/// A contiguous span of text with uniform styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// The text content. Never empty in a finalized document, and never
    /// split mid-codepoint.
    pub text: String,

    /// Bold flag
    #[serde(default)]
    pub bold: bool,

    /// Italic flag
    #[serde(default)]
    pub italic: bool,
}

impl Run {
    /// Create an unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: false,
        }
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: true,
        }
    }

    /// Create a run with explicit style flags.
    pub fn styled(text: impl Into<String>, bold: bool, italic: bool) -> Self {
        Self {
            text: text.into(),
            bold,
            italic,
        }
    }

    /// Check if this run carries no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if another run carries the same style flags.
    pub fn same_style(&self, other: &Run) -> bool {
        self.bold == other.bold && self.italic == other.italic
    }
}

/// A paragraph of styled runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in reading order.
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph holding one unstyled run.
    ///
    /// An empty string yields an empty paragraph (a run is never empty).
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        let text = text.into();
        if !text.is_empty() {
            p.runs.push(Run::plain(text));
        }
        p
    }

    /// Append a run, coalescing it into the previous one when the style
    /// flags match.
    pub fn push_run(&mut self, run: Run) {
        if run.is_empty() {
            return;
        }
        if let Some(last) = self.runs.last_mut() {
            if last.same_style(&run) {
                last.text.push_str(&run.text);
                return;
            }
        }
        self.runs.push(run);
    }

    /// Concatenation of all run texts, in order.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Check if the paragraph has no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// A top-level unit of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of text
    Paragraph(Paragraph),

    /// A hard page/section break. Carries no text and is never merged
    /// with adjacent paragraphs.
    Divider,
}

impl Block {
    /// Plain text of the block; a divider renders as an empty line.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph(p) => p.plain_text(),
            Block::Divider => String::new(),
        }
    }

    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a divider.
    pub fn is_divider(&self) -> bool {
        matches!(self, Block::Divider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_constructors() {
        let run = Run::bold("x");
        assert!(run.bold && !run.italic);

        let run = Run::styled("y", true, true);
        assert!(run.bold && run.italic);
    }

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::new();
        p.push_run(Run::plain("Hello "));
        p.push_run(Run::bold("world"));
        p.push_run(Run::plain("!"));

        assert_eq!(p.plain_text(), "Hello world!");
        assert_eq!(p.runs.len(), 3);
    }

    #[test]
    fn test_push_run_coalesces_same_style() {
        let mut p = Paragraph::new();
        p.push_run(Run::plain("a"));
        p.push_run(Run::plain("b"));
        p.push_run(Run::italic("c"));

        assert_eq!(p.runs.len(), 2);
        assert_eq!(p.runs[0].text, "ab");
    }

    #[test]
    fn test_push_run_skips_empty() {
        let mut p = Paragraph::new();
        p.push_run(Run::plain(""));
        assert!(p.is_empty());
    }

    #[test]
    fn test_divider_has_no_text() {
        assert_eq!(Block::Divider.plain_text(), "");
        assert!(Block::Divider.is_divider());
    }
}
