//! PDF writer.
//!
//! Reflows the document's plain text into fixed-size pages: paragraph
//! text is wrapped at whitespace to the printable width, lines fill each
//! page top to bottom, and a divider forces a page break regardless of
//! remaining space.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document as PdfDocument, Object, Stream};

use super::ExportPayload;
use crate::error::{ExportError, ExportResult};
use crate::model::{Block, Document};

/// Page geometry and type metrics for PDF export.
///
/// All lengths are in points (1/72 inch).
#[derive(Debug, Clone)]
pub struct PageLayout {
    /// Page width.
    pub width: f64,
    /// Page height.
    pub height: f64,
    /// Margin applied on all four sides.
    pub margin: f64,
    /// Font size.
    pub font_size: f64,
    /// Baseline-to-baseline distance.
    pub line_height: f64,
}

impl PageLayout {
    /// A4 geometry with one-inch margins, Helvetica 12pt on a 14pt line.
    pub fn a4() -> Self {
        Self {
            width: 595.0,
            height: 842.0,
            margin: 72.0,
            font_size: 12.0,
            line_height: 14.0,
        }
    }

    /// Set the margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set font size and line height together.
    pub fn with_type_size(mut self, font_size: f64, line_height: f64) -> Self {
        self.font_size = font_size;
        self.line_height = line_height;
        self
    }

    /// How many lines fit between the top and bottom margins.
    pub fn lines_per_page(&self) -> usize {
        let printable = self.height - 2.0 * self.margin;
        ((printable / self.line_height).floor() as usize).max(1)
    }

    /// Estimated character capacity of a line.
    ///
    /// Average Helvetica glyph width is roughly half the font size.
    pub fn max_chars_per_line(&self) -> usize {
        let printable = self.width - 2.0 * self.margin;
        ((printable / (self.font_size * 0.5)) as usize).max(1)
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::a4()
    }
}

pub fn write(document: &Document, layout: &PageLayout) -> ExportResult<ExportPayload> {
    let pages = paginate(document, layout);
    log::debug!("PDF layout: {} pages", pages.len());

    let bytes = render_pdf(&pages, layout)?;
    Ok(ExportPayload {
        bytes,
        content_type: "application/pdf",
        filename: "content.pdf",
    })
}

/// Split the document into pages of wrapped lines.
pub(crate) fn paginate(document: &Document, layout: &PageLayout) -> Vec<Vec<String>> {
    let max_lines = layout.lines_per_page();
    let max_chars = layout.max_chars_per_line();

    let mut pages: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for block in &document.blocks {
        match block {
            Block::Divider => {
                pages.push(std::mem::take(&mut current));
            }
            Block::Paragraph(p) => {
                for line in wrap_text(&p.plain_text(), max_chars) {
                    if current.len() >= max_lines {
                        pages.push(std::mem::take(&mut current));
                    }
                    current.push(line);
                }
            }
        }
    }
    if !current.is_empty() || pages.is_empty() {
        pages.push(current);
    }

    pages
}

/// Wrap text at whitespace to at most `max_chars` characters per line.
///
/// Words wider than a whole line are force-broken at the width; the break
/// is made between characters, never inside one.
pub(crate) fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let words: Vec<&str> = raw_line.split_whitespace().collect();
        if words.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_chars = 0usize;

        for word in words {
            let word_chars = word.chars().count();

            if word_chars > max_chars {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_chars = 0;
                }
                let mut chunk = String::new();
                let mut chunk_chars = 0usize;
                for ch in word.chars() {
                    chunk.push(ch);
                    chunk_chars += 1;
                    if chunk_chars == max_chars {
                        lines.push(std::mem::take(&mut chunk));
                        chunk_chars = 0;
                    }
                }
                if !chunk.is_empty() {
                    current = chunk;
                    current_chars = chunk_chars;
                }
            } else if current.is_empty() {
                current.push_str(word);
                current_chars = word_chars;
            } else if current_chars + 1 + word_chars <= max_chars {
                current.push(' ');
                current.push_str(word);
                current_chars += 1 + word_chars;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
                current_chars = word_chars;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Assemble the page tree, one content stream per page, one shared
/// Helvetica resource.
fn render_pdf(pages: &[Vec<String>], layout: &PageLayout) -> ExportResult<Vec<u8>> {
    let mut doc = PdfDocument::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let content = page_content(lines, layout);
        let encoded = content
            .encode()
            .map_err(|e| ExportError::Render(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(layout.width as f32),
                Object::Real(layout.height as f32),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ExportError::Render(e.to_string()))?;
    Ok(bytes)
}

/// Place one page's lines with a descending baseline cursor.
fn page_content(lines: &[String], layout: &PageLayout) -> Content {
    let mut operations = Vec::new();
    let mut cursor_y = layout.height - layout.margin;

    for line in lines {
        cursor_y -= layout.line_height;
        if line.is_empty() {
            continue;
        }
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![
                Object::Name(b"F1".to_vec()),
                Object::Real(layout.font_size as f32),
            ],
        ));
        operations.push(Operation::new(
            "Td",
            vec![
                Object::Real(layout.margin as f32),
                Object::Real(cursor_y as f32),
            ],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(line.as_str())],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    Content { operations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;

    /// Geometry that fits exactly two lines per page, for pagination tests.
    fn two_line_layout() -> PageLayout {
        PageLayout {
            width: 200.0,
            height: 68.0,
            margin: 20.0,
            font_size: 10.0,
            line_height: 14.0,
        }
    }

    #[test]
    fn test_wrap_text_breaks_at_whitespace() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_text_never_splits_a_fitting_word() {
        for line in wrap_text("alpha beta gamma delta", 11) {
            assert!(line.chars().count() <= 11);
            for word in line.split(' ') {
                assert!("alpha beta gamma delta".contains(word));
            }
        }
    }

    #[test]
    fn test_wrap_text_force_breaks_oversized_word() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_is_codepoint_safe() {
        let lines = wrap_text("ééééé", 2);
        assert_eq!(lines, vec!["éé", "éé", "é"]);
    }

    #[test]
    fn test_wrap_preserves_blank_lines() {
        let lines = wrap_text("a\n\nb", 10);
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_three_lines_on_two_line_pages() {
        let layout = two_line_layout();
        assert_eq!(layout.lines_per_page(), 2);

        let doc = Document::from_blocks(vec![
            Block::Paragraph(Paragraph::with_text("one")),
            Block::Paragraph(Paragraph::with_text("two")),
            Block::Paragraph(Paragraph::with_text("three")),
        ]);

        let pages = paginate(&doc, &layout);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], vec!["one", "two"]);
        assert_eq!(pages[1], vec!["three"]);
    }

    #[test]
    fn test_divider_forces_page_break() {
        let layout = two_line_layout();
        let doc = Document::from_blocks(vec![
            Block::Paragraph(Paragraph::with_text("a")),
            Block::Divider,
            Block::Paragraph(Paragraph::with_text("b")),
        ]);

        let pages = paginate(&doc, &layout);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0], vec!["a"]);
        assert_eq!(pages[1], vec!["b"]);
    }

    #[test]
    fn test_empty_document_still_has_one_page() {
        let pages = paginate(&Document::new(), &PageLayout::a4());
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }

    #[test]
    fn test_output_is_a_pdf() {
        let doc = Document::from_plain_text("Hello PDF");
        let payload = write(&doc, &PageLayout::a4()).unwrap();

        assert!(payload.bytes.starts_with(b"%PDF-"));
        assert_eq!(payload.content_type, "application/pdf");
        assert_eq!(payload.filename, "content.pdf");
    }

    #[test]
    fn test_a4_capacity() {
        let layout = PageLayout::a4();
        assert_eq!(layout.lines_per_page(), 49);
        assert_eq!(layout.max_chars_per_line(), 75);
    }
}
