//! HTML writer.
//!
//! Emits a body fragment: one `<p>` per paragraph, `<hr>` per divider,
//! runs wrapped in `<b>`/`<i>` with bold outermost when both flags are
//! set. Newlines inside a run become `<br>` so the html round trip keeps
//! line structure.

use super::ExportPayload;
use crate::model::{Block, Document, Run};

pub fn write(document: &Document) -> ExportPayload {
    let mut out = String::new();
    for block in &document.blocks {
        match block {
            Block::Paragraph(p) => {
                out.push_str("<p>");
                for run in &p.runs {
                    push_run(&mut out, run);
                }
                out.push_str("</p>\n");
            }
            Block::Divider => out.push_str("<hr>\n"),
        }
    }

    ExportPayload {
        bytes: out.into_bytes(),
        content_type: "text/html",
        filename: "content.html",
    }
}

fn push_run(out: &mut String, run: &Run) {
    if run.bold {
        out.push_str("<b>");
    }
    if run.italic {
        out.push_str("<i>");
    }
    let escaped = html_escape::encode_text(&run.text).replace('\n', "<br>");
    out.push_str(&escaped);
    if run.italic {
        out.push_str("</i>");
    }
    if run.bold {
        out.push_str("</b>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Paragraph};

    fn html(doc: &Document) -> String {
        String::from_utf8(write(doc).bytes).unwrap()
    }

    #[test]
    fn test_style_flags_become_tags() {
        let doc = Document::from_blocks(vec![Block::Paragraph(Paragraph {
            runs: vec![Run::bold("X"), Run::italic("Y")],
        })]);

        let out = html(&doc);
        assert!(out.contains("<b>X</b>"));
        assert!(out.contains("<i>Y</i>"));
    }

    #[test]
    fn test_both_flags_nest_bold_outermost() {
        let doc = Document::from_blocks(vec![Block::Paragraph(Paragraph {
            runs: vec![Run::styled("both", true, true)],
        })]);

        assert!(html(&doc).contains("<b><i>both</i></b>"));
    }

    #[test]
    fn test_divider_is_hr() {
        let doc = Document::from_blocks(vec![
            Block::Paragraph(Paragraph::with_text("A")),
            Block::Divider,
            Block::Paragraph(Paragraph::with_text("B")),
        ]);

        assert_eq!(html(&doc), "<p>A</p>\n<hr>\n<p>B</p>\n");
    }

    #[test]
    fn test_text_is_escaped() {
        let doc = Document::from_plain_text("a < b && c > d");
        let out = html(&doc);
        assert!(out.contains("a &lt; b"));
        assert!(!out.contains("a < b"));
    }

    #[test]
    fn test_newline_becomes_br() {
        let doc = Document::from_plain_text("one\ntwo");
        assert!(html(&doc).contains("one<br>two"));
    }

    #[test]
    fn test_payload_metadata() {
        let payload = write(&Document::new());
        assert_eq!(payload.content_type, "text/html");
        assert_eq!(payload.filename, "content.html");
        assert!(payload.bytes.is_empty());
    }
}
