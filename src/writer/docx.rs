//! DOCX writer.
//!
//! One paragraph element per paragraph block, one run element per run
//! with bold/italic properties; a divider becomes an explicit page-break
//! run in its own paragraph, which the reader maps back to a divider.

use std::io::Cursor;

use docx_rs::{BreakType, Docx, Paragraph as DocxParagraph, Run as DocxRun};

use super::ExportPayload;
use crate::error::{ExportError, ExportResult};
use crate::model::{Block, Document};

pub const CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub fn write(document: &Document) -> ExportResult<ExportPayload> {
    let mut docx = Docx::new();

    for block in &document.blocks {
        match block {
            Block::Paragraph(p) => {
                let mut paragraph = DocxParagraph::new();
                for run in &p.runs {
                    let mut docx_run = DocxRun::new().add_text(run.text.as_str());
                    if run.bold {
                        docx_run = docx_run.bold();
                    }
                    if run.italic {
                        docx_run = docx_run.italic();
                    }
                    paragraph = paragraph.add_run(docx_run);
                }
                docx = docx.add_paragraph(paragraph);
            }
            Block::Divider => {
                docx = docx.add_paragraph(
                    DocxParagraph::new().add_run(DocxRun::new().add_break(BreakType::Page)),
                );
            }
        }
    }

    let mut buffer = Vec::new();
    docx.build()
        .pack(&mut Cursor::new(&mut buffer))
        .map_err(|e| ExportError::Render(e.to_string()))?;

    Ok(ExportPayload {
        bytes: buffer,
        content_type: CONTENT_TYPE,
        filename: "content.docx",
    })
}
