//! DOCX reader.
//!
//! Opens the zip package, pulls `word/document.xml`, and walks the
//! WordprocessingML body: `w:p` becomes a paragraph, `w:r` a run with
//! bold/italic taken from its properties, and an explicit page break
//! becomes a divider.

use std::io::{Cursor, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::{ImportError, ImportResult};
use crate::model::{Document, DocumentBuilder, Run};

const DOCUMENT_ENTRY: &str = "word/document.xml";

pub fn read(data: &[u8]) -> ImportResult<Document> {
    let mut archive = ZipArchive::new(Cursor::new(data))
        .map_err(|e| ImportError::Corrupt(format!("not a DOCX package: {e}")))?;

    let mut entry = archive
        .by_name(DOCUMENT_ENTRY)
        .map_err(|_| ImportError::Corrupt(format!("package is missing {DOCUMENT_ENTRY}")))?;

    let mut xml = Vec::new();
    entry
        .read_to_end(&mut xml)
        .map_err(|e| ImportError::Corrupt(format!("truncated package entry: {e}")))?;

    parse_document_xml(&String::from_utf8_lossy(&xml))
}

/// Walk the document body XML into block/run structure.
pub(crate) fn parse_document_xml(xml: &str) -> ImportResult<Document> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut builder = DocumentBuilder::new();
    let mut in_properties = false;
    let mut in_text = false;
    let mut bold = false;
    let mut italic = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"p" => {
                    builder.open_paragraph();
                }
                b"r" => {
                    bold = false;
                    italic = false;
                }
                b"rPr" => in_properties = true,
                b"b" if in_properties => bold = flag_value(&e),
                b"i" if in_properties => italic = flag_value(&e),
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"b" if in_properties => bold = flag_value(&e),
                b"i" if in_properties => italic = flag_value(&e),
                b"br" if is_page_break(&e) => {
                    builder.divider();
                }
                b"tab" if !in_properties => {
                    builder.run(Run::styled("\t", bold, italic));
                }
                _ => {}
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"p" => {
                    builder.close_paragraph();
                }
                b"rPr" => in_properties = false,
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Text(t)) => {
                if in_text {
                    let text = t
                        .unescape()
                        .map(|text| text.into_owned())
                        .unwrap_or_else(|_| String::from_utf8_lossy(t.as_ref()).into_owned());
                    builder.run(Run::styled(text, bold, italic));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ImportError::Corrupt(format!("malformed document XML: {e}")));
            }
        }
    }

    Ok(builder.build())
}

/// A property flag element is on unless `w:val` says otherwise.
fn flag_value(e: &BytesStart) -> bool {
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == b"val" {
            let value = attr.value.as_ref();
            return !matches!(value, b"0" | b"false" | b"none" | b"off");
        }
    }
    true
}

fn is_page_break(e: &BytesStart) -> bool {
    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == b"type" {
            return attr.value.as_ref() == b"page";
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    const PREFIX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#;
    const SUFFIX: &str = "</w:body></w:document>";

    fn body(inner: &str) -> String {
        format!("{PREFIX}{inner}{SUFFIX}")
    }

    #[test]
    fn test_paragraphs_and_runs() {
        let xml = body(
            "<w:p><w:r><w:t>Hello </w:t></w:r>\
             <w:r><w:rPr><w:b/></w:rPr><w:t>world</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Second</w:t></w:r></w:p>",
        );
        let doc = parse_document_xml(&xml).unwrap();

        assert_eq!(doc.block_count(), 2);
        let Block::Paragraph(p) = &doc.blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(p.runs, vec![Run::plain("Hello "), Run::bold("world")]);
    }

    #[test]
    fn test_bold_and_italic_flags() {
        let xml = body(
            "<w:p><w:r><w:rPr><w:b/><w:i/></w:rPr><w:t>both</w:t></w:r></w:p>",
        );
        let doc = parse_document_xml(&xml).unwrap();

        let Block::Paragraph(p) = &doc.blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(p.runs, vec![Run::styled("both", true, true)]);
    }

    #[test]
    fn test_val_false_disables_flag() {
        let xml = body(
            r#"<w:p><w:r><w:rPr><w:b w:val="false"/></w:rPr><w:t>plain</w:t></w:r></w:p>"#,
        );
        let doc = parse_document_xml(&xml).unwrap();

        let Block::Paragraph(p) = &doc.blocks[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(p.runs, vec![Run::plain("plain")]);
    }

    #[test]
    fn test_page_break_becomes_divider() {
        let xml = body(
            r#"<w:p><w:r><w:t>A</w:t></w:r></w:p>
               <w:p><w:r><w:br w:type="page"/></w:r></w:p>
               <w:p><w:r><w:t>B</w:t></w:r></w:p>"#,
        );
        let doc = parse_document_xml(&xml).unwrap();

        assert_eq!(doc.block_count(), 3);
        assert!(doc.blocks[1].is_divider());
        assert_eq!(doc.to_plain_text(), "A\n\nB");
    }

    #[test]
    fn test_line_break_is_not_a_divider() {
        let xml = body(r#"<w:p><w:r><w:t>A</w:t><w:br/><w:t>B</w:t></w:r></w:p>"#);
        let doc = parse_document_xml(&xml).unwrap();

        assert_eq!(doc.block_count(), 1);
    }

    #[test]
    fn test_empty_paragraphs_are_dropped() {
        let xml = body("<w:p/><w:p><w:r><w:t>only</w:t></w:r></w:p>");
        let doc = parse_document_xml(&xml).unwrap();

        assert_eq!(doc.block_count(), 1);
        assert_eq!(doc.to_plain_text(), "only");
    }

    #[test]
    fn test_garbage_bytes_are_corrupt() {
        let err = read(b"this is not a zip archive").unwrap_err();
        assert!(matches!(err, ImportError::Corrupt(_)));
    }

    #[test]
    fn test_zip_without_document_entry_is_corrupt() {
        let mut buffer = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(Cursor::new(&mut buffer));
            writer
                .start_file("unrelated.txt", zip::write::SimpleFileOptions::default())
                .unwrap();
            use std::io::Write;
            writer.write_all(b"hello").unwrap();
            writer.finish().unwrap();
        }

        let err = read(&buffer).unwrap_err();
        assert!(matches!(err, ImportError::Corrupt(_)));
    }
}
