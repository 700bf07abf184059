//! HTML reader (structure-preserving).
//!
//! Walks editor-grade HTML with a lenient event parser: block elements
//! open paragraphs, `b`/`strong` and `i`/`em` set run flags, `hr` becomes
//! a divider. Mismatched or unclosed tags do not abort the walk.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{ImportError, ImportResult};
use crate::model::{Document, DocumentBuilder, Run};

pub fn read(data: &[u8]) -> ImportResult<Document> {
    let html = String::from_utf8_lossy(data);
    parse_fragment(&html)
}

/// Parse an HTML fragment (or full page) into block/run structure.
pub(crate) fn parse_fragment(html: &str) -> ImportResult<Document> {
    let mut reader = Reader::from_str(html);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut builder = DocumentBuilder::new();
    let mut bold = 0usize;
    let mut italic = 0usize;
    let mut skip = 0usize;
    let mut in_paragraph = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.name().as_ref().to_ascii_lowercase();
                if skip > 0 {
                    if is_skipped_tag(&name) {
                        skip += 1;
                    }
                    continue;
                }
                match name.as_slice() {
                    tag if is_skipped_tag(tag) => skip += 1,
                    tag if is_block_tag(tag) => {
                        builder.open_paragraph();
                        in_paragraph = true;
                    }
                    b"b" | b"strong" => bold += 1,
                    b"i" | b"em" => italic += 1,
                    b"br" => {
                        builder.run(Run::styled("\n", bold > 0, italic > 0));
                    }
                    b"hr" => {
                        builder.divider();
                        in_paragraph = false;
                    }
                    _ => {}
                }
            }
            Ok(Event::Empty(e)) => {
                if skip > 0 {
                    continue;
                }
                let name = e.name().as_ref().to_ascii_lowercase();
                match name.as_slice() {
                    b"br" => {
                        builder.run(Run::styled("\n", bold > 0, italic > 0));
                    }
                    b"hr" => {
                        builder.divider();
                        in_paragraph = false;
                    }
                    _ => {}
                }
            }
            Ok(Event::End(e)) => {
                let name = e.name().as_ref().to_ascii_lowercase();
                if skip > 0 {
                    if is_skipped_tag(&name) {
                        skip -= 1;
                    }
                    continue;
                }
                match name.as_slice() {
                    tag if is_block_tag(tag) => {
                        builder.close_paragraph();
                        in_paragraph = false;
                    }
                    b"b" | b"strong" => bold = bold.saturating_sub(1),
                    b"i" | b"em" => italic = italic.saturating_sub(1),
                    _ => {}
                }
            }
            Ok(Event::Text(t)) => {
                if skip > 0 {
                    continue;
                }
                let text = match t.unescape() {
                    Ok(text) => text.into_owned(),
                    // Keep going on a malformed entity; the raw bytes are
                    // still the closest reading of the author's intent.
                    Err(_) => String::from_utf8_lossy(t.as_ref()).into_owned(),
                };
                if !in_paragraph && text.trim().is_empty() {
                    continue;
                }
                builder.run(Run::styled(text, bold > 0, italic > 0));
            }
            Ok(Event::CData(e)) => {
                if skip > 0 {
                    continue;
                }
                let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                builder.run(Run::styled(text, bold > 0, italic > 0));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(ImportError::Corrupt(format!("HTML parse error: {e}"))),
        }
    }

    Ok(builder.build())
}

fn is_block_tag(name: &[u8]) -> bool {
    matches!(
        name,
        b"p" | b"div"
            | b"h1"
            | b"h2"
            | b"h3"
            | b"h4"
            | b"h5"
            | b"h6"
            | b"li"
            | b"blockquote"
            | b"pre"
    )
}

fn is_skipped_tag(name: &[u8]) -> bool {
    matches!(name, b"script" | b"style" | b"head")
}
