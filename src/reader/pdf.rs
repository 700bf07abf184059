//! PDF reader.
//!
//! Loads the byte stream with `lopdf`, interprets the text-positioning
//! subset of each page's content stream into positioned fragments, and
//! hands them to the layout reconstructor. Pages are concatenated in page
//! order with a divider between consecutive pages.

use lopdf::content::Content;
use lopdf::{Document as PdfDocument, Object};

use super::layout::{reconstruct_page, Fragment};
use super::ReadOptions;
use crate::error::{ImportError, ImportResult};
use crate::model::{Document, DocumentBuilder};

pub fn read(data: &[u8], options: &ReadOptions) -> ImportResult<Document> {
    let pdf = PdfDocument::load_mem(data)?;
    if pdf.is_encrypted() {
        return Err(ImportError::Unsupported("encrypted PDF".into()));
    }

    let pages = pdf.get_pages();
    let page_count = pages.len();
    log::debug!("PDF loaded: {page_count} pages");

    let mut builder = DocumentBuilder::new();
    for (index, (_page_number, page_id)) in pages.into_iter().enumerate() {
        let data = pdf.get_page_content(page_id)?;
        let content = Content::decode(&data)?;
        let fragments = collect_fragments(&content);

        for paragraph in reconstruct_page(fragments, options.line_tolerance) {
            builder.paragraph(paragraph);
        }
        if index + 1 < page_count {
            builder.divider();
        }
    }

    Ok(builder.build())
}

/// Interpret text-positioning and text-showing operators into fragments.
///
/// Tracks the text line origin through `Tm`/`Td`/`TD`/`TL`/`T*`; each
/// text-showing operator emits one fragment at the current origin. Draw
/// order within a shared position is preserved by the reconstructor's
/// stable sort.
fn collect_fragments(content: &Content) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut x = 0.0_f64;
    let mut y = 0.0_f64;
    let mut leading = 0.0_f64;

    for op in &content.operations {
        match op.operator.as_str() {
            "BT" => {
                x = 0.0;
                y = 0.0;
                leading = 0.0;
            }
            "Tm" if op.operands.len() >= 6 => {
                x = number(&op.operands[4]);
                y = number(&op.operands[5]);
            }
            "Td" if op.operands.len() >= 2 => {
                x += number(&op.operands[0]);
                y += number(&op.operands[1]);
            }
            "TD" if op.operands.len() >= 2 => {
                leading = -number(&op.operands[1]);
                x += number(&op.operands[0]);
                y += number(&op.operands[1]);
            }
            "TL" if !op.operands.is_empty() => {
                leading = number(&op.operands[0]);
            }
            "T*" => {
                y -= leading;
            }
            "Tj" => {
                if let Some(text) = op.operands.first().and_then(string_of) {
                    push_fragment(&mut fragments, x, y, text);
                }
            }
            "'" => {
                y -= leading;
                if let Some(text) = op.operands.first().and_then(string_of) {
                    push_fragment(&mut fragments, x, y, text);
                }
            }
            "\"" => {
                y -= leading;
                if let Some(text) = op.operands.get(2).and_then(string_of) {
                    push_fragment(&mut fragments, x, y, text);
                }
            }
            "TJ" => {
                if let Some(Object::Array(items)) = op.operands.first() {
                    let text: String = items.iter().filter_map(string_of).collect();
                    push_fragment(&mut fragments, x, y, text);
                }
            }
            _ => {}
        }
    }

    fragments
}

fn push_fragment(fragments: &mut Vec<Fragment>, x: f64, y: f64, text: String) {
    if !text.is_empty() {
        fragments.push(Fragment::new(x, y, text));
    }
}

fn number(object: &Object) -> f64 {
    match object {
        Object::Integer(v) => *v as f64,
        Object::Real(v) => f64::from(*v),
        _ => 0.0,
    }
}

fn string_of(object: &Object) -> Option<String> {
    match object {
        Object::String(bytes, _) => Some(decode_text(bytes)),
        _ => None,
    }
}

/// Decode a text-showing operand: UTF-16BE with BOM, then UTF-8, then a
/// byte-per-char fallback.
fn decode_text(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
