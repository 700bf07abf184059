//! Line and paragraph reconstruction for PDF text extraction.
//!
//! PDF content streams yield text fragments in draw order with exact
//! positions but no semantic grouping. Fragments are regrouped into visual
//! lines using a fixed baseline tolerance, then emitted as paragraphs in
//! reading order.

use std::cmp::Ordering;

use crate::model::Paragraph;

/// Default baseline tolerance in layout units.
pub const DEFAULT_LINE_TOLERANCE: f64 = 2.0;

/// A positioned text token extracted from one PDF page, prior to line
/// reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Baseline X position (left edge of the drawn text).
    pub x: f64,
    /// Baseline Y position. Larger values are closer to the top of the page.
    pub y: f64,
    /// Decoded text.
    pub text: String,
}

impl Fragment {
    /// Create a new fragment.
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
        }
    }
}

/// Regroup one page's fragments into ordered paragraphs.
///
/// Fragments are sorted top-to-bottom (descending `y`, ascending `x` on
/// ties) and partitioned into lines: a fragment whose `y` differs from the
/// line's reference baseline by more than `tolerance` starts a new line.
/// The reference baseline is pinned to the line's first fragment; it does
/// not drift as fragments accumulate, so a tall line cannot swallow its
/// neighbours. Within a line, fragments are concatenated left to right
/// with no separator. Lines that are blank after trimming are treated as
/// inter-paragraph spacing and dropped.
pub fn reconstruct_page(mut fragments: Vec<Fragment>, tolerance: f64) -> Vec<Paragraph> {
    fragments.sort_by(|a, b| {
        cmp_f64(b.y, a.y).then_with(|| cmp_f64(a.x, b.x))
    });

    let mut paragraphs = Vec::new();
    let mut line: Vec<Fragment> = Vec::new();
    let mut reference_y = 0.0_f64;

    for fragment in fragments {
        if line.is_empty() {
            reference_y = fragment.y;
        } else if (fragment.y - reference_y).abs() > tolerance {
            flush_line(&mut paragraphs, std::mem::take(&mut line));
            reference_y = fragment.y;
        }
        line.push(fragment);
    }
    flush_line(&mut paragraphs, line);

    paragraphs
}

fn flush_line(paragraphs: &mut Vec<Paragraph>, mut line: Vec<Fragment>) {
    if line.is_empty() {
        return;
    }
    line.sort_by(|a, b| cmp_f64(a.x, b.x));
    let text: String = line.into_iter().map(|f| f.text).collect();
    if text.trim().is_empty() {
        return;
    }
    paragraphs.push(Paragraph::with_text(text));
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
