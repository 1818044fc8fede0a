//! Placeholder substitution.
//!
//! Spans are replaced by placeholder tokens so that they survive
//! normalization untouched:
//!
//! ```text
//! text:      "Il gatto dorme"
//! mask:      [0, 0, -, 1, 1, 1, 1, 1, -, -, -, -, -, -]
//! rewritten: " §0  §1  dorme"
//! ```
use super::{Marker, Side, Span, SpanMask};

/// Result of a placeholder substitution on one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    /// Text where each masked run is a ` §n ` placeholder.
    pub text: String,
    /// Literal text of each span, indexed by span index.
    pub span_texts: Vec<String>,
}

/// Replace every run of masked characters with a single placeholder.
///
/// Unmasked characters are copied verbatim.
/// A new placeholder is only emitted when the mask value differs from the last emitted one,
/// which is not reset by unmasked characters.
///
/// Span texts are taken from each span's own range, so a span that is partly
/// overwritten by a later one still keeps its complete text.
pub fn rewrite(
    chars: &[char],
    mask: &SpanMask,
    spans: &[Span],
    side: Side,
    marker: Marker,
) -> Rewritten {
    let span_texts: Vec<String> = spans
        .iter()
        .map(|span| {
            let range = span.range(side).positions();
            chars
                .get(range.start.min(chars.len())..range.end.min(chars.len()))
                .map(|slice| slice.iter().collect())
                .unwrap_or_default()
        })
        .collect();

    let mut text = String::with_capacity(chars.len());
    let mut last = None;
    for (c, m) in chars.iter().zip(mask.iter()) {
        match m {
            None => text.push(*c),
            Some(idx) if last != Some(idx) => {
                text.push(' ');
                text.push_str(&marker.placeholder(idx));
                text.push(' ');
                last = Some(idx);
            }
            Some(_) => (),
        }
    }

    Rewritten { text, span_texts }
}
