//! Offset units of span ranges.
use std::str::FromStr;

use crate::error::SpanError;

use super::{CharRange, Side, Span};

/// What span offsets count.
///
/// Internally every range is handled in codepoints:
/// [OffsetUnit::to_chars] converts byte ranges beforehand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetUnit {
    /// Unicode codepoints.
    #[default]
    Chars,
    /// UTF-8 bytes. Offsets must fall on char boundaries.
    Bytes,
}

impl OffsetUnit {
    /// Convert the `side` ranges of `spans` into codepoint ranges over `text`.
    ///
    /// Returns the spans unchanged for [OffsetUnit::Chars].
    pub fn to_chars(&self, text: &str, spans: &[Span], side: Side) -> Result<Vec<Span>, SpanError> {
        match self {
            OffsetUnit::Chars => Ok(spans.to_vec()),
            OffsetUnit::Bytes => spans
                .iter()
                .enumerate()
                .map(|(idx, span)| {
                    let range = span.range(side);
                    // empty ranges mask nothing, wherever they point
                    if range.is_empty() {
                        return Ok(*span);
                    }
                    let converted = CharRange::new(
                        Self::char_offset(text, idx, side, range.start)?,
                        Self::char_offset(text, idx, side, range.end)?,
                    );
                    Ok(match side {
                        Side::Source => Span::new(converted, span.target),
                        Side::Target => Span::new(span.source, converted),
                    })
                })
                .collect(),
        }
    }

    fn char_offset(text: &str, span: usize, side: Side, byte: usize) -> Result<usize, SpanError> {
        if byte > text.len() {
            return Err(SpanError::OutOfBounds {
                span,
                side,
                end: byte,
                len: text.len(),
            });
        }
        if !text.is_char_boundary(byte) {
            return Err(SpanError::NotCharBoundary {
                span,
                side,
                offset: byte,
            });
        }
        Ok(text[..byte].chars().count())
    }
}

impl FromStr for OffsetUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chars" | "char" => Ok(OffsetUnit::Chars),
            "bytes" | "byte" => Ok(OffsetUnit::Bytes),
            other => Err(format!(
                "unknown offset unit {:?} (expected chars or bytes)",
                other
            )),
        }
    }
}
