//! Annotated spans and their character ranges.
use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` range, counted in unicode codepoints.
///
/// Serialized as a two-element array (`[start, end]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct CharRange {
    pub start: usize,
    pub end: usize,
}

impl CharRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Inverted ranges are considered empty.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Iterate over covered positions. Empty if the range is inverted.
    pub fn positions(&self) -> Range<usize> {
        self.start..self.end.max(self.start)
    }
}

impl From<(usize, usize)> for CharRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl From<CharRange> for (usize, usize) {
    fn from(r: CharRange) -> Self {
        (r.start, r.end)
    }
}

impl fmt::Display for CharRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Side of a sentence pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => write!(f, "source"),
            Side::Target => write!(f, "target"),
        }
    }
}

/// A human-annotated phrase correspondence.
///
/// A span has no identity apart from its position in the span list of its sample.
/// Serialized as `[[src_start, src_end], [tgt_start, tgt_end]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(CharRange, CharRange)", into = "(CharRange, CharRange)")]
pub struct Span {
    pub source: CharRange,
    pub target: CharRange,
}

impl Span {
    pub fn new(source: impl Into<CharRange>, target: impl Into<CharRange>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// get the range of the provided side.
    pub fn range(&self, side: Side) -> CharRange {
        match side {
            Side::Source => self.source,
            Side::Target => self.target,
        }
    }
}

impl From<(CharRange, CharRange)> for Span {
    fn from((source, target): (CharRange, CharRange)) -> Self {
        Self { source, target }
    }
}

impl From<Span> for (CharRange, CharRange) {
    fn from(s: Span) -> Self {
        (s.source, s.target)
    }
}
