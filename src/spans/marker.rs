//! Placeholder marker selection.
use std::fmt;

/// Default marker character.
pub const DEFAULT_MARKER: char = '§';

/// Character that prefixes placeholder tokens (`§3` is the placeholder of span 3).
///
/// The marker must not appear in the texts being rewritten,
/// otherwise original text could be mistaken for a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker(char);

impl Marker {
    /// Get a marker that is absent from every provided text.
    ///
    /// [DEFAULT_MARKER] is used when possible, then private use codepoints.
    pub fn for_texts(texts: &[&str]) -> Self {
        let unused = |c: &char| texts.iter().all(|text| !text.contains(*c));
        let mut candidates = std::iter::once(DEFAULT_MARKER)
            .chain('\u{E000}'..='\u{F8FF}')
            .chain('\u{F0000}'..='\u{FFFFD}');

        // exhausting ~72k codepoints would need a text of the same size.
        Self(candidates.find(unused).unwrap_or(DEFAULT_MARKER))
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    /// placeholder token for span `idx`.
    pub fn placeholder(&self, idx: usize) -> String {
        format!("{}{}", self.0, idx)
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self(DEFAULT_MARKER)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
