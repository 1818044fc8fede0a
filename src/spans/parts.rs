//! Splitting of rewritten text into placeholders and ordinary text.
use super::Marker;

/// Contiguous slice of a rewritten text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// Placeholder of the span with this index.
    Placeholder(usize),
    /// Ordinary text, trimmed and non-empty.
    Text(String),
}

impl Part {
    /// span index if the part is a placeholder.
    pub fn span(&self) -> Option<usize> {
        match self {
            Part::Placeholder(idx) => Some(*idx),
            Part::Text(_) => None,
        }
    }
}

/// Split `text` on `marker` placeholders (marker followed by digits).
///
/// Text between placeholders is trimmed, and dropped when it is left empty.
/// Part order follows the text.
pub fn split_parts(text: &str, marker: Marker) -> Vec<Part> {
    fn push_text(parts: &mut Vec<Part>, s: &str) {
        let s = s.trim();
        if !s.is_empty() {
            parts.push(Part::Text(s.to_string()));
        }
    }

    let mut parts = Vec::new();
    let m = marker.as_char();
    let mut last_end = 0;
    let mut search_from = 0;
    while let Some(found) = text[search_from..].find(m) {
        let start = search_from + found;
        let digits_start = start + m.len_utf8();
        let digits_len = text[digits_start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        let digits_end = digits_start + digits_len;

        match text[digits_start..digits_end].parse::<usize>() {
            Ok(idx) if digits_len > 0 => {
                push_text(&mut parts, &text[last_end..start]);
                parts.push(Part::Placeholder(idx));
                last_end = digits_end;
            }
            // lone marker: keep it as text
            _ => (),
        }
        search_from = digits_start;
    }
    push_text(&mut parts, &text[last_end..]);

    parts
}
