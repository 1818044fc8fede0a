//! Token offsets of parts.
use super::TokenizedSide;

/// Number of tokens that precede each part in the reconstructed text.
///
/// A placeholder counts for the tokens of its span text, not for one token.
/// Parts that tokenized to nothing still get an offset.
pub fn token_offsets(side: &TokenizedSide) -> Vec<usize> {
    side.parts
        .iter()
        .scan(0, |current, part| {
            let offset = *current;
            *current += side.part_tokens(part).len();
            Some(offset)
        })
        .collect()
}
