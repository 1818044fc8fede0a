//! Reconstruction of the tokenized text.
use super::TokenizedSide;

/// Tokens of the reconstructed text, in part order.
///
/// This is the index space of [super::AlignmentPair]s:
/// it walks parts exactly like [super::token_offsets].
pub fn tokens(side: &TokenizedSide) -> Vec<&str> {
    side.parts
        .iter()
        .flat_map(|part| side.part_tokens(part))
        .map(String::as_str)
        .collect()
}

/// Space-joined reconstructed text.
///
/// Tokens carry no whitespace and are never empty,
/// so splitting the result on spaces gives [tokens] back.
pub fn reconstruct(side: &TokenizedSide) -> String {
    tokens(side).join(" ")
}
