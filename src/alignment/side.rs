//! One side of a sentence pair, split and tokenized.
use log::debug;

use crate::error::SpanError;
use crate::spans::{rewrite, split_parts, Marker, Part, Side, Span, SpanMask};
use crate::tokenize::Tokenize;

/// A [Part] after tokenization.
///
/// Placeholders are kept as is: their tokens are the tokenized span text,
/// looked up by span index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizedPart {
    Placeholder(usize),
    Text(Vec<String>),
}

impl TokenizedPart {
    pub fn new<T: Tokenize + ?Sized>(part: Part, tokenizer: &T) -> Self {
        match part {
            Part::Placeholder(idx) => TokenizedPart::Placeholder(idx),
            Part::Text(text) => TokenizedPart::Text(tokenizer.tokenize(&text)),
        }
    }

    pub fn span(&self) -> Option<usize> {
        match self {
            TokenizedPart::Placeholder(idx) => Some(*idx),
            TokenizedPart::Text(_) => None,
        }
    }
}

/// Tokenized parts of a text, along with the tokenized text of each span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedSide {
    pub parts: Vec<TokenizedPart>,
    pub span_tokens: Vec<Vec<String>>,
}

impl TokenizedSide {
    /// Mask, rewrite, split and tokenize `side` of a sample.
    ///
    /// `spans` ranges have to be in codepoints.
    pub fn new<T: Tokenize + ?Sized>(
        text: &str,
        spans: &[Span],
        side: Side,
        marker: Marker,
        tokenizer: &T,
    ) -> Result<Self, SpanError> {
        let chars: Vec<char> = text.chars().collect();
        let mask = SpanMask::new(chars.len(), spans, side)?;
        let rewritten = rewrite(&chars, &mask, spans, side, marker);
        debug!("{} rewritten as {:?}", side, rewritten.text);

        let parts = split_parts(&rewritten.text, marker)
            .into_iter()
            .map(|part| TokenizedPart::new(part, tokenizer))
            .collect();
        let span_tokens = rewritten
            .span_texts
            .iter()
            .map(|span_text| tokenizer.tokenize(span_text))
            .collect();

        Ok(Self { parts, span_tokens })
    }

    /// number of tokens of span `idx`.
    pub fn span_len(&self, idx: usize) -> usize {
        self.span_tokens.get(idx).map_or(0, Vec::len)
    }

    /// tokens a part stands for in the reconstructed text.
    pub fn part_tokens<'a>(&'a self, part: &'a TokenizedPart) -> &'a [String] {
        match part {
            TokenizedPart::Text(tokens) => tokens,
            TokenizedPart::Placeholder(idx) => self
                .span_tokens
                .get(*idx)
                .map(Vec::as_slice)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::Tokenizer;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn tokenized_side() {
        let spans = vec![Span::new((0, 2), (0, 3)), Span::new((3, 8), (3, 6))];
        let side = TokenizedSide::new(
            "Il gatto dorme.",
            &spans,
            Side::Source,
            Marker::default(),
            &Tokenizer::default(),
        )
        .unwrap();

        assert_eq!(
            side.parts,
            vec![
                TokenizedPart::Placeholder(0),
                TokenizedPart::Placeholder(1),
                TokenizedPart::Text(owned(&["dorme"])),
            ]
        );
        assert_eq!(side.span_tokens, vec![owned(&["il"]), owned(&["gatto"])]);
        assert_eq!(side.span_len(1), 1);
        assert_eq!(side.span_len(7), 0);
        assert_eq!(side.part_tokens(&side.parts[1]), &["gatto".to_string()]);
    }

    #[test]
    fn punctuation_only_part() {
        let spans = vec![Span::new((0, 2), (0, 1)), Span::new((4, 9), (1, 2))];
        let side = TokenizedSide::new(
            "Sì, certo.",
            &spans,
            Side::Source,
            Marker::default(),
            &Tokenizer::default(),
        )
        .unwrap();
        assert_eq!(side.span_tokens, vec![owned(&["sì"]), owned(&["certo"])]);
        assert_eq!(
            side.parts,
            vec![
                TokenizedPart::Placeholder(0),
                TokenizedPart::Text(vec![]),
                TokenizedPart::Placeholder(1),
                TokenizedPart::Text(vec![]),
            ]
        );
    }
}
