//! Per-sample alignment extraction.
use log::debug;

use crate::error::SpanError;
use crate::spans::{Marker, OffsetUnit, Side, Span};
use crate::tokenize::{Tokenize, Tokenizer};

use super::{
    emit, match_parts, reconstruct, token_offsets, Alignment, AlignmentPair, TokenizedSide,
};

/// Gold alignment and tokenized texts of a sentence pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSample {
    pub alignment: Alignment,
    pub source: String,
    pub target: String,
}

impl PreparedSample {
    /// Pairs along with the tokens they link.
    ///
    /// Pairs pointing outside of the tokenized texts are skipped.
    pub fn linked_tokens(&self) -> Vec<(AlignmentPair, &str, &str)> {
        let source: Vec<&str> = self.source.split(' ').collect();
        let target: Vec<&str> = self.target.split(' ').collect();
        self.alignment
            .pairs()
            .iter()
            .filter_map(|pair| {
                Some((
                    *pair,
                    *source.get(pair.source)?,
                    *target.get(pair.target)?,
                ))
            })
            .collect()
    }
}

/// Turns span-annotated sentence pairs into token alignments.
///
/// Processing goes, for each side: mask spans, replace them with placeholders,
/// split on placeholders, tokenize parts and compute their token offsets.
/// Placeholders are then matched across sides and each matched span emits the
/// cartesian product of its token positions.
#[derive(Debug, Clone, Default)]
pub struct SpanAligner<T = Tokenizer> {
    tokenizer: T,
    unit: OffsetUnit,
}

impl<T: Tokenize> SpanAligner<T> {
    pub fn new(tokenizer: T, unit: OffsetUnit) -> Self {
        Self { tokenizer, unit }
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    pub fn unit(&self) -> OffsetUnit {
        self.unit
    }

    /// Align a sentence pair.
    ///
    /// Errors when spans are out of bounds or cannot be found on both sides.
    pub fn process(
        &self,
        source_text: &str,
        target_text: &str,
        spans: &[Span],
    ) -> Result<PreparedSample, SpanError> {
        let spans = self.unit.to_chars(source_text, spans, Side::Source)?;
        let spans = self.unit.to_chars(target_text, &spans, Side::Target)?;
        let marker = Marker::for_texts(&[source_text, target_text]);

        let source =
            TokenizedSide::new(source_text, &spans, Side::Source, marker, &self.tokenizer)?;
        let target =
            TokenizedSide::new(target_text, &spans, Side::Target, marker, &self.tokenizer)?;

        let matches = match_parts(&source.parts, &target.parts, spans.len())?;

        let source_offsets = token_offsets(&source);
        let target_offsets = token_offsets(&target);
        debug!(
            "offsets: source {:?}, target {:?}",
            source_offsets, target_offsets
        );

        let alignment = emit(
            &matches,
            &source,
            &target,
            &source_offsets,
            &target_offsets,
        );

        Ok(PreparedSample {
            alignment,
            source: reconstruct(&source),
            target: reconstruct(&target),
        })
    }
}
