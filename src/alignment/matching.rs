//! Cross-side matching of placeholders.
use crate::error::SpanError;

use super::TokenizedPart;

/// A span found on both sides, with the position of its part on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartMatch {
    pub span: usize,
    pub source_part: usize,
    pub target_part: usize,
}

/// Match every source placeholder with the target placeholder of the same span.
///
/// Matches follow source part order. When a span has several target placeholders,
/// the first one is used.
///
/// Fails if a source placeholder has no target counterpart,
/// or if the number of source placeholders is not `nb_spans`.
pub fn match_parts(
    source: &[TokenizedPart],
    target: &[TokenizedPart],
    nb_spans: usize,
) -> Result<Vec<PartMatch>, SpanError> {
    let mut target_parts: Vec<Option<usize>> = vec![None; nb_spans];
    for (idx, span) in target
        .iter()
        .enumerate()
        .filter_map(|(idx, part)| part.span().map(|span| (idx, span)))
    {
        if let Some(slot) = target_parts.get_mut(span) {
            slot.get_or_insert(idx);
        }
    }

    let matches = source
        .iter()
        .enumerate()
        .filter_map(|(idx, part)| part.span().map(|span| (idx, span)))
        .map(|(source_part, span)| {
            target_parts
                .get(span)
                .copied()
                .flatten()
                .map(|target_part| PartMatch {
                    span,
                    source_part,
                    target_part,
                })
                .ok_or(SpanError::MissingTarget { span })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if matches.len() != nb_spans {
        return Err(SpanError::CountMismatch {
            expected: nb_spans,
            found: matches.len(),
        });
    }

    Ok(matches)
}
