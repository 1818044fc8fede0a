//! Per-character span ownership.
use crate::error::SpanError;

use super::{Side, Span};

/// Span index of each character of a text, or `None` for characters outside any span.
///
/// Overlapping ranges are not rejected: later spans of the list overwrite earlier ones
/// on the positions they share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanMask {
    inner: Vec<Option<usize>>,
}

impl SpanMask {
    /// Build the mask of one side of a sample.
    ///
    /// `len` is the length of the text in codepoints.
    /// Errors if a range ends past `len`.
    pub fn new(len: usize, spans: &[Span], side: Side) -> Result<Self, SpanError> {
        let mut inner = vec![None; len];
        for (idx, span) in spans.iter().enumerate() {
            let range = span.range(side);
            if !range.is_empty() && range.end > len {
                return Err(SpanError::OutOfBounds {
                    span: idx,
                    side,
                    end: range.end,
                    len,
                });
            }

            for pos in range.positions() {
                inner[pos] = Some(idx);
            }
        }

        Ok(Self { inner })
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.inner.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_mask() {
        let spans = vec![Span::new((0, 2), (0, 3)), Span::new((3, 8), (4, 7))];
        let mask = SpanMask::new(10, &spans, Side::Source).unwrap();
        let expected = vec![
            Some(0),
            Some(0),
            None,
            Some(1),
            Some(1),
            Some(1),
            Some(1),
            Some(1),
            None,
            None,
        ];
        assert_eq!(mask.iter().collect::<Vec<_>>(), expected);

        let mask: Vec<_> = SpanMask::new(8, &spans, Side::Target)
            .unwrap()
            .iter()
            .collect();
        assert_eq!(mask[3], None);
        assert_eq!(mask[4], Some(1));
        assert_eq!(mask[7], None);
    }

    #[test]
    fn last_span_wins() {
        let spans = vec![Span::new((0, 6), (0, 1)), Span::new((2, 4), (1, 2))];
        let mask = SpanMask::new(6, &spans, Side::Source).unwrap();
        let expected = vec![Some(0), Some(0), Some(1), Some(1), Some(0), Some(0)];
        assert_eq!(mask.iter().collect::<Vec<_>>(), expected);

        // reversed order: the large span swallows the small one
        let spans = vec![Span::new((2, 4), (1, 2)), Span::new((0, 6), (0, 1))];
        let mask = SpanMask::new(6, &spans, Side::Source).unwrap();
        assert!(mask.iter().all(|m| m == Some(1)));
    }

    #[test]
    fn out_of_bounds() {
        let spans = vec![Span::new((0, 2), (0, 3)), Span::new((3, 11), (4, 7))];
        let err = SpanMask::new(10, &spans, Side::Source).unwrap_err();
        assert_eq!(
            err,
            SpanError::OutOfBounds {
                span: 1,
                side: Side::Source,
                end: 11,
                len: 10
            }
        );
    }

    #[test]
    fn empty_range_masks_nothing() {
        let spans = vec![Span::new((3, 3), (0, 1)), Span::new((9, 4), (1, 2))];
        let mask = SpanMask::new(5, &spans, Side::Source).unwrap();
        assert!(mask.iter().all(|m| m.is_none()));
        assert_eq!(mask.iter().count(), 5);
    }
}
