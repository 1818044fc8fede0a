//! Error enum
use std::fmt;

use crate::io::SampleId;
use crate::spans::Side;

/// Defects in the span annotations of a single sample.
///
/// These are data-quality problems: the sample cannot be aligned as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// A range ends past the end of its text.
    OutOfBounds {
        span: usize,
        side: Side,
        end: usize,
        len: usize,
    },
    /// A byte offset falls inside a multibyte character.
    NotCharBoundary {
        span: usize,
        side: Side,
        offset: usize,
    },
    /// A source placeholder has no target counterpart.
    MissingTarget { span: usize },
    /// The number of source placeholders differs from the number of spans.
    CountMismatch { expected: usize, found: usize },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::OutOfBounds {
                span,
                side,
                end,
                len,
            } => write!(
                f,
                "span {} ends at {} but {} text has length {}",
                span, end, side, len
            ),
            SpanError::NotCharBoundary { span, side, offset } => write!(
                f,
                "span {} has {} offset {} inside a character",
                span, side, offset
            ),
            SpanError::MissingTarget { span } => {
                write!(f, "span {} is missing on the target side", span)
            }
            SpanError::CountMismatch { expected, found } => write!(
                f,
                "expected {} aligned spans, found {} on the source side",
                expected, found
            ),
        }
    }
}

impl std::error::Error for SpanError {}

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Custom(String),
    MalformedSpan { sample: SampleId, reason: SpanError },
}

impl Error {
    /// attach a sample identifier to a [SpanError].
    pub fn malformed(sample: SampleId, reason: SpanError) -> Self {
        Error::MalformedSpan { sample, reason }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "could not read span list: {}", e),
            Error::Custom(s) => write!(f, "{}", s),
            Error::MalformedSpan { sample, reason } => {
                write!(f, "malformed spans in {}: {}", sample, reason)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Serde(e) => Some(e),
            Error::MalformedSpan { reason, .. } => Some(reason),
            Error::Custom(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_display_has_sample() {
        let err = Error::malformed(
            SampleId::new(3, Some(997)),
            SpanError::MissingTarget { span: 1 },
        );
        let msg = err.to_string();
        assert!(msg.contains("sample #3"));
        assert!(msg.contains("997"));
        assert!(msg.contains("span 1"));
    }

    #[test]
    fn out_of_bounds_display() {
        let e = SpanError::OutOfBounds {
            span: 0,
            side: Side::Target,
            end: 12,
            len: 10,
        };
        assert_eq!(
            e.to_string(),
            "span 0 ends at 12 but target text has length 10"
        );
    }
}
