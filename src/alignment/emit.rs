//! Token-level alignment pairs.
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use super::{PartMatch, TokenizedSide};

/// `(source_token_index, target_token_index)`, 0-based in each reconstructed text.
///
/// Displayed as `i-j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlignmentPair {
    pub source: usize,
    pub target: usize,
}

impl AlignmentPair {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }
}

impl fmt::Display for AlignmentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

impl FromStr for AlignmentPair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (source, target) = s
            .split_once('-')
            .ok_or_else(|| format!("invalid alignment pair {:?}", s))?;
        let parse = |idx: &str| {
            idx.parse::<usize>()
                .map_err(|e| format!("invalid alignment pair {:?}: {}", s, e))
        };
        Ok(Self::new(parse(source)?, parse(target)?))
    }
}

/// Alignment of a sentence pair, in emission order.
///
/// Displayed as space-separated `i-j` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment(pub Vec<AlignmentPair>);

impl Alignment {
    pub fn pairs(&self) -> &[AlignmentPair] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(AlignmentPair::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Alignment)
    }
}

/// Emit the token pairs induced by matched spans.
///
/// Each span yields the full cartesian product of its source and target token positions:
/// a 3-token phrase matched with a 2-token one gives 6 pairs.
/// Pairs follow match order, then row-major order inside a span.
pub fn emit(
    matches: &[PartMatch],
    source: &TokenizedSide,
    target: &TokenizedSide,
    source_offsets: &[usize],
    target_offsets: &[usize],
) -> Alignment {
    let pairs = matches
        .iter()
        .flat_map(|m| {
            let src_start = source_offsets[m.source_part];
            let trg_start = target_offsets[m.target_part];
            let src_range = src_start..src_start + source.span_len(m.span);
            let trg_range = trg_start..trg_start + target.span_len(m.span);
            src_range
                .cartesian_product(trg_range)
                .map(|(i, j)| AlignmentPair::new(i, j))
        })
        .collect();

    Alignment(pairs)
}
