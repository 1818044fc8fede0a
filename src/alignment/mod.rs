/*! Token alignment extraction.

Once both sides are split in [TokenizedPart]s, placeholders are matched across sides,
token offsets of each part are computed and every matched span emits
the cartesian product of its source and target token positions.

[SpanAligner] runs the whole process on a sentence pair.
!*/
mod aligner;
mod emit;
mod matching;
mod offsets;
mod reconstruct;
mod side;

pub use aligner::{PreparedSample, SpanAligner};
pub use emit::{emit, Alignment, AlignmentPair};
pub use matching::{match_parts, PartMatch};
pub use offsets::token_offsets;
pub use reconstruct::{reconstruct, tokens};
pub use side::{TokenizedPart, TokenizedSide};
