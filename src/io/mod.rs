/*!
# IO utilities

Span list loading and aligned output writing.
!*/
pub mod reader;
mod record;
pub mod writer;

pub use reader::read_span_list;
pub use record::{SampleId, SpanRecord};
pub use writer::{AlignmentWriter, OutputPaths, WriterTrait};
