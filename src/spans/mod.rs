/*! Span protection.

Annotated spans are masked, then replaced by placeholder tokens so that
normalization of the surrounding text leaves them untouched.
The rewritten text is then split into [Part]s.
!*/
mod mask;
mod marker;
mod parts;
mod range;
mod rewrite;
mod unit;

pub use mask::SpanMask;
pub use marker::{Marker, DEFAULT_MARKER};
pub use parts::{split_parts, Part};
pub use range::{CharRange, Side, Span};
pub use rewrite::{rewrite, Rewritten};
pub use unit::OffsetUnit;
