/*! Filtering utilities

Filters operate on span records and implement [filter::Filter].
The default filter of each kind keeps everything.
! */
mod filter;
mod split;

pub use filter::Filter;
pub use split::SplitFilter;
