//! Pipeline trait.
use crate::error::Error;

/// A runnable command over a span list.
///
/// Generic over the return type so that pipelines can report
/// what they did (see [super::PrepareSummary]) or nothing at all.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
