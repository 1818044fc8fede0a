//! Pipelines.
//!
//! Batch drivers over span lists, built on the light [pipeline::Pipeline] trait.
mod prepare;
#[allow(clippy::module_inception)]
pub mod pipeline;
mod show;

pub use pipeline::Pipeline;
pub use prepare::{prepare_records, PrepareAlignment, PrepareSummary};
pub use show::ShowAlignment;
