//! Span-annotated sentence pairs.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::spans::Span;

/// A sentence pair along with its annotated spans.
///
/// Field names of the annotation dataset (`ita`, `pms`, `spans_index`, `split`, `flores_id`)
/// are accepted as aliases. Other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanRecord {
    #[serde(alias = "ita", alias = "flores_ita")]
    pub source_text: String,
    #[serde(alias = "pms", alias = "flores_pms")]
    pub target_text: String,
    #[serde(alias = "spans_index", default)]
    pub span_char_ranges: Vec<Span>,
    #[serde(alias = "split", default, skip_serializing_if = "Option::is_none")]
    pub split_label: Option<String>,
    #[serde(alias = "flores_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

impl SpanRecord {
    pub fn new(source_text: &str, target_text: &str, span_char_ranges: Vec<Span>) -> Self {
        Self {
            source_text: source_text.to_string(),
            target_text: target_text.to_string(),
            span_char_ranges,
            split_label: None,
            id: None,
        }
    }

    pub fn with_split(mut self, split: &str) -> Self {
        self.split_label = Some(split.to_string());
        self
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// identifier of the record at `position` in its span list.
    pub fn sample_id(&self, position: usize) -> SampleId {
        SampleId::new(position, self.id)
    }
}

/// Identifies a sample in error messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleId {
    /// position in the (unfiltered) span list.
    pub position: usize,
    pub id: Option<u64>,
}

impl SampleId {
    pub fn new(position: usize, id: Option<u64>) -> Self {
        Self { position, id }
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "sample #{} (id {})", self.position, id),
            None => write!(f, "sample #{}", self.position),
        }
    }
}
