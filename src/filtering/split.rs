//! split-level filtering
use super::Filter;
use crate::io::SpanRecord;

/// Keeps records of a given split (`dev`, `devtest`...).
///
/// Keeps every record when no split is set.
/// Records without a split label are only kept in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitFilter {
    split: Option<String>,
}

impl SplitFilter {
    pub fn new(split: Option<String>) -> Self {
        Self { split }
    }

    /// Only keep records of `split`.
    pub fn with_split(split: &str) -> Self {
        Self {
            split: Some(split.to_string()),
        }
    }

    /// Get a reference to the filtered split.
    pub fn split(&self) -> Option<&str> {
        self.split.as_deref()
    }
}

impl Filter<&SpanRecord> for SplitFilter {
    fn detect(&self, record: &SpanRecord) -> bool {
        match &self.split {
            None => true,
            Some(split) => record.split_label.as_ref() == Some(split),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_all_by_default() {
        let f = SplitFilter::default();
        assert!(f.detect(&SpanRecord::new("a", "b", vec![])));
        assert!(f.detect(&SpanRecord::new("a", "b", vec![]).with_split("devtest")));
        assert_eq!(f.split(), None);
    }

    #[test]
    fn keep_split() {
        let f = SplitFilter::with_split("dev");
        assert!(f.detect(&SpanRecord::new("a", "b", vec![]).with_split("dev")));
        assert!(!f.detect(&SpanRecord::new("a", "b", vec![]).with_split("devtest")));
        assert!(!f.detect(&SpanRecord::new("a", "b", vec![])));
    }
}
