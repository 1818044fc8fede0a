//! Human-readable dump of aligned tokens.
//!
//! Each sample is printed as a header followed by its token pairs:
//!
//! ```text
//! # sample #0 (id 1)
//! il gatto dorme
//! ël gat ëd deurm
//! 0-0: il -> ël
//! 1-1: gatto -> gat
//! ```
//!
//! Malformed samples are reported inline and do not stop the dump.
use std::io::Write;
use std::path::PathBuf;

use log::warn;

use crate::alignment::SpanAligner;
use crate::error::Error;
use crate::filtering::{Filter, SplitFilter};
use crate::io::{read_span_list, SpanRecord};
use crate::pipelines::pipeline::Pipeline;
use crate::tokenize::{Tokenize, Tokenizer};

pub struct ShowAlignment<T = Tokenizer> {
    src: PathBuf,
    filter: SplitFilter,
    aligner: SpanAligner<T>,
    limit: Option<usize>,
}

impl<T: Tokenize> ShowAlignment<T> {
    pub fn new(src: PathBuf, filter: SplitFilter, aligner: SpanAligner<T>) -> Self {
        Self {
            src,
            filter,
            aligner,
            limit: None,
        }
    }

    /// Only show the first `limit` kept samples.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Write the dump of `records` into `out`.
    ///
    /// Returns the number of shown samples.
    pub fn write_to<W: Write>(
        &self,
        records: &[SpanRecord],
        out: &mut W,
    ) -> Result<usize, Error> {
        let kept = records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.filter.detect(*record))
            .take(self.limit.unwrap_or(usize::MAX));

        let mut nb_shown = 0;
        for (position, record) in kept {
            let id = record.sample_id(position);
            match self.aligner.process(
                &record.source_text,
                &record.target_text,
                &record.span_char_ranges,
            ) {
                Ok(sample) => {
                    writeln!(out, "# {}", id)?;
                    writeln!(out, "{}", sample.source)?;
                    writeln!(out, "{}", sample.target)?;
                    for (pair, source, target) in sample.linked_tokens() {
                        writeln!(out, "{}: {} -> {}", pair, source, target)?;
                    }
                }
                Err(reason) => {
                    let e = Error::malformed(id, reason);
                    warn!("{}", e);
                    writeln!(out, "# {}", e)?;
                }
            }
            writeln!(out)?;
            nb_shown += 1;
        }
        Ok(nb_shown)
    }
}

impl<T: Tokenize> Pipeline<()> for ShowAlignment<T> {
    fn run(&self) -> Result<(), Error> {
        let records = read_span_list(&self.src)?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&records, &mut out)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spans::Span;

    fn records() -> Vec<SpanRecord> {
        vec![
            SpanRecord::new(
                "Il gatto dorme",
                "Ël gat ëd deurm",
                vec![Span::new((0, 2), (0, 3)), Span::new((3, 8), (3, 6))],
            )
            .with_split("dev")
            .with_id(1),
            SpanRecord::new("Il cane", "Ël can", vec![Span::new((3, 7), (0, 0))])
                .with_split("dev")
                .with_id(2),
            SpanRecord::new("Ciao", "Cerea", vec![Span::new((0, 4), (0, 5))])
                .with_split("devtest")
                .with_id(3),
        ]
    }

    fn show(filter: SplitFilter, limit: Option<usize>) -> (usize, String) {
        let pipeline =
            ShowAlignment::new(PathBuf::new(), filter, SpanAligner::<Tokenizer>::default())
                .with_limit(limit);
        let mut out = Vec::new();
        let nb = pipeline.write_to(&records(), &mut out).unwrap();
        (nb, String::from_utf8(out).unwrap())
    }

    #[test]
    fn dump() {
        let (nb, out) = show(SplitFilter::default(), Some(1));
        assert_eq!(nb, 1);
        assert_eq!(
            out,
            "# sample #0 (id 1)\nil gatto dorme\nël gat ëd deurm\n0-0: il -> ël\n1-1: gatto -> gat\n\n"
        );
    }

    #[test]
    fn malformed_inline() {
        let (nb, out) = show(SplitFilter::with_split("dev"), None);
        assert_eq!(nb, 2);
        assert!(out.contains("# malformed spans in sample #1 (id 2)"));
        assert!(!out.contains("ciao"));
    }

    #[test]
    fn split_and_limit() {
        let (nb, out) = show(SplitFilter::with_split("devtest"), Some(5));
        assert_eq!(nb, 1);
        assert!(out.starts_with("# sample #2 (id 3)\nciao\ncerea\n0-0: ciao -> cerea\n"));
    }
}
