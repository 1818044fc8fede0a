//! Gold alignment preparation pipeline
//!
//! Turns a span list into the three line-aligned files consumed by alignment scorers:
//! gold alignments, tokenized source and tokenized target.
//!
//! # Processing
//! 1. The span list is read (JSON array or JSON lines).
//! 1. Records that are not in the requested split are discarded.
//! 1. Remaining records are aligned in parallel, keeping their order.
//! 1. Malformed samples abort the run before anything is written,
//!    or are skipped (on every file) with a warning.
//! 1. Alignments and tokenized texts are written, one line per sample.
use std::path::PathBuf;

use log::{debug, error, info, warn};
use rayon::prelude::*;

use crate::alignment::{PreparedSample, SpanAligner};
use crate::error::Error;
use crate::filtering::{Filter, SplitFilter};
use crate::io::{read_span_list, AlignmentWriter, OutputPaths, SampleId, SpanRecord, WriterTrait};
use crate::pipelines::pipeline::Pipeline;
use crate::tokenize::{Tokenize, Tokenizer};

/// Counts of a preparation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrepareSummary {
    pub written: usize,
    pub skipped: usize,
    pub filtered_out: usize,
}

/// Align the records kept by `filter`.
///
/// Records are processed in parallel, results are in record order.
/// Errors carry the id of their sample.
pub fn prepare_records<T: Tokenize + Sync>(
    records: &[SpanRecord],
    filter: &SplitFilter,
    aligner: &SpanAligner<T>,
) -> Vec<(SampleId, Result<PreparedSample, Error>)> {
    records
        .par_iter()
        .enumerate()
        .filter(|(_, record)| filter.detect(*record))
        .map(|(position, record)| {
            let id = record.sample_id(position);
            debug!("processing {}", id);
            let result = aligner
                .process(
                    &record.source_text,
                    &record.target_text,
                    &record.span_char_ranges,
                )
                .map_err(|reason| Error::malformed(id, reason));
            (id, result)
        })
        .collect()
}

pub struct PrepareAlignment<T = Tokenizer> {
    src: PathBuf,
    dst: OutputPaths,
    filter: SplitFilter,
    aligner: SpanAligner<T>,
    skip_malformed: bool,
}

impl<T: Tokenize + Sync> PrepareAlignment<T> {
    pub fn new(
        src: PathBuf,
        dst: OutputPaths,
        filter: SplitFilter,
        aligner: SpanAligner<T>,
    ) -> Self {
        if let Some(split) = filter.split() {
            info!("only keeping samples of split {}", split);
        }
        Self {
            src,
            dst,
            filter,
            aligner,
            skip_malformed: false,
        }
    }

    /// Skip malformed samples instead of failing.
    pub fn skip_malformed(mut self, skip: bool) -> Self {
        self.skip_malformed = skip;
        self
    }

    /// Keep successfully aligned samples, in order.
    ///
    /// Returns the samples and the number of skipped ones,
    /// or the first error if malformed samples are not skipped.
    pub fn collect_samples(
        &self,
        results: Vec<(SampleId, Result<PreparedSample, Error>)>,
    ) -> Result<(Vec<PreparedSample>, usize), Error> {
        let mut samples = Vec::with_capacity(results.len());
        let mut skipped = 0;
        for (id, result) in results {
            match result {
                Ok(sample) => samples.push(sample),
                Err(e) if self.skip_malformed => {
                    warn!("skipping {}: {}", id, e);
                    skipped += 1;
                }
                Err(e) => {
                    error!("{}", e);
                    return Err(e);
                }
            }
        }
        Ok((samples, skipped))
    }
}

impl<T: Tokenize + Sync> Pipeline<PrepareSummary> for PrepareAlignment<T> {
    fn run(&self) -> Result<PrepareSummary, Error> {
        let records = read_span_list(&self.src)?;
        let results = prepare_records(&records, &self.filter, &self.aligner);
        let filtered_out = records.len() - results.len();
        info!(
            "{} samples to align ({} filtered out)",
            results.len(),
            filtered_out
        );

        // nothing is written if a sample fails
        let (samples, skipped) = self.collect_samples(results)?;

        let mut writer = AlignmentWriter::create(&self.dst)?;
        writer.write(samples)?;
        writer.flush()?;

        let summary = PrepareSummary {
            written: writer.nb_samples(),
            skipped,
            filtered_out,
        };
        info!(
            "{} samples written, {} skipped",
            summary.written, summary.skipped
        );
        Ok(summary)
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
            SpanRecord::new("Ciao", "Cerea", vec![Span::new((0, 4), (0, 5))])
                .with_split("devtest")
                .with_id(2),
            // span 1 lost its target range
            SpanRecord::new(
                "Il cane abbaia",
                "Ël can a baula",
                vec![Span::new((0, 2), (0, 2)), Span::new((3, 7), (0, 0))],
            )
            .with_split("dev")
            .with_id(3),
        ]
    }

    #[test]
    fn results_in_order() {
        let records = records();
        let results = prepare_records(
            &records,
            &SplitFilter::default(),
            &SpanAligner::<Tokenizer>::default(),
        );
        let ids: Vec<_> = results.iter().map(|(id, _)| id.position).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(results[0].1.is_ok());
        assert!(results[1].1.is_ok());
        assert!(matches!(
            results[2].1,
            Err(Error::MalformedSpan {
                sample: SampleId {
                    position: 2,
                    id: Some(3)
                },
                ..
            })
        ));
    }

    #[test]
    fn split_filter() {
        let records = records();
        let results = prepare_records(
            &records,
            &SplitFilter::with_split("devtest"),
            &SpanAligner::<Tokenizer>::default(),
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, SampleId::new(1, Some(2)));
    }

    #[test]
    fn collect_fail_fast() {
        let records = records();
        let aligner = SpanAligner::<Tokenizer>::default();
        let pipeline = PrepareAlignment::new(
            PathBuf::new(),
            OutputPaths::in_dir(&PathBuf::new()),
            SplitFilter::default(),
            aligner.clone(),
        );
        let results = prepare_records(&records, &SplitFilter::default(), &aligner);
        assert!(pipeline.collect_samples(results).is_err());

        let pipeline = pipeline.skip_malformed(true);
        let results = prepare_records(&records, &SplitFilter::default(), &aligner);
        let (samples, skipped) = pipeline.collect_samples(results).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(skipped, 1);
        assert_eq!(samples[1].source, "ciao");
    }
}
