//! Writer for alignment/source/target file triples.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::alignment::PreparedSample;
use crate::error::Error;

use super::WriterTrait;

/// Destination of each output stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub alignments: PathBuf,
    pub source: PathBuf,
    pub target: PathBuf,
}

impl OutputPaths {
    pub fn new(alignments: PathBuf, source: PathBuf, target: PathBuf) -> Self {
        Self {
            alignments,
            source,
            target,
        }
    }

    /// `gold.align`, `source.tok` and `target.tok` in `dst`.
    pub fn in_dir(dst: &Path) -> Self {
        Self::new(
            dst.join("gold.align"),
            dst.join("source.tok"),
            dst.join("target.tok"),
        )
    }
}

/// Writes [PreparedSample]s, one line per sample in each of the three streams.
///
/// A sample is fully formatted before anything is written,
/// so the streams stay line-aligned.
pub struct AlignmentWriter<W: Write> {
    alignments: W,
    source: W,
    target: W,
    nb_samples: usize,
}

impl AlignmentWriter<BufWriter<File>> {
    /// Create (or truncate) the three files.
    pub fn create(paths: &OutputPaths) -> Result<Self, Error> {
        info!(
            "writing alignments to {:?}, tokenized texts to {:?} and {:?}",
            paths.alignments, paths.source, paths.target
        );
        Ok(Self::from_writers(
            BufWriter::new(File::create(&paths.alignments)?),
            BufWriter::new(File::create(&paths.source)?),
            BufWriter::new(File::create(&paths.target)?),
        ))
    }
}

impl<W: Write> AlignmentWriter<W> {
    pub fn from_writers(alignments: W, source: W, target: W) -> Self {
        Self {
            alignments,
            source,
            target,
            nb_samples: 0,
        }
    }

    /// number of samples written so far.
    pub fn nb_samples(&self) -> usize {
        self.nb_samples
    }

    /// Flush and give back the inner writers (alignments, source, target).
    #[cfg(test)]
    pub(crate) fn into_inner(mut self) -> Result<(W, W, W), Error> {
        WriterTrait::flush(&mut self)?;
        Ok((self.alignments, self.source, self.target))
    }
}

impl<W: Write> WriterTrait for AlignmentWriter<W> {
    type Item = PreparedSample;

    fn write(&mut self, vals: Vec<PreparedSample>) -> Result<(), Error> {
        debug!("writing {} samples", vals.len());
        for sample in &vals {
            self.write_single(sample)?;
        }
        Ok(())
    }

    fn write_single(&mut self, sample: &PreparedSample) -> Result<(), Error> {
        let alignment = format!("{}\n", sample.alignment);
        let source = format!("{}\n", sample.source);
        let target = format!("{}\n", sample.target);

        self.alignments.write_all(alignment.as_bytes())?;
        self.source.write_all(source.as_bytes())?;
        self.target.write_all(target.as_bytes())?;
        self.nb_samples += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.alignments.flush()?;
        self.source.flush()?;
        self.target.flush()?;
        Ok(())
    }
}
