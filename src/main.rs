//! # spanalign
//!
//! Builds gold word alignments from sentence pairs annotated with aligned spans.
//!
//! ## Getting started
//!
//! ```sh
//! spanalign 0.1.0
//! gold word alignments from span-annotated sentence pairs.
//!
//! USAGE:
//!     spanalign <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     help       Prints this message or the help of the given subcommand(s)
//!     prepare    Write gold alignments and tokenized texts
//!     show       Print aligned tokens of each sample
//! ```
//!
//! Logging is configured through `RUST_LOG` (e.g. `RUST_LOG=spanalign=debug`).
use spanalign::alignment::SpanAligner;
use spanalign::error::Error;
use spanalign::filtering::SplitFilter;
use spanalign::io::OutputPaths;
use spanalign::pipelines::{Pipeline, PrepareAlignment, ShowAlignment};
use spanalign::tokenize::Tokenizer;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

impl cli::Common {
    fn aligner(&self) -> SpanAligner {
        SpanAligner::new(Tokenizer::with_punctuation(&self.punctuation), self.offsets)
    }

    fn filter(&self) -> SplitFilter {
        SplitFilter::new(self.split.clone())
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Spanalign::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Spanalign::Prepare(p) => {
            let dst = OutputPaths::new(p.alignments, p.src_out, p.trg_out);
            let pipeline = PrepareAlignment::new(
                p.common.span_list.clone(),
                dst,
                p.common.filter(),
                p.common.aligner(),
            )
            .skip_malformed(p.skip_malformed);
            let summary = pipeline.run()?;
            info!("done: {:?}", summary);
        }
        cli::Spanalign::Show(s) => {
            let pipeline = ShowAlignment::new(
                s.common.span_list.clone(),
                s.common.filter(),
                s.common.aligner(),
            )
            .with_limit(s.limit);
            pipeline.run()?;
        }
    };
    Ok(())
}
