//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use spanalign::spans::OffsetUnit;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "spanalign",
    about = "gold word alignments from span-annotated sentence pairs."
)]
/// Holds every command that is callable by the `spanalign` command.
pub enum Spanalign {
    #[structopt(about = "Write gold alignments and tokenized texts")]
    Prepare(Prepare),
    #[structopt(about = "Print aligned tokens of each sample")]
    Show(Show),
}

#[derive(Debug, StructOpt)]
/// Options shared by every command.
pub struct Common {
    #[structopt(parse(from_os_str), help = "span list (JSON array or JSON lines)")]
    pub span_list: PathBuf,
    #[structopt(
        long = "split",
        help = "only keep samples of this split (dev, devtest...). Default keeps all samples."
    )]
    pub split: Option<String>,
    #[structopt(
        long = "offsets",
        help = "what span offsets count (chars or bytes)",
        default_value = "chars"
    )]
    pub offsets: OffsetUnit,
    #[structopt(
        long = "punctuation",
        help = "characters removed before tokenization",
        default_value = ".,;:!?"
    )]
    pub punctuation: String,
}

#[derive(Debug, StructOpt)]
/// Prepare command and parameters.
pub struct Prepare {
    #[structopt(flatten)]
    pub common: Common,
    #[structopt(parse(from_os_str), help = "gold alignments destination")]
    pub alignments: PathBuf,
    #[structopt(parse(from_os_str), help = "tokenized source destination")]
    pub src_out: PathBuf,
    #[structopt(parse(from_os_str), help = "tokenized target destination")]
    pub trg_out: PathBuf,
    #[structopt(
        long = "skip-malformed",
        help = "skip samples with malformed spans instead of failing"
    )]
    pub skip_malformed: bool,
}

#[derive(Debug, StructOpt)]
/// Show command and parameters.
pub struct Show {
    #[structopt(flatten)]
    pub common: Common,
    #[structopt(short = "n", long = "limit", help = "number of samples to show")]
    pub limit: Option<usize>,
}
