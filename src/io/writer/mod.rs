/*!
# Aligned output files

Processed samples are written to three line-aligned files:
the alignment file (`i-j` pairs), the tokenized source and the tokenized target.
Line N of each file comes from the same sample.
!*/
mod alignwriter;
mod writertrait;
pub use alignwriter::{AlignmentWriter, OutputPaths};
pub use writertrait::WriterTrait;
