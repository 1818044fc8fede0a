/*! # spanalign

Gold word alignments from span-annotated sentence pairs.

Each sample is a source text, a target text and a list of aligned spans
(a character range on each side).
Spans are protected with placeholders, the rest of the text is normalized and tokenized,
and every aligned span links each of its source tokens to each of its target tokens.

```
use spanalign::alignment::SpanAligner;
use spanalign::spans::Span;

let aligner: SpanAligner = SpanAligner::default();
// char offsets: with `OffsetUnit::Bytes`, "gat" would be (4, 7) instead of (3, 6)
let spans = vec![Span::new((0, 2), (0, 3)), Span::new((3, 8), (3, 6))];
let sample = aligner
    .process("Il gatto dorme", "Ël gat ëd deurm", &spans)
    .unwrap();

assert_eq!(sample.alignment.to_string(), "0-0 1-1");
assert_eq!(sample.source, "il gatto dorme");
assert_eq!(sample.target, "ël gat ëd deurm");
```
!*/
pub mod alignment;
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod spans;
pub mod tokenize;
