/*! Sentence extraction from raw corpus files.

The IWSLT'17 releases ship two line-oriented formats:

- training files (`train.tags.*`) hold one sentence per line,
  interleaved with `<talkid>`/`<url>`-style markup lines,
- dev/test files are XML where sentences sit in `<seg id="N">` elements,
  one per line.

[RecordPattern] decides, per line, whether it is a record and what its
payload is. [Records] streams the payloads of a whole file.
!*/
pub mod pattern;
pub mod records;

pub use pattern::RecordPattern;
pub use records::Records;
