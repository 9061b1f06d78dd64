/*! Tokenized corpus writing.

Writers take the raw sentence stream of one file, tokenize it and persist
one tokenized sentence per line, keeping input order and cardinality so
that parallel files stay line-aligned.
!*/
pub mod writer;

pub use writer::tokenize_to_file;
pub use writer::TokenizedWriter;
