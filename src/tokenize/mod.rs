/*! Sentence tokenization

Holds a [Tokenize] trait so that pipelines stay agnostic of the concrete
tokenizer. The current tokenizer is [WordTokenizer], built on Unicode
word boundaries.
!*/
pub mod word;

pub use word::WordTokenizer;

use crate::error::Error;

/// Per-language tokenization capability.
///
/// A tokenizer is bound to one language at construction and is stateless
/// across calls: tokenizing a sentence never depends on previous ones.
pub trait Tokenize {
    /// Tokenize a single sentence into a space-joined token string.
    fn tokenize(&self, sentence: &str) -> Result<String, Error>;
}
