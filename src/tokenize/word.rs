//! Word-boundary tokenizer.
use itertools::Itertools;
use unicode_segmentation::UnicodeSegmentation;

use crate::{error::Error, lang};

use super::Tokenize;

/// Whitespace/punctuation-aware tokenizer for a single language.
///
/// Splits on Unicode word boundaries (UAX #29), which keeps
/// apostrophe-joined words together; those are re-split according to the
/// language: `l'homme` becomes `l' homme` for Romance languages, while
/// `don't` becomes `don 't`.
pub struct WordTokenizer {
    lang: String,
}

impl WordTokenizer {
    /// Create a tokenizer for `lang`.
    ///
    /// # Errors
    /// Fails with [Error::UnknownLang] if the language is not part of the
    /// corpus.
    pub fn new(lang: &str) -> Result<Self, Error> {
        lang::check(lang)?;
        Ok(Self {
            lang: lang.to_string(),
        })
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Romance languages attach clitics before the apostrophe.
    fn splits_after_apostrophe(&self) -> bool {
        matches!(self.lang.as_str(), "fr" | "it")
    }
}

impl Tokenize for WordTokenizer {
    fn tokenize(&self, sentence: &str) -> Result<String, Error> {
        let mut tokens: Vec<&str> = Vec::new();
        for word in sentence.split_word_bounds() {
            if word.trim().is_empty() {
                continue;
            }
            match word.find('\'') {
                Some(at) if word.chars().count() > 1 => {
                    let at = if self.splits_after_apostrophe() {
                        at + 1
                    } else {
                        at
                    };
                    let (head, tail) = word.split_at(at);
                    if !head.is_empty() {
                        tokens.push(head);
                    }
                    if !tail.is_empty() {
                        tokens.push(tail);
                    }
                }
                _ => tokens.push(word),
            }
        }

        Ok(tokens.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_lang() {
        assert!(matches!(
            WordTokenizer::new("xx"),
            Err(Error::UnknownLang(_))
        ));
    }

    #[test]
    fn splits_punctuation() {
        let tok = WordTokenizer::new("en").unwrap();
        assert_eq!(
            tok.tokenize("Hello, world!").unwrap(),
            "Hello , world !"
        );
    }

    #[test]
    fn collapses_whitespace() {
        let tok = WordTokenizer::new("en").unwrap();
        assert_eq!(
            tok.tokenize("  spaced\tout   words ").unwrap(),
            "spaced out words"
        );
    }

    #[test]
    fn english_contraction() {
        let tok = WordTokenizer::new("en").unwrap();
        assert_eq!(tok.tokenize("don't stop").unwrap(), "don 't stop");
    }

    #[test]
    fn romance_elision() {
        let tok = WordTokenizer::new("fr").unwrap();
        assert_eq!(tok.tokenize("l'homme parle").unwrap(), "l' homme parle");
    }

    #[test]
    fn empty_sentence() {
        let tok = WordTokenizer::new("de").unwrap();
        assert_eq!(tok.tokenize("").unwrap(), "");
    }
}
