//! Aligned tokenization writer.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Error;
use crate::tokenize::Tokenize;

/// Writes tokenized sentences to a single output file.
///
/// The output file is created (or truncated) on construction. Each
/// consumed sentence yields exactly one output line, in input order:
/// a sentence that fails to tokenize fails the whole file instead of
/// being skipped, since a skipped line would desynchronize the parallel
/// source/target pair.
pub struct TokenizedWriter {
    dst: PathBuf,
    handle: BufWriter<File>,
    written: usize,
}

impl TokenizedWriter {
    pub fn create(dst: &Path) -> Result<Self, Error> {
        Ok(Self {
            dst: dst.to_path_buf(),
            handle: BufWriter::new(File::create(dst)?),
            written: 0,
        })
    }

    /// Tokenize `sentences` in order and write one line per sentence.
    ///
    /// Returns the number of lines written.
    ///
    /// # Errors
    /// Propagates read errors from the sentence stream, and fails with
    /// [Error::Tokenize] carrying the output file and 1-based line number
    /// when a sentence cannot be tokenized. The partially written file is
    /// left on disk; re-running the stage truncates it.
    pub fn write_tokenized<I, T>(&mut self, sentences: I, tokenizer: &T) -> Result<usize, Error>
    where
        I: Iterator<Item = Result<String, Error>>,
        T: Tokenize,
    {
        for sentence in sentences {
            let sentence = sentence?;
            let tokenized =
                tokenizer
                    .tokenize(&sentence)
                    .map_err(|e| Error::Tokenize {
                        file: self.dst.clone(),
                        line: self.written + 1,
                        reason: format!("{:?}", e),
                    })?;
            self.handle.write_all(tokenized.as_bytes())?;
            self.handle.write_all(b"\n")?;
            self.written += 1;
        }
        self.handle.flush()?;

        debug!("wrote {} tokenized lines to {:?}", self.written, self.dst);
        Ok(self.written)
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

/// Extract+tokenize driver for one file: consumes `sentences`, writes the
/// tokenized lines to `dst` and returns the line count.
pub fn tokenize_to_file<I, T>(sentences: I, tokenizer: &T, dst: &Path) -> Result<usize, Error>
where
    I: Iterator<Item = Result<String, Error>>,
    T: Tokenize,
{
    let mut writer = TokenizedWriter::create(dst)?;
    writer.write_tokenized(sentences, tokenizer)
}
