//! Streaming record reader.
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines, Read},
    path::{Path, PathBuf},
};

use crate::error::Error;

use super::RecordPattern;

/// Reader that yields the payloads of record lines, in file order.
///
/// Non-matching lines are skipped silently. The iterator is forward-only:
/// consuming it exhausts the underlying stream.
#[derive(Debug)]
pub struct Records<R> {
    path: PathBuf,
    lines: Lines<BufReader<R>>,
    pattern: RecordPattern,
}

impl Records<File> {
    pub fn from_path(src: &Path, pattern: RecordPattern) -> Result<Self, Error> {
        let handle = File::open(src)?;
        Ok(Self {
            path: src.to_path_buf(),
            lines: BufReader::new(handle).lines(),
            pattern,
        })
    }
}

impl<R> Records<R>
where
    R: Read,
{
    pub fn new(reader: R, pattern: RecordPattern) -> Self {
        Self {
            path: PathBuf::new(),
            lines: BufReader::new(reader).lines(),
            pattern,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R> Iterator for Records<R>
where
    R: Read,
{
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Err(e) => return Some(Err(Error::Io(e))),
                Ok(line) => {
                    if let Some(payload) = self.pattern.payload(&line) {
                        return Some(Ok(payload.to_string()));
                    }
                }
            }
        }
    }
}
