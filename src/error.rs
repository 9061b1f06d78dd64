//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Download(reqwest::Error),
    UnknownLang(String),
    MissingInput(PathBuf),
    Tokenize {
        file: PathBuf,
        line: usize,
        reason: String,
    },
    Misaligned {
        split: &'static str,
        src_lines: usize,
        tgt_lines: usize,
    },
    Subword(String),
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Download(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
