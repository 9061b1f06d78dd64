//! Extraction+tokenization pipeline.
//!
//! For each split (train/dev/test) and each language of the pair, reads
//! the raw file from the unpacked archive, extracts sentence records and
//! writes their tokenized form to `<path>/<split>.<lang>`.
//!
//! Both languages of a split go through the same record pattern, and the
//! resulting line counts are compared: a count mismatch means the pair is
//! desynchronized and aborts the run before any downstream training can
//! pick up misaligned files.
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Error;
use crate::extract::{RecordPattern, Records};
use crate::lang::Pair;
use crate::tokenize::{Tokenize, WordTokenizer};
use crate::writing;

use super::Pipeline;

/// One corpus split and the shape of its raw files.
struct Split {
    name: &'static str,
    /// TED release tag of the XML splits (`dev2010`, `tst2015`).
    tag: Option<&'static str>,
    pattern: RecordPattern,
}

const SPLITS: [Split; 3] = [
    Split {
        name: "train",
        tag: None,
        pattern: RecordPattern::TaggedLine,
    },
    Split {
        name: "dev",
        tag: Some("dev2010"),
        pattern: RecordPattern::XmlSegment,
    },
    Split {
        name: "test",
        tag: Some("tst2015"),
        pattern: RecordPattern::XmlSegment,
    },
];

impl Split {
    /// Raw filename inside the unpacked archive, for one language.
    fn raw_filename(&self, pair: &Pair, lang: &str) -> String {
        match self.tag {
            None => format!("train.tags.{}.{}", pair.dir_name(), lang),
            Some(tag) => format!("IWSLT17.TED.{}.{}.{}.xml", tag, pair.dir_name(), lang),
        }
    }
}

pub struct Prep {
    pair: Pair,
    path: PathBuf,
}

impl Prep {
    /// Create a pipeline reading raw files under `path`/original and
    /// writing tokenized splits directly under `path`.
    pub fn new(pair: Pair, path: &Path) -> Self {
        Self {
            pair,
            path: path.to_path_buf(),
        }
    }

    fn raw_dir(&self) -> PathBuf {
        self.path.join("original").join(self.pair.dir_name())
    }

    /// Extract and tokenize one raw file. Returns the line count.
    fn prep_file<T>(&self, split: &Split, lang: &str, tokenizer: &T) -> Result<usize, Error>
    where
        T: Tokenize,
    {
        let src = self.raw_dir().join(split.raw_filename(&self.pair, lang));
        let dst = self.path.join(format!("{}.{}", split.name, lang));

        debug!("extracting {:?} into {:?}", src, dst);
        let records = Records::from_path(&src, split.pattern)?;
        writing::tokenize_to_file(records, tokenizer, &dst)
    }
}

impl Pipeline<()> for Prep {
    fn run(&self) -> Result<(), Error> {
        let raw = self.raw_dir();
        if !raw.is_dir() {
            // download stage hasn't run (or ran somewhere else)
            return Err(Error::MissingInput(raw));
        }

        let src_tokenizer = WordTokenizer::new(self.pair.src())?;
        let tgt_tokenizer = WordTokenizer::new(self.pair.tgt())?;

        for split in &SPLITS {
            info!("reading and tokenizing {} set", split.name);
            let src_lines = self.prep_file(split, self.pair.src(), &src_tokenizer)?;
            let tgt_lines = self.prep_file(split, self.pair.tgt(), &tgt_tokenizer)?;

            if src_lines != tgt_lines {
                return Err(Error::Misaligned {
                    split: split.name,
                    src_lines,
                    tgt_lines,
                });
            }
            debug!("{}: {} sentence pairs", split.name, src_lines);
        }

        Ok(())
    }
}
