//! Subword segmentation via an external BPE tool.
//!
//! The vocabulary-learning and segmentation algorithms stay outside the
//! crate: the contract is file-path handoff only, behind the narrow
//! [Subword] trait so the concrete tool can be swapped without touching
//! the pipeline. [SubwordNmt] implements it over the `subword-nmt`
//! executable.
use std::ffi::OsString;
use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

use log::info;

use crate::error::Error;
use crate::lang::Pair;

/// Minimum per-vocabulary frequency handed to the segmenter.
const VOCAB_THRESHOLD: u32 = 50;

/// Narrow interface over a subword segmentation tool.
pub trait Subword {
    /// Learn joint merge rules over both tokenized training files, writing
    /// the rules to `codes` and one frequency vocabulary per language.
    fn learn_joint_vocab(
        &self,
        train_src: &Path,
        train_tgt: &Path,
        codes: &Path,
        vocab_src: &Path,
        vocab_tgt: &Path,
    ) -> Result<(), Error>;

    /// Segment `input` into `output` using previously learned `codes`,
    /// restricted to `vocab` entries above the tool's frequency threshold.
    fn apply(&self, codes: &Path, vocab: &Path, input: &Path, output: &Path)
        -> Result<(), Error>;
}

/// `subword-nmt` executable wrapper.
pub struct SubwordNmt {
    threshold: u32,
}

impl SubwordNmt {
    pub fn new() -> Self {
        Self {
            threshold: VOCAB_THRESHOLD,
        }
    }

    fn apply_args(&self, codes: &Path, vocab: &Path) -> Vec<OsString> {
        vec![
            OsString::from("apply-bpe"),
            OsString::from("-c"),
            codes.into(),
            OsString::from("--vocabulary"),
            vocab.into(),
            OsString::from("--vocabulary-threshold"),
            self.threshold.to_string().into(),
        ]
    }
}

impl Default for SubwordNmt {
    fn default() -> Self {
        Self::new()
    }
}

impl Subword for SubwordNmt {
    fn learn_joint_vocab(
        &self,
        train_src: &Path,
        train_tgt: &Path,
        codes: &Path,
        vocab_src: &Path,
        vocab_tgt: &Path,
    ) -> Result<(), Error> {
        let output = Command::new("subword-nmt")
            .arg("learn-joint-bpe-and-vocab")
            .arg("--input")
            .arg(train_src)
            .arg(train_tgt)
            .arg("-o")
            .arg(codes)
            .arg("--write-vocabulary")
            .arg(vocab_src)
            .arg(vocab_tgt)
            .output()?;

        if !output.status.success() {
            return Err(Error::Subword(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }
        Ok(())
    }

    fn apply(
        &self,
        codes: &Path,
        vocab: &Path,
        input: &Path,
        output: &Path,
    ) -> Result<(), Error> {
        let child = Command::new("subword-nmt")
            .args(self.apply_args(codes, vocab))
            .stdin(Stdio::from(File::open(input)?))
            .stdout(Stdio::from(File::create(output)?))
            .stderr(Stdio::piped())
            .spawn()?;

        let done = child.wait_with_output()?;
        if !done.status.success() {
            return Err(Error::Subword(
                String::from_utf8_lossy(&done.stderr).into_owned(),
            ));
        }
        Ok(())
    }
}

/// Learn a joint vocabulary on the tokenized training files and segment
/// every split of both languages into `<split>.bpe.<lang>`.
///
/// Fails with [Error::MissingInput] if the tokenized training files are
/// absent, i.e. the extraction stage has not run.
pub fn segment_corpus<S>(tool: &S, pair: &Pair, path: &Path) -> Result<(), Error>
where
    S: Subword,
{
    let train_src = path.join(format!("train.{}", pair.src()));
    let train_tgt = path.join(format!("train.{}", pair.tgt()));
    for input in [&train_src, &train_tgt] {
        if !input.is_file() {
            return Err(Error::MissingInput(input.clone()));
        }
    }

    let codes = path.join("codes.txt");
    let vocab_src = path.join(format!("vocab.{}", pair.src()));
    let vocab_tgt = path.join(format!("vocab.{}", pair.tgt()));

    info!("learning BPE codes and vocabularies");
    tool.learn_joint_vocab(&train_src, &train_tgt, &codes, &vocab_src, &vocab_tgt)?;

    info!("applying BPE to all splits");
    for split in ["train", "dev", "test"] {
        for (lang, vocab) in [(pair.src(), &vocab_src), (pair.tgt(), &vocab_tgt)] {
            let input = path.join(format!("{}.{}", split, lang));
            let segmented = path.join(format!("{}.bpe.{}", split, lang));
            tool.apply(&codes, vocab, &input, &segmented)?;
        }
    }

    Ok(())
}
