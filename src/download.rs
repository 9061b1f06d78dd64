//! Corpus archive retrieval.
//!
//! IWSLT'17 language pairs are distributed as one `.tgz` per pair on the
//! WIT3 mirror. The archive is streamed through gzip+tar directly into
//! `<path>/original/`, which afterwards holds a `{src}-{tgt}/` directory
//! with the raw split files.
use std::fs;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use log::{debug, info};
use tar::Archive;

use crate::error::Error;
use crate::lang::Pair;

const BASE_URL: &str = "https://wit3.fbk.eu/archive/2017-01-trnted//texts";

/// Holds the language pair to fetch and the
/// http client that will make the request.
pub struct Downloader {
    pair: Pair,
    client: reqwest::blocking::Client,
}

impl Downloader {
    pub fn new(pair: Pair) -> Self {
        Self {
            pair,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Archive URL for the language pair.
    fn url(&self) -> String {
        format!(
            "{}/{}/{}/{}.tgz",
            BASE_URL,
            self.pair.src(),
            self.pair.tgt(),
            self.pair.dir_name()
        )
    }

    /// Download and unpack the archive under `dst`/original.
    ///
    /// Returns the directory holding the raw split files.
    /// Network and archive errors are fatal; there is no retry.
    pub fn fetch(&self, dst: &Path) -> Result<PathBuf, Error> {
        let original = dst.join("original");
        fs::create_dir_all(&original)?;

        let url = self.url();
        info!("downloading {}", url);
        let response = self.client.get(&url).send()?.error_for_status()?;

        // stream the response through gunzip+untar, no temporary file
        debug!("unpacking into {:?}", original);
        let mut archive = Archive::new(GzDecoder::new(response));
        archive.unpack(&original)?;

        Ok(original.join(self.pair.dir_name()))
    }
}
