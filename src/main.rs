//! # bitext
//!
//! bitext prepares the IWSLT'17 TED parallel corpus for machine-translation
//! training: it downloads a language pair archive, extracts and tokenizes
//! the train/dev/test splits keeping both languages line-aligned, and
//! optionally learns and applies a joint subword segmentation.
//!
//! ## Getting started
//!
//! ```sh
//! bitext 0.1.0
//! IWSLT'17 corpus preparation tool.
//!
//! USAGE:
//!     bitext <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     all         Run every stage in order
//!     download    Download and unpack the raw corpus archive
//!     extract     Extract and tokenize all splits
//!     help        Prints this message or the help of the given subcommand(s)
//!     subword     Learn and apply joint subword segmentation
//! ```
//!
use std::path::Path;

use structopt::StructOpt;

#[macro_use]
extern crate log;

use bitext::download::Downloader;
use bitext::error::Error;
use bitext::lang::Pair;
use bitext::pipeline::{Pipeline, Prep};
use bitext::subword::{self, SubwordNmt};

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Bitext::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Bitext::Download(s) => {
            let pair = Pair::new(&s.src, &s.target)?;
            download(pair, &s.path)?;
        }
        cli::Bitext::Extract(s) => {
            let pair = Pair::new(&s.src, &s.target)?;
            extract(pair, &s.path)?;
        }
        cli::Bitext::Subword(s) => {
            let pair = Pair::new(&s.src, &s.target)?;
            segment(&pair, &s.path)?;
        }
        cli::Bitext::All(s) => {
            let pair = Pair::new(&s.src, &s.target)?;
            download(pair.clone(), &s.path)?;
            extract(pair.clone(), &s.path)?;
            segment(&pair, &s.path)?;
        }
    };
    Ok(())
}

fn download(pair: Pair, path: &Path) -> Result<(), Error> {
    info!("downloading and extracting dataset");
    let raw_dir = Downloader::new(pair).fetch(path)?;
    info!("raw files at {:?}", raw_dir);
    Ok(())
}

fn extract(pair: Pair, path: &Path) -> Result<(), Error> {
    Prep::new(pair, path).run()
}

fn segment(pair: &Pair, path: &Path) -> Result<(), Error> {
    subword::segment_corpus(&SubwordNmt::new(), pair, path)
}
