//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "bitext", about = "IWSLT'17 corpus preparation tool.")]
/// Holds every stage that is callable by the `bitext` command.
///
/// Stages form a pipeline: `download` feeds `extract`, `extract` feeds
/// `subword`. Each stage checks that the previous stage's output exists
/// before running; `all` runs the three in order.
pub enum Bitext {
    #[structopt(about = "Download and unpack the raw corpus archive")]
    Download(Stage),
    #[structopt(about = "Extract and tokenize all splits")]
    Extract(Stage),
    #[structopt(about = "Learn and apply joint subword segmentation")]
    Subword(Stage),
    #[structopt(about = "Run every stage in order")]
    All(Stage),
}

#[derive(Debug, StructOpt)]
/// Common stage parameters.
///
/// ```sh
/// bitext-extract 0.1.0
/// Extract and tokenize all splits
///
/// USAGE:
///     bitext extract [OPTIONS] <src> <target>
///
/// OPTIONS:
///     --path <path>    working directory for corpus files [default: ./data]
///
/// ARGS:
///     <src>       source language
///     <target>    target language
/// ```
pub struct Stage {
    #[structopt(help = "source language")]
    pub src: String,
    #[structopt(help = "target language")]
    pub target: String,
    #[structopt(
        parse(from_os_str),
        long = "path",
        default_value = "./data",
        help = "working directory for corpus files"
    )]
    pub path: PathBuf,
}
