//! Language codes and language pair management.
//!
//! IWSLT'17 distributes TED talks for a closed set of languages,
//! identified by bare two-letter codes.
use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::error::Error;

lazy_static! {

    /// Languages available in the IWSLT'17 TED releases.
    pub static ref LANG: HashSet<&'static str> = {
        let mut m = HashSet::new();
        m.insert("ar");
        m.insert("de");
        m.insert("en");
        m.insert("fr");
        m.insert("it");
        m.insert("ja");
        m.insert("ko");
        m.insert("nl");
        m.insert("ro");
        m.insert("zh");

        m
    };
}

/// Fails with [Error::UnknownLang] if `lang` is not part of the corpus.
pub fn check(lang: &str) -> Result<(), Error> {
    if LANG.contains(lang) {
        Ok(())
    } else {
        Err(Error::UnknownLang(lang.to_string()))
    }
}

/// A validated source/target language pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    src: String,
    tgt: String,
}

impl Pair {
    pub fn new(src: &str, tgt: &str) -> Result<Self, Error> {
        check(src)?;
        check(tgt)?;
        if src == tgt {
            return Err(Error::Custom(format!(
                "source and target languages are both {}",
                src
            )));
        }
        Ok(Self {
            src: src.to_string(),
            tgt: tgt.to_string(),
        })
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn tgt(&self) -> &str {
        &self.tgt
    }

    /// `src-tgt`: names both the archive and the unpacked directory.
    pub fn dir_name(&self) -> String {
        format!("{}-{}", self.src, self.tgt)
    }
}
