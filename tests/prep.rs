use std::fs;
use std::path::Path;

use bitext::error::Error;
use bitext::lang::Pair;
use bitext::pipeline::{Pipeline, Prep};

const TRAIN_DE: &str = r#"<url>http://www.ted.com/talks/de/talk.html</url>
<keywords>talks</keywords>
<speaker>Jemand</speaker>
<talkid>1</talkid>
<title>Ein Titel</title>
<description>Eine Beschreibung</description>
Guten Morgen, Welt.
Wie geht es dir?
Das ist der dritte Satz.
"#;

const TRAIN_EN: &str = r#"<url>http://www.ted.com/talks/talk.html</url>
<keywords>talks</keywords>
<speaker>Somebody</speaker>
<talkid>1</talkid>
<title>A title</title>
<description>A description</description>
Good morning, world.
How are you doing?
This is the third sentence.
"#;

const DEV_DE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<mteval>
<srcset setid="iwslt2017-dev2010" srclang="german">
<doc docid="1" genre="lectures">
<seg id="1">Erster Entwicklungssatz.</seg>
<seg id="2">Zweiter Entwicklungssatz.</seg>
</doc>
</srcset>
</mteval>
"#;

const DEV_EN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<mteval>
<refset setid="iwslt2017-dev2010" trglang="english">
<doc docid="1" genre="lectures">
<seg id="1">First development sentence.</seg>
<seg id="2">Second development sentence.</seg>
</doc>
</refset>
</mteval>
"#;

const TST_DE: &str = r#"<seg id="1">Ein Testsatz.</seg>
"#;

const TST_EN: &str = r#"<seg id="1">One test sentence.</seg>
"#;

/// Lay out a fake unpacked archive under `path`/original/de-en.
fn fake_raw_tree(path: &Path, train_en: &str) {
    let raw = path.join("original").join("de-en");
    fs::create_dir_all(&raw).unwrap();

    fs::write(raw.join("train.tags.de-en.de"), TRAIN_DE).unwrap();
    fs::write(raw.join("train.tags.de-en.en"), train_en).unwrap();
    fs::write(raw.join("IWSLT17.TED.dev2010.de-en.de.xml"), DEV_DE).unwrap();
    fs::write(raw.join("IWSLT17.TED.dev2010.de-en.en.xml"), DEV_EN).unwrap();
    fs::write(raw.join("IWSLT17.TED.tst2015.de-en.de.xml"), TST_DE).unwrap();
    fs::write(raw.join("IWSLT17.TED.tst2015.de-en.en.xml"), TST_EN).unwrap();
}

#[test_log::test]
fn prep_all_splits() {
    let dir = tempfile::tempdir().unwrap();
    fake_raw_tree(dir.path(), TRAIN_EN);

    let prep = Prep::new(Pair::new("de", "en").unwrap(), dir.path());
    prep.run().unwrap();

    let train_de = fs::read_to_string(dir.path().join("train.de")).unwrap();
    let train_en = fs::read_to_string(dir.path().join("train.en")).unwrap();

    // markup filtered out, one tokenized sentence per line, punctuation split
    assert_eq!(
        train_de,
        "Guten Morgen , Welt .\nWie geht es dir ?\nDas ist der dritte Satz .\n"
    );
    assert_eq!(train_en.lines().count(), train_de.lines().count());
    assert_eq!(
        train_en.lines().next().unwrap(),
        "Good morning , world ."
    );

    let dev_de = fs::read_to_string(dir.path().join("dev.de")).unwrap();
    let dev_en = fs::read_to_string(dir.path().join("dev.en")).unwrap();
    assert_eq!(dev_de, "Erster Entwicklungssatz .\nZweiter Entwicklungssatz .\n");
    assert_eq!(dev_en.lines().count(), 2);

    let test_de = fs::read_to_string(dir.path().join("test.de")).unwrap();
    let test_en = fs::read_to_string(dir.path().join("test.en")).unwrap();
    assert_eq!(test_de, "Ein Testsatz .\n");
    assert_eq!(test_en, "One test sentence .\n");
}

#[test_log::test]
fn prep_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    fake_raw_tree(dir.path(), TRAIN_EN);

    let prep = Prep::new(Pair::new("de", "en").unwrap(), dir.path());

    prep.run().unwrap();
    let first: Vec<Vec<u8>> = ["train.de", "train.en", "dev.de", "dev.en", "test.de", "test.en"]
        .iter()
        .map(|f| fs::read(dir.path().join(f)).unwrap())
        .collect();

    prep.run().unwrap();
    let second: Vec<Vec<u8>> = ["train.de", "train.en", "dev.de", "dev.en", "test.de", "test.en"]
        .iter()
        .map(|f| fs::read(dir.path().join(f)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test_log::test]
fn misaligned_pair_aborts() {
    let dir = tempfile::tempdir().unwrap();

    // target train file carries one sentence less than the source
    let truncated: String = TRAIN_EN
        .lines()
        .take(TRAIN_EN.lines().count() - 1)
        .map(|l| format!("{}\n", l))
        .collect();
    fake_raw_tree(dir.path(), &truncated);

    let prep = Prep::new(Pair::new("de", "en").unwrap(), dir.path());
    match prep.run() {
        Err(Error::Misaligned {
            split,
            src_lines,
            tgt_lines,
        }) => {
            assert_eq!(split, "train");
            assert_eq!(src_lines, 3);
            assert_eq!(tgt_lines, 2);
        }
        other => panic!("expected Misaligned error, got {:?}", other),
    }
}
