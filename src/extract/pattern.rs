//! Record patterns for the two raw file shapes.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEG: Regex = Regex::new(r#"^<seg id="\d+">(.*)</seg>"#).unwrap();
}

/// Shape of one raw file format.
///
/// A pattern is a per-line test: matching lines carry a sentence payload,
/// everything else is markup and gets dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordPattern {
    /// One sentence per line; markup lines start with `<` or end with `>`.
    TaggedLine,
    /// Sentences inside `<seg id="N">...</seg>` elements.
    XmlSegment,
}

impl RecordPattern {
    /// Payload of `line` if it is a record under this pattern.
    ///
    /// Tagged lines are stripped of surrounding whitespace before the
    /// boundary test; the stripped line is the payload. Segment payloads
    /// are returned exactly as captured.
    pub fn payload<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self {
            RecordPattern::TaggedLine => {
                let stripped = line.trim();
                if stripped.is_empty() || stripped.starts_with('<') || stripped.ends_with('>') {
                    None
                } else {
                    Some(stripped)
                }
            }
            RecordPattern::XmlSegment => SEG
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|payload| payload.as_str()),
        }
    }
}
