use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"^\w+$").expect("word pattern is valid");
}

/// One unit of tagged text as emitted by the tagging pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    contents: String,
    tag: String,
    confidence: f64,
}

impl Token {
    pub fn new(contents: impl Into<String>, tag: impl Into<String>, confidence: f64) -> Self {
        Self {
            contents: contents.into(),
            tag: tag.into(),
            confidence,
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Part-of-speech label assigned by the tagger.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// True when the whole of `contents` is one or more word characters.
    pub fn is_word(&self) -> bool {
        WORD.is_match(&self.contents)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:.1}` alone rounds exact ties to even; round half away from zero first.
        let scaled = self.confidence * 10.0;
        let rounded = if scaled.is_finite() {
            scaled.round() / 10.0
        } else {
            self.confidence
        };
        write!(f, "{}({}:{:.1})", self.contents, self.tag, rounded)
    }
}
