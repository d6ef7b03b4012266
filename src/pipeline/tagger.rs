//! Rule and lexicon based Penn Treebank tagger.
//!
//! Each rule carries its own confidence: closed-class lexicon hits are near
//! certain, suffix guesses much less so, and the `NN` fallback is the least
//! confident of all. Confidences are in `(0, 1]`; lower means less certain.

use super::PosTagger;
use rustc_hash::FxHashMap;

const PUNCTUATION_CONFIDENCE: f64 = 0.99;
const NUMBER_CONFIDENCE: f64 = 0.95;
const LEXICON_CONFIDENCE: f64 = 0.9;
const PROPER_NOUN_CONFIDENCE: f64 = 0.8;
const SENTENCE_START_PROPER_NOUN_CONFIDENCE: f64 = 0.45;
const FALLBACK_CONFIDENCE: f64 = 0.3;

const SUFFIXES: &[(&str, &str, f64)] = &[
    ("ly", "RB", 0.6),
    ("ing", "VBG", 0.6),
    ("ed", "VBD", 0.55),
    ("s", "NNS", 0.5),
];

const ENGLISH_LEXICON: &[(&str, &str)] = &[
    ("a", "DT"),
    ("an", "DT"),
    ("the", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("some", "DT"),
    ("any", "DT"),
    ("no", "DT"),
    ("every", "DT"),
    ("all", "DT"),
    ("of", "IN"),
    ("in", "IN"),
    ("on", "IN"),
    ("at", "IN"),
    ("by", "IN"),
    ("for", "IN"),
    ("with", "IN"),
    ("from", "IN"),
    ("into", "IN"),
    ("about", "IN"),
    ("as", "IN"),
    ("like", "IN"),
    ("if", "IN"),
    ("than", "IN"),
    ("through", "IN"),
    ("under", "IN"),
    ("over", "IN"),
    ("after", "IN"),
    ("before", "IN"),
    ("and", "CC"),
    ("or", "CC"),
    ("but", "CC"),
    ("nor", "CC"),
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("me", "PRP"),
    ("him", "PRP"),
    ("us", "PRP"),
    ("them", "PRP"),
    ("herself", "PRP"),
    ("himself", "PRP"),
    ("itself", "PRP"),
    ("myself", "PRP"),
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("her", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    ("can", "MD"),
    ("could", "MD"),
    ("will", "MD"),
    ("would", "MD"),
    ("shall", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    ("to", "TO"),
    ("which", "WDT"),
    ("who", "WP"),
    ("what", "WP"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("why", "WRB"),
    ("how", "WRB"),
    ("there", "EX"),
    ("not", "RB"),
    ("very", "RB"),
    ("so", "RB"),
    ("then", "RB"),
    ("now", "RB"),
    ("again", "RB"),
    ("never", "RB"),
    ("up", "RP"),
    ("out", "RP"),
    ("down", "RP"),
    ("off", "RP"),
    ("is", "VBZ"),
    ("has", "VBZ"),
    ("does", "VBZ"),
    ("are", "VBP"),
    ("am", "VBP"),
    ("have", "VBP"),
    ("do", "VBP"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("had", "VBD"),
    ("did", "VBD"),
    ("said", "VBD"),
    ("went", "VBD"),
    ("be", "VB"),
    ("been", "VBN"),
    ("being", "VBG"),
];

/// Tag for a token made only of punctuation or symbols.
fn punctuation_tag(word: &str) -> String {
    match word {
        "." | "!" | "?" => ".".to_string(),
        "," => ",".to_string(),
        ":" | ";" | "-" | "--" | "..." | "\u{2014}" | "\u{2013}" => ":".to_string(),
        "(" | "[" | "{" => "-LRB-".to_string(),
        ")" | "]" | "}" => "-RRB-".to_string(),
        "\"" | "`" | "``" | "\u{201C}" | "\u{2018}" => "``".to_string(),
        "'" | "''" | "\u{201D}" | "\u{2019}" => "''".to_string(),
        other => other.to_string(),
    }
}

fn is_number(word: &str) -> bool {
    word.chars().next().map_or(false, |c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().map_or(false, char::is_uppercase)
}

fn suffix_tag(lower: &str) -> Option<(&'static str, f64)> {
    SUFFIXES
        .iter()
        .find(|(suffix, _, _)| {
            lower.len() > suffix.len() + 2 && lower.ends_with(suffix) && !lower.ends_with("ss")
        })
        .map(|&(_, tag, confidence)| (tag, confidence))
}

#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: FxHashMap<String, String>,
}

impl LexiconTagger {
    /// Tagger with no lexicon; everything falls through to the rules.
    pub fn empty() -> Self {
        Self {
            lexicon: FxHashMap::default(),
        }
    }

    /// Tagger preloaded with English closed-class words.
    pub fn english() -> Self {
        let mut tagger = Self::empty();
        for (word, tag) in ENGLISH_LEXICON {
            tagger.add_entry(word, tag);
        }
        tagger
    }

    /// Add or replace a lexicon entry (stored lower-cased)
    pub fn add_entry(&mut self, word: &str, tag: &str) {
        self.lexicon.insert(word.to_lowercase(), tag.to_string());
    }

    pub fn with_entry(mut self, word: &str, tag: &str) -> Self {
        self.add_entry(word, tag);
        self
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    fn tag_word(&self, word: &str, sentence_start: bool) -> (String, f64) {
        if !word.chars().any(char::is_alphanumeric) {
            return (punctuation_tag(word), PUNCTUATION_CONFIDENCE);
        }
        if is_number(word) {
            return ("CD".to_string(), NUMBER_CONFIDENCE);
        }

        let lower = word.to_lowercase();
        if let Some(tag) = self.lexicon.get(&lower) {
            return (tag.clone(), LEXICON_CONFIDENCE);
        }

        if is_capitalized(word) && !sentence_start {
            return ("NNP".to_string(), PROPER_NOUN_CONFIDENCE);
        }
        if let Some((tag, confidence)) = suffix_tag(&lower) {
            return (tag.to_string(), confidence);
        }
        if is_capitalized(word) {
            return ("NNP".to_string(), SENTENCE_START_PROPER_NOUN_CONFIDENCE);
        }

        ("NN".to_string(), FALLBACK_CONFIDENCE)
    }
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::english()
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, words: &[String]) -> Vec<(String, f64)> {
        let mut sentence_start = true;
        words
            .iter()
            .map(|word| {
                let tagged = self.tag_word(word, sentence_start);
                // Opening quotes and brackets do not consume the sentence start.
                if word.chars().any(char::is_alphanumeric) {
                    sentence_start = false;
                }
                tagged
            })
            .collect()
    }
}
