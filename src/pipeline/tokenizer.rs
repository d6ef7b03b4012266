use super::Tokenizer;
use unicode_segmentation::UnicodeSegmentation;

/// UAX #29 word boundaries; every non-whitespace segment becomes a token, so
/// punctuation marks stand on their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        sentence
            .split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}
