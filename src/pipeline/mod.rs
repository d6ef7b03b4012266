//! Text to tagged tokens.
//!
//! The statistics only ever see [`Token`]s. How text is split into sentences
//! and words, and how those words are tagged, lives behind the three traits
//! below so a different tagger can be plugged in without touching the core.

use crate::config::PipelineConfig;
use crate::corpus::Token;
use thiserror::Error;
use tracing::debug;

pub mod sentence;
pub mod tagger;
pub mod tokenizer;

pub use sentence::UnicodeSentenceDetector;
pub use tagger::LexiconTagger;
pub use tokenizer::UnicodeWordTokenizer;

#[derive(Error, Debug, PartialEq)]
pub enum PipelineError {
    #[error("Tagger returned {actual} tags for {expected} words")]
    TagCountMismatch { expected: usize, actual: usize },

    #[error("Non-finite confidence {confidence} for token {token:?}")]
    NonFiniteConfidence { token: String, confidence: f64 },
}

/// Splits running text into sentences.
pub trait SentenceDetector {
    fn detect(&self, text: &str) -> Vec<String>;
}

/// Splits one sentence into word and punctuation tokens.
pub trait Tokenizer {
    fn tokenize(&self, sentence: &str) -> Vec<String>;
}

/// Assigns a part-of-speech tag and a confidence to every word of a sentence.
///
/// Must return exactly one `(tag, confidence)` pair per input word.
pub trait PosTagger {
    fn tag(&self, words: &[String]) -> Vec<(String, f64)>;
}

pub struct Pipeline {
    detector: Box<dyn SentenceDetector>,
    tokenizer: Box<dyn Tokenizer>,
    tagger: Box<dyn PosTagger>,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(
        detector: Box<dyn SentenceDetector>,
        tokenizer: Box<dyn Tokenizer>,
        tagger: Box<dyn PosTagger>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            detector,
            tokenizer,
            tagger,
            config,
        }
    }

    /// Unicode segmentation plus the built-in English lexicon tagger.
    pub fn default_english(config: PipelineConfig) -> Self {
        Self::new(
            Box::new(UnicodeSentenceDetector::new()),
            Box::new(UnicodeWordTokenizer),
            Box::new(LexiconTagger::english()),
            config,
        )
    }

    pub fn run(&self, text: &str) -> Result<Vec<Token>, PipelineError> {
        let prepared = if self.config.join_lines {
            text.lines().collect::<Vec<_>>().join(" ")
        } else {
            text.to_string()
        };

        let sentences = self.detector.detect(&prepared);
        let mut result = Vec::new();

        for sentence in &sentences {
            let words = self.tokenizer.tokenize(sentence);
            let tags = self.tagger.tag(&words);
            if tags.len() != words.len() {
                return Err(PipelineError::TagCountMismatch {
                    expected: words.len(),
                    actual: tags.len(),
                });
            }

            for (word, (tag, confidence)) in words.into_iter().zip(tags) {
                if self.config.drop_empty_tokens && word.is_empty() {
                    continue;
                }
                if !confidence.is_finite() {
                    return Err(PipelineError::NonFiniteConfidence {
                        token: word,
                        confidence,
                    });
                }
                result.push(Token::new(word, tag, confidence));
            }
        }

        debug!(
            sentences = sentences.len(),
            tokens = result.len(),
            "tagged corpus"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct WholeText;

    impl SentenceDetector for WholeText {
        fn detect(&self, text: &str) -> Vec<String> {
            vec![text.to_string()]
        }
    }

    struct SplitOnSpace;

    impl Tokenizer for SplitOnSpace {
        fn tokenize(&self, sentence: &str) -> Vec<String> {
            sentence.split(' ').map(str::to_string).collect()
        }
    }

    struct FixedTagger {
        confidence: f64,
        short_by: usize,
    }

    impl PosTagger for FixedTagger {
        fn tag(&self, words: &[String]) -> Vec<(String, f64)> {
            let n = words.len().saturating_sub(self.short_by);
            vec![("NN".to_string(), self.confidence); n]
        }
    }

    fn pipeline(confidence: f64, short_by: usize, config: PipelineConfig) -> Pipeline {
        Pipeline::new(
            Box::new(WholeText),
            Box::new(SplitOnSpace),
            Box::new(FixedTagger {
                confidence,
                short_by,
            }),
            config,
        )
    }

    #[test]
    fn test_run_joins_lines_and_drops_empty_tokens() {
        let tokens = pipeline(0.5, 0, PipelineConfig::default())
            .run("down  the\nhole")
            .unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.contents()).collect();
        assert_eq!(texts, vec!["down", "the", "hole"]);
    }

    #[test]
    fn test_run_keeps_empty_tokens_when_configured() {
        let config = PipelineConfig {
            join_lines: true,
            drop_empty_tokens: false,
        };
        let tokens = pipeline(0.5, 0, config).run("a  b").unwrap();
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_run_rejects_short_tagger() {
        let result = pipeline(0.5, 1, PipelineConfig::default()).run("a b c");
        assert_eq!(
            result,
            Err(PipelineError::TagCountMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_run_rejects_nan_confidence() {
        let result = pipeline(f64::NAN, 0, PipelineConfig::default()).run("rabbit");
        assert!(matches!(
            result,
            Err(PipelineError::NonFiniteConfidence { token, .. }) if token == "rabbit"
        ));
    }

    #[test]
    fn test_default_english_tags_proper_nouns() {
        let tokens = Pipeline::default_english(PipelineConfig::default())
            .run("Then Alice saw the White Rabbit.")
            .unwrap();
        let alice = tokens.iter().find(|t| t.contents() == "Alice").unwrap();
        assert_eq!(alice.tag(), "NNP");
        assert_eq!(tokens.last().unwrap().tag(), ".");
    }
}
