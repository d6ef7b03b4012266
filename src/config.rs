// Configuration for the corpus report and the tagging pipeline
// Defaults reproduce the classic report: 5 words, 10 proper nouns

/// Report sizes for the ranked statistics
#[derive(Debug, Clone, PartialEq)]
pub struct StatsConfig {
    /// Number of most frequent words to report (default 5)
    pub vocabulary_size: usize,

    /// Number of most frequent proper nouns to report (default 10)
    pub proper_noun_size: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            vocabulary_size: 5,
            proper_noun_size: 10,
        }
    }
}

/// Text preparation switches applied before and after tagging
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Join input lines with a single space before sentence detection (default true)
    pub join_lines: bool,

    /// Skip tokens whose text is empty after tokenization (default true)
    pub drop_empty_tokens: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            join_lines: true,
            drop_empty_tokens: true,
        }
    }
}

/// Master configuration combining all settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub stats: StatsConfig,
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Override report sizes, keeping defaults for anything not given.
    pub fn with_sizes(mut self, words: Option<usize>, proper_nouns: Option<usize>) -> Self {
        if let Some(words) = words {
            self.stats.vocabulary_size = words;
        }
        if let Some(proper_nouns) = proper_nouns {
            self.stats.proper_noun_size = proper_nouns;
        }
        self
    }
}
