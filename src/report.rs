use crate::config::StatsConfig;
use crate::corpus::{self, Token};
use serde::Serialize;
use std::fmt;

/// The five corpus statistics, computed together for printing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub total_words: usize,
    pub vocabulary_size: usize,
    pub vocabulary: Vec<String>,
    pub proper_noun_size: usize,
    pub proper_nouns: Vec<String>,
    pub least_confident: Option<Token>,
    /// Tags with their counts, most frequent first, ties by tag.
    pub pos_frequencies: Vec<(String, u64)>,
}

impl Report {
    pub fn compute(tokens: &[Token], config: &StatsConfig) -> Self {
        let mut pos_frequencies: Vec<(String, u64)> =
            corpus::pos_frequencies(tokens).into_iter().collect();
        pos_frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            total_words: corpus::count_words(tokens),
            vocabulary_size: config.vocabulary_size,
            vocabulary: corpus::vocabulary(tokens, config.vocabulary_size),
            proper_noun_size: config.proper_noun_size,
            proper_nouns: corpus::proper_nouns(tokens, config.proper_noun_size),
            least_confident: corpus::least_confident_token(tokens).cloned(),
            pos_frequencies,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[String]) -> fmt::Result {
    write!(f, "[{}]", items.join(", "))
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total number of words: {}", self.total_words)?;

        write!(f, "{} most frequent words: ", self.vocabulary_size)?;
        write_list(f, &self.vocabulary)?;
        writeln!(f)?;

        write!(f, "{} most frequent proper nouns: ", self.proper_noun_size)?;
        write_list(f, &self.proper_nouns)?;
        writeln!(f)?;

        match &self.least_confident {
            Some(token) => writeln!(f, "Least confident token: {}", token)?,
            None => writeln!(f, "Least confident token: none")?,
        }

        let pos: Vec<String> = self
            .pos_frequencies
            .iter()
            .map(|(tag, count)| format!("{}={}", tag, count))
            .collect();
        write!(f, "PoS frequencies: {{{}}}", pos.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Token> {
        vec![
            Token::new("Alice", "NNP", 0.8),
            Token::new("met", "VBD", 0.55),
            Token::new("the", "DT", 0.9),
            Token::new("Hatter", "NNP", 0.8),
            Token::new("and", "CC", 0.9),
            Token::new("Alice", "NNP", 0.45),
            Token::new("laughed", "VBD", 0.55),
            Token::new(".", ".", 0.99),
        ]
    }

    /// Test that compute fills in all five statistics.
    #[test]
    fn test_compute_collects_all_statistics() {
        let report = Report::compute(&sample(), &StatsConfig::default());
        assert_eq!(report.total_words, 7);
        assert_eq!(report.vocabulary[0], "alice");
        assert_eq!(report.vocabulary.len(), 5);
        assert_eq!(report.proper_nouns[0], "Alice");
        assert_eq!(report.proper_nouns.len(), 2);
        assert_eq!(report.least_confident.as_ref().map(Token::contents), Some("Alice"));
        assert_eq!(report.pos_frequencies[0], ("NNP".to_string(), 3));
    }

    /// Test that tag counts are sorted by count, then tag.
    #[test]
    fn test_pos_frequencies_are_ordered_for_display() {
        let report = Report::compute(&sample(), &StatsConfig::default());
        let tags: Vec<&str> = report.pos_frequencies.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(tags, vec!["NNP", "VBD", ".", "CC", "DT"]);
    }

    /// Test the rendered report for an empty corpus.
    #[test]
    fn test_display_empty_corpus() {
        let report = Report::compute(&[], &StatsConfig::default());
        let text = report.to_string();
        assert_eq!(
            text,
            "Total number of words: 0\n\
             5 most frequent words: []\n\
             10 most frequent proper nouns: []\n\
             Least confident token: none\n\
             PoS frequencies: {}"
        );
    }

    /// Test the rendered report line by line.
    #[test]
    fn test_display_lines() {
        let config = StatsConfig {
            vocabulary_size: 1,
            proper_noun_size: 1,
        };
        let text = Report::compute(&sample(), &config).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Total number of words: 7");
        assert_eq!(lines[1], "1 most frequent words: [alice]");
        assert_eq!(lines[2], "1 most frequent proper nouns: [Alice]");
        assert_eq!(lines[3], "Least confident token: Alice(NNP:0.5)");
        assert_eq!(lines[4], "PoS frequencies: {NNP=3, VBD=2, .=1, CC=1, DT=1}");
    }

    /// Test that the JSON report exposes each field.
    #[test]
    fn test_to_json_round_trips_fields() {
        let report = Report::compute(&sample(), &StatsConfig::default());
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["total_words"], 7);
        assert_eq!(json["least_confident"]["contents"], "Alice");
        assert_eq!(json["pos_frequencies"][0][0], "NNP");
    }
}
