use super::SentenceDetector;
use unicode_segmentation::UnicodeSegmentation;

const ABBREVIATIONS: &[&str] = &[
    "Dr.", "Mr.", "Mrs.", "Ms.", "St.", "Jr.", "e.g.", "i.e.", "vs.", "etc.",
];

fn ends_with_abbreviation(sentence: &str) -> bool {
    sentence
        .split_whitespace()
        .last()
        .map_or(false, |word| ABBREVIATIONS.contains(&word))
}

/// UAX #29 sentence boundaries, with abbreviations re-joined to the
/// sentence that follows them.
#[derive(Debug, Clone, Default)]
pub struct UnicodeSentenceDetector;

impl UnicodeSentenceDetector {
    pub fn new() -> Self {
        Self
    }
}

impl SentenceDetector for UnicodeSentenceDetector {
    fn detect(&self, text: &str) -> Vec<String> {
        let mut sentences: Vec<String> = Vec::new();
        let mut pending = false;

        for piece in text.split_sentence_bounds() {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }

            match sentences.last_mut() {
                Some(last) if pending => {
                    last.push(' ');
                    last.push_str(piece);
                }
                _ => sentences.push(piece.to_string()),
            }
            pending = ends_with_abbreviation(piece);
        }

        sentences
    }
}
