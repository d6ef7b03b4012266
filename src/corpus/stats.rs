//! Corpus statistics over a tagged token stream.
//!
//! Every function here is pure: it borrows the tokens, builds whatever
//! transient counting table it needs and returns plain data.
//!
//! Ordering among equal counts in [`top_n`] is unspecified. Entries are
//! stable-sorted by descending count, starting from the hash map's iteration
//! order, so two items with the same frequency may come back in either order.
//! Likewise [`least_confident_token`] returns the first minimum in scan order.

use super::Token;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::Hash;

/// Tag the tagger assigns to singular proper nouns.
pub const PROPER_NOUN_TAG: &str = "NNP";

/// Return the number of tokens whose contents is a word.
pub fn count_words(tokens: &[Token]) -> usize {
    tokens.iter().filter(|t| t.is_word()).count()
}

/// Return the `size` most frequent words, lower-cased.
pub fn vocabulary(tokens: &[Token], size: usize) -> Vec<String> {
    let counts = frequencies(
        tokens
            .iter()
            .filter(|t| t.is_word())
            .map(|t| t.contents().to_lowercase()),
    );
    top_n(size, &counts)
}

/// Return the `size` most frequent proper nouns, with their original casing.
pub fn proper_nouns(tokens: &[Token], size: usize) -> Vec<String> {
    let counts = frequencies(
        tokens
            .iter()
            .filter(|t| t.tag() == PROPER_NOUN_TAG)
            .map(|t| t.contents().to_string()),
    );
    top_n(size, &counts)
}

/// Takes a map of items to their frequency and returns the `size` most
/// frequent items, most frequent first.
///
/// Returns fewer than `size` items when the map is smaller, and nothing when
/// `size` is zero.
pub fn top_n<T, S>(size: usize, frequencies: &HashMap<T, u64, S>) -> Vec<T>
where
    T: Clone,
{
    let mut items: Vec<(&T, u64)> = frequencies.iter().map(|(item, &n)| (item, n)).collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));
    items
        .into_iter()
        .take(size)
        .map(|(item, _)| item.clone())
        .collect()
}

/// Find the token with the lowest confidence, or `None` for an empty slice.
pub fn least_confident_token(tokens: &[Token]) -> Option<&Token> {
    tokens
        .iter()
        .min_by(|a, b| a.confidence().total_cmp(&b.confidence()))
}

/// Count occurrences of each part-of-speech tag, word or not.
pub fn pos_frequencies(tokens: &[Token]) -> FxHashMap<String, u64> {
    frequencies(tokens.iter().map(|t| t.tag().to_string()))
}

/// Build an item -> occurrence count table.
pub fn frequencies<T, I>(items: I) -> FxHashMap<T, u64>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts = FxHashMap::default();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}
