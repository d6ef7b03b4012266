pub mod stats;
pub mod token;

pub use stats::{
    count_words, least_confident_token, pos_frequencies, proper_nouns, top_n, vocabulary,
};
pub use token::Token;
