//! Descriptive statistics over a part-of-speech tagged corpus.
//!
//! [`corpus`] holds the token type and the pure statistics; [`pipeline`]
//! turns raw text into tagged tokens and [`input`] reads text, PDF and EPUB
//! files. [`run`] ties the three together.

pub mod config;
pub mod corpus;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod report;

pub use config::Config;
pub use corpus::Token;
pub use error::AppError;
pub use pipeline::Pipeline;
pub use report::Report;

use std::path::Path;

/// Load `path`, tag it with `pipeline` and compute the report.
pub fn run(path: &Path, pipeline: &Pipeline, config: &Config) -> Result<Report, AppError> {
    let document = input::load(path)?;
    let tokens = pipeline.run(&document.text)?;
    Ok(Report::compute(&tokens, &config.stats))
}
