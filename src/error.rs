use crate::input::LoadError;
use crate::pipeline::PipelineError;
use thiserror::Error;

/// Everything that can stop a report run before any statistic is computed.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Tagging failed: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_error_message_is_passed_through() {
        let err: AppError = LoadError::FileNotFound(PathBuf::from("alice.txt")).into();
        assert_eq!(err.to_string(), "File not found: alice.txt");
    }

    #[test]
    fn test_pipeline_error_is_prefixed() {
        let err: AppError = PipelineError::TagCountMismatch {
            expected: 2,
            actual: 1,
        }
        .into();
        assert_eq!(err.to_string(), "Tagging failed: Tagger returned 1 tags for 2 words");
    }
}
