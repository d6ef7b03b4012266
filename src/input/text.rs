use super::{LoadError, LoadedDocument};
use std::path::Path;

/// Read a UTF-8 text file, rejecting files that hold only whitespace.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path)?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyDocument(path.display().to_string()));
    }

    Ok(LoadedDocument {
        text,
        source: format!("text:{}", path.display()),
    })
}
