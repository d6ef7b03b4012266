use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is empty: {0}")]
    EmptyDocument(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Raw corpus text plus a `kind:path` description of where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

pub mod epub;
pub mod pdf;
pub mod text;

/// Load a corpus, choosing the reader from the file extension.
///
/// `.pdf` and `.epub` go through their parsers; `.txt`, `.text`, `.md` and
/// extensionless files are read as UTF-8 text.
pub fn load(path: impl AsRef<Path>) -> Result<LoadedDocument, LoadError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let document = match extension.as_deref() {
        Some("pdf") => pdf::load(path)?,
        Some("epub") => epub::load(path)?,
        None | Some("txt") | Some("text") | Some("md") => text::load(path)?,
        Some(other) => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    info!(
        source = %document.source,
        bytes = document.text.len(),
        "loaded corpus"
    );
    Ok(document)
}
