//! Plain-text extraction from document files.
//!
//! Format is dispatched on the file extension via [`DocumentFormat`]:
//!
//! - `txt` is read whole as UTF-8.
//! - `pdf` is walked page by page and concatenated (see [`pdf`]).
//! - Anything else extracts to the empty string. That fallback is a
//!   contract, not a missing branch: unknown formats are a recognized
//!   no-op, while an unreadable file is a hard [`ExtractionError`].

pub mod error;
/// PDF page walking.
pub mod pdf;

#[cfg(test)]
mod tests;

pub use error::ExtractionError;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Document format tag, derived from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Plain UTF-8 text (`.txt`).
    Txt,
    /// PDF (`.pdf`).
    Pdf,
    /// Any other extension (or none). Extracts to the empty string.
    Unknown,
}

impl DocumentFormat {
    /// Derives the format from a path's extension, ASCII case-insensitive.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("txt") => Self::Txt,
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => Self::Pdf,
            _ => Self::Unknown,
        }
    }
}

/// A document input: either already-resolved text or a file to extract from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Pre-extracted plain text; passed through untouched.
    Text(String),
    /// A file path; resolved through [`extract_file`].
    File(PathBuf),
}

impl DocumentSource {
    /// Resolves the source to plain text.
    pub fn resolve(&self) -> Result<String, ExtractionError> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::File(path) => extract_file(path),
        }
    }
}

impl From<String> for DocumentSource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for DocumentSource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<PathBuf> for DocumentSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

/// Extracts plain text from a file, dispatching on [`DocumentFormat`].
///
/// Unknown formats yield `Ok("")`. Unreadable or corrupt files yield an
/// [`ExtractionError`]; they are never silently degraded to empty text.
pub fn extract_file(path: &Path) -> Result<String, ExtractionError> {
    let format = DocumentFormat::from_path(path);
    debug!(path = %path.display(), ?format, "Extracting document text");

    match format {
        DocumentFormat::Txt => {
            fs::read_to_string(path).map_err(|source| ExtractionError::FileUnreadable {
                path: path.to_path_buf(),
                source,
            })
        }
        DocumentFormat::Pdf => pdf::extract_pdf(path),
        DocumentFormat::Unknown => Ok(String::new()),
    }
}
