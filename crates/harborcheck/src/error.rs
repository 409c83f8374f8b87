//! Error types for the Harborcheck library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Harborcheck operations.
///
/// The validator engine itself is infallible: malformed cell values are
/// non-matches, never errors. Everything that can fail lives in the input
/// layer (file access, CSV decoding) or in report serialization.
#[derive(Debug, Error)]
pub enum HarborError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid delimiter detected or specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Empty file or no header row to scan.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Harborcheck operations.
pub type Result<T> = std::result::Result<T, HarborError>;
