//! Error types for record ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an exported record file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is neither `.json` nor `.csv`.
    #[error("unsupported input format: {path} (expected .json or .csv)")]
    UnsupportedFormat { path: PathBuf },

    /// JSON is not valid.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON is valid but not a record list.
    #[error("unexpected JSON shape in {path}: {reason}")]
    JsonShape { path: PathBuf, reason: String },

    /// CSV could not be read.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
