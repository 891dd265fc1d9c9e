//! Error types for layout encoding and validation.

use thiserror::Error;

/// Layout violations. Any of these aborts production of the affected file.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A line does not have the width declared for its file kind.
    #[error("{file}: line {line} is {actual} bytes, expected {expected}")]
    LineLength {
        file: String,
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// A byte outside 7-bit ASCII.
    #[error("{file}: line {line} has non-ASCII byte 0x{byte:02X} at column {column}")]
    NonAscii {
        file: String,
        line: usize,
        column: usize,
        byte: u8,
    },

    /// Header, trailer or record-count mismatch in a monthly file.
    #[error("{file}: {message}")]
    Structure { file: String, message: String },

    /// File contains no lines at all.
    #[error("{file}: file is empty")]
    EmptyFile { file: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

impl LayoutError {
    /// Create a Structure error.
    pub fn structure(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Structure {
            file: file.into(),
            message: message.into(),
        }
    }

    /// 1-based line number the error points at, when it has one.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::LineLength { line, .. } | Self::NonAscii { line, .. } => Some(*line),
            _ => None,
        }
    }
}
