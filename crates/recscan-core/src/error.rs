//! Error types for the recscan-core library.
//!
//! Structuring itself never fails; these errors cover the layers around it.

use thiserror::Error;

/// Main error type for the recscan library.
#[derive(Error, Debug)]
pub enum RecscanError {
    /// Input rejected at the boundary.
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised when OCR text is checked before structuring.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The OCR step produced no text.
    #[error("no text found")]
    NoText,

    /// Input is larger than the configured byte limit.
    #[error("input is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },

    /// Input has more lines than the configured limit.
    #[error("input has {count} lines, limit is {limit}")]
    TooManyLines { count: usize, limit: usize },
}

/// Result type for the recscan library.
pub type Result<T> = std::result::Result<T, RecscanError>;
