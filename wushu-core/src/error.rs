//! Error types for the wushu calendar.

use thiserror::Error;

/// Errors that can occur in wushu operations.
#[derive(Error, Debug)]
pub enum WushuError {
    #[error("Invalid date key '{0}'. Expected YYYY-MM-DD")]
    InvalidDateKey(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for wushu operations.
pub type WushuResult<T> = Result<T, WushuError>;
