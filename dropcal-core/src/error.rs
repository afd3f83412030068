//! Error types for dropcal.

use thiserror::Error;

/// Errors that can occur in dropcal operations.
#[derive(Error, Debug)]
pub enum DropCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month {0}. Expected 0-11")]
    InvalidMonth(u32),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for dropcal operations.
pub type DropCalResult<T> = Result<T, DropCalError>;
