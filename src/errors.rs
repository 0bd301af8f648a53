//! Shared error types for jumbler

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for anagram lookups
#[derive(Debug, Error)]
pub enum Error {
    /// The word list could not be opened or read
    #[error("Word list unavailable: {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The query is empty or cannot be processed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Console I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a resource error for the word list at `path`
    pub fn resource_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ResourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Whether the caller can recover by asking for the input again
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
