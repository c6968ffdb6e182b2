//! Error types for the conference client crate

#![allow(missing_docs)]

use confsdk_encoding_core::{EncodingError, MediaKind};
use thiserror::Error;

/// Result type for conference client operations
pub type ConferenceResult<T> = Result<T, ConferenceError>;

/// Errors that can occur while assembling conference client options
#[derive(Debug, Error)]
pub enum ConferenceError {
    /// A required argument was absent or out of range
    #[error("Invalid argument: {kind} encoding parameter {reason}")]
    InvalidArgument { kind: MediaKind, reason: String },

    /// An encoding descriptor failed validation
    #[error("Encoding parameter error: {0}")]
    Encoding(#[from] EncodingError),

    /// A configuration document could not be read or written
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ConferenceError {
    /// Create an invalid argument error
    pub fn invalid_argument(kind: MediaKind, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            kind,
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this is the invalid argument error raised by the builder
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

impl From<serde_json::Error> for ConferenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(err.to_string())
    }
}
