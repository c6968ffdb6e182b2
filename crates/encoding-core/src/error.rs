//! Error types for encoding parameter descriptors

#![allow(missing_docs)]

use thiserror::Error;

use crate::types::MediaKind;

/// Result type alias for encoding parameter operations
pub type EncodingResult<T> = std::result::Result<T, EncodingError>;

/// Errors raised while constructing or validating encoding descriptors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// A constructor or setter received a value outside its domain
    #[error("Invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        reason: String,
    },

    /// Codec name does not match any known codec of this media kind
    #[error("Unsupported {kind} codec: {name}")]
    UnsupportedCodec { kind: MediaKind, name: String },
}

impl EncodingError {
    /// Create a new invalid argument error
    pub fn invalid_argument(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }

    /// Create a new unsupported codec error
    pub fn unsupported_codec(kind: MediaKind, name: impl Into<String>) -> Self {
        Self::UnsupportedCodec {
            kind,
            name: name.into(),
        }
    }
}
