//! Error handling for data objects.

use std::io;

/// Errors raised while building, reading or decoding data objects
#[derive(Debug, thiserror::Error)]
pub enum DataObjectError {
    /// The input to a record constructor had the wrong shape
    #[error("invalid input at `{path}`: {reason}")]
    InvalidInput {
        /// JSON path of the offending value (`$` for the root)
        path: String,
        /// What was expected
        reason: String,
    },

    /// Text could not be decoded as JSON
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A required field was absent
    #[error("missing field: {0}")]
    MissingField(String),

    /// Reading encoded input failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl DataObjectError {
    /// Create an invalid input error for the value at `path`
    pub fn invalid_input(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Whether the error came from malformed encoded text
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Result type for data object operations
pub type Result<T> = std::result::Result<T, DataObjectError>;
