//! Error types for swipe-listener.
//!
//! Gesture processing itself never fails; only loading and validating a
//! [`SwipeConfig`](crate::SwipeConfig) can.

use std::path::PathBuf;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a listener configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read swipe configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be parsed.
    #[error("Invalid {format} swipe configuration: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// A field parsed but holds an unusable value.
    #[error("Invalid value for option '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },

    /// The file extension does not name a supported format.
    #[error("Unsupported configuration format for '{path}' (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(format: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            message: message.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}
