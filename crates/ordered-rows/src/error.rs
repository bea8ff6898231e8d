//! Error types for ordered-rows.

use std::path::PathBuf;

/// Result type alias for ordered-rows operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ordered-rows.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A row position does not address an element of the current sequence.
    #[error("Position {position} is out of range for a list of {len} values")]
    OutOfRange { position: i128, len: usize },

    /// The random value range is empty.
    #[error("Invalid random range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    /// Configuration parsing error.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// File I/O error.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an out-of-range error.
    pub fn out_of_range(position: i128, len: usize) -> Self {
        Self::OutOfRange { position, len }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is an [`Error::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
