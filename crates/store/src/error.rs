//! Storage errors.

use std::io;

/// Failure reaching or decoding stored objects.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The object does not exist.
    #[error("object '{name}' not found")]
    NotFound { name: String },
    /// The backend could not be read.
    #[error("failed to read object '{name}': {source}")]
    Read { name: String, source: io::Error },
    /// The backend could not be written.
    #[error("failed to write object '{name}': {source}")]
    Write { name: String, source: io::Error },
    /// The object content is not a valid credential document.
    #[error("object '{name}' is not a valid credential document: {source}")]
    Malformed {
        name: String,
        source: serde_json::Error,
    },
    /// The object name escapes the bucket.
    #[error("invalid object name '{name}'")]
    InvalidName { name: String },
}

impl StoreError {
    /// Whether the object was simply absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
