//! Error types for metadata rendering.

use thiserror::Error;

/// A specialized Result type for metadata operations.
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Errors that can occur while producing metadata documents.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// JSON serialization failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
