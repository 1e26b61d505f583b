//! Storage error types for scholar-store.

use std::path::PathBuf;

use thiserror::Error;

use scholar_core::errors::CoreError;

/// Errors from reading or writing the record collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The settings file could not be read, written or replaced.
    #[error("Settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The collection or settings map could not be encoded or decoded.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The settings file exists but does not hold a JSON object.
    #[error("Settings file {path} is not a JSON object: {source}")]
    Unreadable {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A settings key holds something other than a string.
    #[error("Settings key '{key}' does not hold a string")]
    NotAString { key: String },

    /// The record was rejected before saving.
    #[error(transparent)]
    Invalid(#[from] CoreError),
}
