//! Error types for configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a [`MergeConfig`](crate::MergeConfig).
#[derive(Debug, Error)]
pub enum ModelError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON or has unknown keys.
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Delimiter is not a single ASCII character.
    #[error("invalid delimiter {value:?} for {source_name} source: expected a single ASCII character")]
    InvalidDelimiter { source_name: String, value: String },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
