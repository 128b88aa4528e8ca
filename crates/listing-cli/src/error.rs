//! Error types for the run pipeline.

use std::path::PathBuf;

use listing_transform::TransformError;
use thiserror::Error;

/// Failures raised by the binary's own stages.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The merged file could not be created or written.
    #[error("failed to write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The merged frame could not be read back column by column.
    #[error(transparent)]
    Frame(#[from] TransformError),
}
