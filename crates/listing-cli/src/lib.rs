//! CLI library components for the listing merge.

pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod summary;
pub mod types;
