//! Shared definitions for the listing merge: source schemas, reconciliation
//! rules and run configuration.

pub mod config;
pub mod error;
pub mod schema;

pub use config::{MergeConfig, RepairStrategy, SourceConfig};
pub use error::{ModelError, Result};
pub use schema::{
    ATTRIBUTE_RESOLUTIONS, FACEBOOK_SUFFIXES, JOIN_KEY, JoinSuffixes, OUTPUT_COLUMNS,
    ResolveSpec, SourceKind, SourceSchema, WEBSITE_GOOGLE_SUFFIXES,
};
