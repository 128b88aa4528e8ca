//! Listing data transformation crate.
//!
//! Takes the per-source DataFrames produced by `listing-ingest` and turns
//! them into one merged listing table.
//!
//! # Overview
//!
//! - **Normalization**: lowercase and trim the comparison columns of a source
//! - **Joining**: deterministic left join on `domain` with suffixed overlaps
//! - **Reconciliation**: collapse per-source attribute columns into one
//!   `resolved_*` column each
//!
//! # Example
//!
//! ```ignore
//! use listing_transform::{lowercase_and_trim, merge_sources};
//!
//! lowercase_and_trim(&mut website, SourceKind::Website.schema().normalized)?;
//! // same for google and facebook
//! let outcome = merge_sources(&website, &google, &facebook)?;
//! println!("{} merged rows", outcome.data.height());
//! ```

mod data_utils;
mod error;
mod join;
mod merge;
mod normalize;
mod reconcile;

// === Error Types ===
pub use error::{Result, TransformError};

// === Column Helpers ===
pub use data_utils::{column_names, column_values, string_column};

// === Stages ===
pub use join::left_join;
pub use merge::{MergeOutcome, merge_sources, project_output};
pub use normalize::{lowercase_and_trim, normalize_value};
pub use reconcile::{ResolutionRule, ResolveStats, resolve_columns, resolve_row};
