//! Listing data ingestion.
//!
//! Loads dirty, delimited listing exports into Polars DataFrames.
//!
//! # Features
//!
//! - **Tolerant reading**: rows wider than the header are repaired by a
//!   pluggable [`RowRepair`] policy, rows that cannot be matched to the
//!   header width are dropped and counted in an [`IngestReport`]
//! - **Schema application**: columns are named by position from a static
//!   source schema, then unwanted columns are dropped
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use listing_ingest::{ReadOptions, apply_source_schema, read_csv_table};
//! use listing_model::SourceKind;
//!
//! let (table, report) = read_csv_table(Path::new("website_dataset.csv"), &ReadOptions::new(';'))?;
//! let df = apply_source_schema(&table, SourceKind::Website.schema())?;
//! ```

mod csv;
mod error;
mod frame;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    CsvTable, IngestReport, MergeTrailing, ReadOptions, RowRepair, Strict, parse_csv_line,
    parse_csv_str, read_csv_table, repair_policy,
};

// === DataFrame Conversion ===
pub use frame::{apply_source_schema, csv_table_to_dataframe};
