//! CSV reading utilities.

mod line;
mod reader;
mod repair;

pub use line::parse_csv_line;
pub use reader::{CsvTable, IngestReport, ReadOptions, parse_csv_str, read_csv_table};
pub use repair::{MergeTrailing, RowRepair, Strict, repair_policy};
