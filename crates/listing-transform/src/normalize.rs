//! Comparison-column normalization.

use polars::prelude::DataFrame;
use tracing::debug;

use crate::data_utils::{column_values, string_column};
use crate::error::Result;

/// Lowercases then trims each listed column in place.
///
/// Null values stay null. Returns the number of values that changed.
pub fn lowercase_and_trim(df: &mut DataFrame, columns: &[&str]) -> Result<usize> {
    let mut changed = 0usize;
    for name in columns {
        let values = column_values(df, name)?;
        let normalized: Vec<Option<String>> = values
            .iter()
            .map(|value| value.as_deref().map(normalize_value))
            .collect();
        changed += values
            .iter()
            .zip(&normalized)
            .filter(|(before, after)| before != after)
            .count();
        df.with_column(string_column(name, &normalized))?;
    }
    debug!(columns = columns.len(), changed, "normalized comparison columns");
    Ok(changed)
}

/// Lowercase, then strip leading and trailing whitespace.
pub fn normalize_value(value: &str) -> String {
    value.to_lowercase().trim().to_string()
}
