//! String column helpers shared by the transformation stages.
//!
//! Every listing column is a nullable string column; these helpers move
//! values between DataFrames and plain vectors.

use polars::prelude::{Column, DataFrame, IntoColumn, StringChunkedBuilder};

use crate::error::{Result, TransformError};

/// Owned values of a string column, nulls preserved.
pub fn column_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df
        .column(name)
        .map_err(|_| TransformError::ColumnNotFound {
            column: name.to_string(),
        })?;
    let values = column
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect();
    Ok(values)
}

/// Builds a nullable string column.
pub fn string_column<S: AsRef<str>>(name: &str, values: &[Option<S>]) -> Column {
    let mut builder = StringChunkedBuilder::new(name.into(), values.len());
    for value in values {
        match value {
            Some(value) => builder.append_value(value.as_ref()),
            None => builder.append_null(),
        }
    }
    builder.finish().into_column()
}

/// Column names in frame order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

/// Fails with [`TransformError::ColumnNotFound`] unless every column exists.
pub fn require_columns<'a>(df: &DataFrame, names: impl IntoIterator<Item = &'a str>) -> Result<()> {
    for name in names {
        if df.column(name).is_err() {
            return Err(TransformError::ColumnNotFound {
                column: name.to_string(),
            });
        }
    }
    Ok(())
}
