//! Conversion of raw CSV tables into Polars DataFrames.

use std::collections::BTreeMap;

use listing_model::SourceSchema;
use polars::prelude::{Column, DataFrame, IntoColumn, IntoSeries, StringChunkedBuilder};
use tracing::warn;

use crate::csv::CsvTable;
use crate::error::{IngestError, Result};

/// Builds a DataFrame named by the table's own header.
///
/// When the header repeats a name, the last column with that name wins.
/// The merge run does not call this: source files are named through
/// [`apply_source_schema`]. It serves callers inspecting a raw file without
/// a schema.
pub fn csv_table_to_dataframe(table: &CsvTable) -> Result<DataFrame> {
    ensure_rectangular(table)?;
    let mut last_position: BTreeMap<&str, usize> = BTreeMap::new();
    for (idx, name) in table.headers.iter().enumerate() {
        if let Some(previous) = last_position.insert(name.as_str(), idx) {
            warn!(column = %name, previous, replaced_by = idx, "duplicate header name");
        }
    }

    let columns = table
        .headers
        .iter()
        .enumerate()
        .filter(|(idx, name)| last_position.get(name.as_str()) == Some(idx))
        .map(|(idx, name)| build_column(table, idx, name))
        .collect();
    Ok(DataFrame::new(columns)?)
}

/// Names the table's columns by position from `schema` and removes the
/// schema's dropped columns.
///
/// Fails when the table width differs from the schema's column count or a
/// row differs from the table width.
pub fn apply_source_schema(table: &CsvTable, schema: &SourceSchema) -> Result<DataFrame> {
    if table.width() != schema.columns.len() {
        return Err(IngestError::ColumnArityMismatch {
            source_name: schema.kind.to_string(),
            expected: schema.columns.len(),
            found: table.width(),
        });
    }
    ensure_rectangular(table)?;

    let columns = schema
        .columns
        .iter()
        .enumerate()
        .filter(|(_, name)| !schema.dropped.contains(*name))
        .map(|(idx, name)| build_column(table, idx, name))
        .collect();
    Ok(DataFrame::new(columns)?)
}

/// Tables built by hand may be ragged; `build_column` indexes every row.
fn ensure_rectangular(table: &CsvTable) -> Result<()> {
    match table
        .rows
        .iter()
        .position(|row| row.len() != table.width())
    {
        Some(row) => Err(IngestError::RaggedRow {
            row,
            expected: table.width(),
            found: table.rows[row].len(),
        }),
        None => Ok(()),
    }
}

fn build_column(table: &CsvTable, idx: usize, name: &str) -> Column {
    let mut builder = StringChunkedBuilder::new(name.into(), table.height());
    for row in &table.rows {
        builder.append_value(row[idx].as_str());
    }
    builder.finish().into_series().into_column()
}

#[cfg(test)]
mod tests {
    use super::*;
    use listing_model::SourceKind;

    fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        CsvTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|v| (*v).to_string()).collect())
                .collect(),
        }
    }

    fn values(df: &DataFrame, name: &str) -> Vec<Option<String>> {
        df.column(name)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect()
    }

    #[test]
    fn test_to_dataframe_keeps_order() {
        let df = csv_table_to_dataframe(&table(&["b", "a"], &[&["2", "1"], &["4", "3"]])).unwrap();
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(values(&df, "a"), vec![Some("1".into()), Some("3".into())]);
    }

    #[test]
    fn test_to_dataframe_last_duplicate_wins() {
        let df = csv_table_to_dataframe(&table(&["a", "b", "a"], &[&["1", "2", "3"]])).unwrap();
        assert_eq!(df.width(), 2);
        assert_eq!(values(&df, "a"), vec![Some("3".into())]);
    }

    #[test]
    fn test_empty_field_is_not_null() {
        let df = csv_table_to_dataframe(&table(&["a", "b"], &[&["", "x"]])).unwrap();
        assert_eq!(values(&df, "a"), vec![Some(String::new())]);
    }

    #[test]
    fn test_apply_schema_renames_and_drops() {
        let schema = SourceKind::Website.schema();
        let raw = table(
            &["d", "s", "l", "ln", "c", "co", "r", "p", "n", "t", "cat"],
            &[&[
                "Foo.com", "com", "en", "Foo LLC", "Paris", "France", "IDF", "+33", "Foo", "com",
                "Shops",
            ]],
        );
        let df = apply_source_schema(&raw, schema).unwrap();
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "domain",
                "legal_name",
                "city",
                "country",
                "region_name",
                "phone",
                "name",
                "category"
            ]
        );
        assert_eq!(values(&df, "legal_name"), vec![Some("Foo LLC".into())]);
        assert_eq!(values(&df, "category"), vec![Some("Shops".into())]);
    }

    #[test]
    fn test_apply_schema_arity_mismatch() {
        let raw = table(&["a", "b"], &[]);
        let err = apply_source_schema(&raw, SourceKind::Google.schema()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::ColumnArityMismatch {
                expected: 15,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_ragged_table_is_rejected() {
        let ragged = table(&["a", "b"], &[&["1", "2"], &["3"]]);
        let err = csv_table_to_dataframe(&ragged).unwrap_err();
        assert!(matches!(
            err,
            IngestError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        ));

        let headers: Vec<&str> = vec!["x"; 11];
        let mut row: Vec<&str> = vec!["v"; 11];
        let wide = table(&headers, &[row.as_slice()]);
        assert!(apply_source_schema(&wide, SourceKind::Website.schema()).is_ok());
        row.pop();
        let short = table(&headers, &[row.as_slice()]);
        let err = apply_source_schema(&short, SourceKind::Website.schema()).unwrap_err();
        assert!(matches!(err, IngestError::RaggedRow { row: 0, .. }));
    }

    #[test]
    fn test_apply_schema_ignores_duplicate_raw_names() {
        let headers: Vec<&str> = vec!["x"; 16];
        let raw = table(&headers, &[]);
        let df = apply_source_schema(&raw, SourceKind::Facebook.schema()).unwrap();
        assert_eq!(df.width(), 11);
        assert_eq!(df.height(), 0);
    }
}
