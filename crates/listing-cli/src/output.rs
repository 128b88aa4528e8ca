//! Merged CSV output.
//!
//! Layout: an unnamed leading column with the 0-based row number, then the
//! frame's columns. Nulls become empty fields, quoting is minimal and every
//! record ends with `\n`.

use std::io;
use std::path::Path;

use listing_transform::{column_names, column_values};
use polars::prelude::DataFrame;
use tracing::info;

use crate::error::PipelineError;

/// Writes `df` to `path`, replacing any existing file. Returns the row count.
pub fn write_output(df: &DataFrame, path: &Path) -> Result<usize, PipelineError> {
    let columns = FrameColumns::from_frame(df)?;
    let wrap = |source: csv::Error| PipelineError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::create(path).map_err(|e| wrap(e.into()))?;
    write_frame(&columns, file).map_err(wrap)?;
    info!(path = %path.display(), rows = columns.height, "wrote merged dataset");
    Ok(columns.height)
}

/// Column-major copy of a frame's string values.
struct FrameColumns {
    names: Vec<String>,
    values: Vec<Vec<Option<String>>>,
    height: usize,
}

impl FrameColumns {
    fn from_frame(df: &DataFrame) -> Result<Self, PipelineError> {
        let names = column_names(df);
        let values = names
            .iter()
            .map(|name| column_values(df, name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            names,
            values,
            height: df.height(),
        })
    }
}

fn write_frame<W: io::Write>(columns: &FrameColumns, out: W) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(std::iter::once("").chain(columns.names.iter().map(String::as_str)))?;
    for row in 0..columns.height {
        let mut record = Vec::with_capacity(columns.names.len() + 1);
        record.push(row.to_string());
        record.extend(
            columns
                .values
                .iter()
                .map(|column| column[row].clone().unwrap_or_default()),
        );
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
