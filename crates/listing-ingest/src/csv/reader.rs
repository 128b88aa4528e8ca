//! Tolerant CSV file reading.

use std::borrow::Cow;
use std::path::Path;

use listing_model::RepairStrategy;
use tracing::{debug, trace, warn};

use crate::error::{IngestError, Result};

use super::line::parse_csv_line;
use super::repair::{RowRepair, repair_policy};

/// Options for reading one source file.
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    pub delimiter: char,
    pub repair: RepairStrategy,
}

impl ReadOptions {
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            repair: RepairStrategy::default(),
        }
    }

    #[must_use]
    pub fn with_repair(mut self, repair: RepairStrategy) -> Self {
        self.repair = repair;
        self
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self::new(',')
    }
}

/// Rectangular table read from a file: every row has `headers.len()` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Row counts collected while reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Body lines seen (header excluded).
    pub rows_read: usize,
    /// Rows that were wider than the header and repaired.
    pub rows_repaired: usize,
    /// Rows discarded because their width could not be matched to the header.
    pub rows_dropped: usize,
}

impl IngestReport {
    pub fn rows_kept(&self) -> usize {
        self.rows_read - self.rows_dropped
    }
}

/// Reads a delimited file, repairing or dropping rows whose field count does
/// not match the header.
pub fn read_csv_table(path: &Path, options: &ReadOptions) -> Result<(CsvTable, IngestReport)> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let (table, report) = parse_csv_str(&content, options).map_err(|e| match e {
        IngestError::MissingHeader => IngestError::EmptyCsv {
            path: path.to_path_buf(),
        },
        other => other,
    })?;

    if report.rows_dropped > 0 {
        warn!(
            path = %path.display(),
            rows_dropped = report.rows_dropped,
            rows_read = report.rows_read,
            "dropped rows with mismatched field count"
        );
    }
    debug!(
        path = %path.display(),
        columns = table.width(),
        rows = table.height(),
        rows_repaired = report.rows_repaired,
        "read csv table"
    );

    Ok((table, report))
}

/// Parses delimited text already held in memory.
///
/// Lines end at `\r\n`, `\n` or a lone `\r`.
pub fn parse_csv_str(content: &str, options: &ReadOptions) -> Result<(CsvTable, IngestReport)> {
    let content = normalize_line_endings(content);
    let mut lines = content.lines();
    let header_line = lines.next().ok_or(IngestError::MissingHeader)?;
    let header_line = header_line.strip_prefix('\u{feff}').unwrap_or(header_line);
    let headers = parse_csv_line(header_line.trim(), options.delimiter);
    let width = headers.len();

    let policy = repair_policy(options.repair);
    let mut report = IngestReport::default();
    let mut rows = Vec::new();

    for (idx, line) in lines.enumerate() {
        report.rows_read += 1;
        let line_number = idx + 2;
        match fit_row(line, width, options.delimiter, policy) {
            FitOutcome::Exact(fields) => rows.push(fields),
            FitOutcome::Repaired(fields) => {
                trace!(line_number, "repaired wide row");
                report.rows_repaired += 1;
                rows.push(fields);
            }
            FitOutcome::Dropped { found } => {
                trace!(line_number, found, expected = width, "dropped row");
                report.rows_dropped += 1;
            }
        }
    }

    Ok((CsvTable { headers, rows }, report))
}

fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

enum FitOutcome {
    Exact(Vec<String>),
    Repaired(Vec<String>),
    Dropped { found: usize },
}

fn fit_row(line: &str, width: usize, delimiter: char, policy: &dyn RowRepair) -> FitOutcome {
    let fields = parse_csv_line(line, delimiter);
    let found = fields.len();
    if found == width {
        return FitOutcome::Exact(fields);
    }
    if found < width {
        return FitOutcome::Dropped { found };
    }
    match policy.repair(fields, width, delimiter) {
        Some(fields) if fields.len() == width => FitOutcome::Repaired(fields),
        _ => FitOutcome::Dropped { found },
    }
}
