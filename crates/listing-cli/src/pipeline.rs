//! Merge run with explicit stages.
//!
//! The run follows these stages in order:
//! 1. **Load**: read each source, repair or drop ragged rows, apply the
//!    source schema and normalize comparison columns
//! 2. **Merge**: join the sources on `domain` and reconcile attributes
//! 3. **Output**: write the merged CSV (skipped for dry runs)

use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use listing_ingest::{ReadOptions, apply_source_schema, read_csv_table};
use listing_model::{MergeConfig, SourceKind};
use listing_transform::{lowercase_and_trim, merge_sources};

use crate::output::write_output;
use crate::types::{RunResult, SourceSummary};

/// One source after loading and normalization.
#[derive(Debug)]
pub struct LoadedSource {
    pub summary: SourceSummary,
    pub data: DataFrame,
}

/// Reads one source file and prepares it for joining.
pub fn load_source(config: &MergeConfig, kind: SourceKind) -> Result<LoadedSource> {
    let source = config.source(kind);
    let span = info_span!(
        "load_source",
        source = kind.as_str(),
        path = %source.path.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let delimiter = source.delimiter_char(kind)?;
    let options = ReadOptions::new(delimiter).with_repair(config.repair);
    let (table, report) =
        read_csv_table(&source.path, &options).with_context(|| format!("load {kind} source"))?;

    let schema = kind.schema();
    let mut data = apply_source_schema(&table, schema)
        .with_context(|| format!("apply {kind} schema"))?;
    let normalized_values = lowercase_and_trim(&mut data, schema.normalized)
        .with_context(|| format!("normalize {kind} columns"))?;

    info!(
        rows_read = report.rows_read,
        rows_repaired = report.rows_repaired,
        rows_dropped = report.rows_dropped,
        rows = data.height(),
        normalized_values,
        duration_ms = start.elapsed().as_millis(),
        "source loaded"
    );

    Ok(LoadedSource {
        summary: SourceSummary {
            kind,
            path: source.path.clone(),
            report,
            normalized_values,
        },
        data,
    })
}

/// Runs every stage for `config`. With `dry_run` the output file is left
/// untouched.
pub fn run(config: &MergeConfig, dry_run: bool) -> Result<RunResult> {
    let run_span = info_span!("merge_run", output = %config.output.display(), dry_run);
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    config.validate()?;

    let website = load_source(config, SourceKind::Website)?;
    let google = load_source(config, SourceKind::Google)?;
    let facebook = load_source(config, SourceKind::Facebook)?;

    let outcome = info_span!("merge").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let outcome = merge_sources(&website.data, &google.data, &facebook.data)
            .context("merge sources")?;
        info!(
            rows = outcome.data.height(),
            duration_ms = start.elapsed().as_millis(),
            "merge complete"
        );
        Ok(outcome)
    })?;

    let written = if dry_run {
        info!("dry run, output not written");
        false
    } else {
        info_span!("output").in_scope(|| -> Result<()> {
            let start = Instant::now();
            write_output(&outcome.data, &config.output)?;
            info!(duration_ms = start.elapsed().as_millis(), "output complete");
            Ok(())
        })?;
        true
    };

    info!(
        output_rows = outcome.data.height(),
        duration_ms = run_start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunResult {
        sources: vec![website.summary, google.summary, facebook.summary],
        output_path: config.output.clone(),
        output_rows: outcome.data.height(),
        written,
        resolutions: outcome.resolutions,
    })
}
