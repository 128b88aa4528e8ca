use std::path::PathBuf;

use listing_ingest::IngestReport;
use listing_model::SourceKind;
use listing_transform::ResolveStats;

#[derive(Debug)]
pub struct RunResult {
    pub sources: Vec<SourceSummary>,
    pub output_path: PathBuf,
    pub output_rows: usize,
    /// False for dry runs.
    pub written: bool,
    pub resolutions: Vec<ResolveStats>,
}

#[derive(Debug)]
pub struct SourceSummary {
    pub kind: SourceKind,
    pub path: PathBuf,
    pub report: IngestReport,
    /// Comparison values changed by normalization.
    pub normalized_values: usize,
}
