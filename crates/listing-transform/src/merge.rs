//! The three-source merge: two left joins, reconciliation, projection.

use listing_model::{
    ATTRIBUTE_RESOLUTIONS, FACEBOOK_SUFFIXES, JOIN_KEY, OUTPUT_COLUMNS, WEBSITE_GOOGLE_SUFFIXES,
};
use polars::prelude::DataFrame;
use tracing::{debug, info};

use crate::data_utils::require_columns;
use crate::error::Result;
use crate::join::left_join;
use crate::reconcile::{ResolveStats, resolve_columns};

/// Merged listing frame plus per-column reconciliation counts.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub data: DataFrame,
    pub resolutions: Vec<ResolveStats>,
}

/// Merges normalized website, google and facebook frames into the output
/// layout.
///
/// Website rows drive the result: every website row appears at least once,
/// and once per combination of google and facebook matches on `domain`.
pub fn merge_sources(
    website: &DataFrame,
    google: &DataFrame,
    facebook: &DataFrame,
) -> Result<MergeOutcome> {
    let mut merged = left_join(website, google, JOIN_KEY, WEBSITE_GOOGLE_SUFFIXES)?;
    merged = left_join(&merged, facebook, JOIN_KEY, FACEBOOK_SUFFIXES)?;
    debug!(
        columns = merged.width(),
        rows = merged.height(),
        "joined sources"
    );

    let mut resolutions = Vec::with_capacity(ATTRIBUTE_RESOLUTIONS.len());
    for spec in &ATTRIBUTE_RESOLUTIONS {
        resolutions.push(resolve_columns(&mut merged, spec)?);
    }

    let data = project_output(&merged)?;
    info!(
        website_rows = website.height(),
        merged_rows = data.height(),
        "merged sources"
    );
    Ok(MergeOutcome { data, resolutions })
}

/// Selects the output columns in their fixed order.
pub fn project_output(df: &DataFrame) -> Result<DataFrame> {
    require_columns(df, OUTPUT_COLUMNS)?;
    Ok(df.select(OUTPUT_COLUMNS)?)
}
