//! Field reconciliation across joined sources.
//!
//! Each [`ResolveSpec`] collapses up to three candidate columns into one
//! output column. The first two slots take part in an override check before
//! the plain first-non-null fallback.

use listing_model::ResolveSpec;
use polars::prelude::DataFrame;
use tracing::debug;

use crate::data_utils::{column_values, require_columns, string_column};
use crate::error::Result;

/// Which rule produced a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionRule {
    /// Primary and secondary were both present and disagreed; primary won.
    PrimaryOverride,
    /// First non-null value among the configured slots.
    FirstNonNull,
    /// Every configured slot was null.
    AllNull,
}

/// Per-rule row counts for one resolved column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveStats {
    pub output: String,
    pub primary_override: usize,
    pub first_non_null: usize,
    pub all_null: usize,
}

impl ResolveStats {
    fn new(output: &str) -> Self {
        Self {
            output: output.to_string(),
            ..Self::default()
        }
    }

    fn record(&mut self, rule: ResolutionRule) {
        match rule {
            ResolutionRule::PrimaryOverride => self.primary_override += 1,
            ResolutionRule::FirstNonNull => self.first_non_null += 1,
            ResolutionRule::AllNull => self.all_null += 1,
        }
    }

    pub fn rows(&self) -> usize {
        self.primary_override + self.first_non_null + self.all_null
    }
}

/// Resolves one row.
///
/// The outer `Option` of each slot says whether the slot is configured, the
/// inner one carries the row value.
pub fn resolve_row<'a>(slots: [Option<Option<&'a str>>; 3]) -> (Option<&'a str>, ResolutionRule) {
    if let [Some(Some(primary)), Some(Some(secondary)), _] = slots
        && primary != secondary
    {
        return (Some(primary), ResolutionRule::PrimaryOverride);
    }
    match slots.into_iter().flatten().flatten().next() {
        Some(value) => (Some(value), ResolutionRule::FirstNonNull),
        None => (None, ResolutionRule::AllNull),
    }
}

/// Adds `spec.output` to `df` and drops the candidate columns.
///
/// The resolved column is appended after the remaining columns.
pub fn resolve_columns(df: &mut DataFrame, spec: &ResolveSpec) -> Result<ResolveStats> {
    require_columns(df, spec.candidate_columns())?;

    let slot_values = spec
        .candidates
        .iter()
        .map(|slot| slot.map(|name| column_values(df, name)).transpose())
        .collect::<Result<Vec<_>>>()?;

    let mut stats = ResolveStats::new(spec.output);
    let mut resolved: Vec<Option<String>> = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let slots: [Option<Option<&str>>; 3] = std::array::from_fn(|idx| {
            slot_values[idx]
                .as_ref()
                .map(|values| values[row].as_deref())
        });
        let (value, rule) = resolve_row(slots);
        stats.record(rule);
        resolved.push(value.map(str::to_string));
    }

    for name in spec.candidate_columns() {
        df.drop_in_place(name)?;
    }
    df.with_column(string_column(spec.output, &resolved))?;

    debug!(
        output = spec.output,
        primary_override = stats.primary_override,
        first_non_null = stats.first_non_null,
        all_null = stats.all_null,
        "resolved column"
    );
    Ok(stats)
}
