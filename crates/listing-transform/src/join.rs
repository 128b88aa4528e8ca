//! Left outer join on a single string key.
//!
//! Row order is deterministic: left rows keep their order, and a left row
//! with several matches is repeated once per match in right-side order.

use std::collections::{BTreeSet, HashMap};

use listing_model::JoinSuffixes;
use polars::prelude::{Column, DataFrame};
use tracing::debug;

use crate::data_utils::{column_names, column_values, string_column};
use crate::error::{Result, TransformError};

/// Left-joins `right` onto `left` on `key`.
///
/// Non-key columns present on both sides get `suffixes.left` and
/// `suffixes.right` appended. The key column appears once, in its left
/// position; right columns follow the left ones. Left rows without a match
/// get nulls in every right column. Null keys match null keys.
pub fn left_join(
    left: &DataFrame,
    right: &DataFrame,
    key: &str,
    suffixes: JoinSuffixes,
) -> Result<DataFrame> {
    let left_keys = column_values(left, key)?;
    let right_keys = column_values(right, key)?;

    let mut right_index: HashMap<Option<&str>, Vec<usize>> = HashMap::new();
    for (idx, value) in right_keys.iter().enumerate() {
        right_index.entry(value.as_deref()).or_default().push(idx);
    }

    let mut pairs: Vec<(usize, Option<usize>)> = Vec::with_capacity(left.height());
    for (left_idx, value) in left_keys.iter().enumerate() {
        match right_index.get(&value.as_deref()) {
            Some(matches) => {
                pairs.extend(matches.iter().map(|&right_idx| (left_idx, Some(right_idx))));
            }
            None => pairs.push((left_idx, None)),
        }
    }

    let left_names = column_names(left);
    let right_names: Vec<String> = column_names(right)
        .into_iter()
        .filter(|name| name != key)
        .collect();
    let overlap: BTreeSet<&str> = left_names
        .iter()
        .filter(|name| name.as_str() != key && right_names.contains(name))
        .map(String::as_str)
        .collect();

    let mut columns: Vec<Column> = Vec::with_capacity(left_names.len() + right_names.len());
    let mut output_names: BTreeSet<String> = BTreeSet::new();

    for name in &left_names {
        let output = suffixed(name, &overlap, suffixes.left);
        let values = column_values(left, name)?;
        let gathered: Vec<Option<String>> = pairs
            .iter()
            .map(|(left_idx, _)| values[*left_idx].clone())
            .collect();
        push_column(&mut columns, &mut output_names, &output, &gathered)?;
    }

    for name in &right_names {
        let output = suffixed(name, &overlap, suffixes.right);
        let values = column_values(right, name)?;
        let gathered: Vec<Option<String>> = pairs
            .iter()
            .map(|(_, right_idx)| right_idx.and_then(|idx| values[idx].clone()))
            .collect();
        push_column(&mut columns, &mut output_names, &output, &gathered)?;
    }

    let joined = DataFrame::new(columns)?;
    debug!(
        key,
        left_rows = left.height(),
        right_rows = right.height(),
        joined_rows = joined.height(),
        "left join"
    );
    Ok(joined)
}

fn suffixed(name: &str, overlap: &BTreeSet<&str>, suffix: &str) -> String {
    if overlap.contains(name) {
        format!("{name}{suffix}")
    } else {
        name.to_string()
    }
}

fn push_column(
    columns: &mut Vec<Column>,
    output_names: &mut BTreeSet<String>,
    name: &str,
    values: &[Option<String>],
) -> Result<()> {
    if !output_names.insert(name.to_string()) {
        return Err(TransformError::DuplicateColumn {
            column: name.to_string(),
        });
    }
    columns.push(string_column(name, values));
    Ok(())
}
