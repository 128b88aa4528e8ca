//! Row-repair policies for rows wider than the header.

use listing_model::RepairStrategy;

/// Repairs a row whose field count exceeds the header width.
///
/// Returns `None` when the row cannot be repaired; the reader then drops it.
pub trait RowRepair {
    fn repair(&self, fields: Vec<String>, width: usize, delimiter: char) -> Option<Vec<String>>;
}

/// Folds excess fields from the right edge into the second-to-last field,
/// re-inserting the delimiter between them.
///
/// Targets free-text values containing an unescaped delimiter near the end of
/// the row.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeTrailing;

impl RowRepair for MergeTrailing {
    fn repair(
        &self,
        mut fields: Vec<String>,
        width: usize,
        delimiter: char,
    ) -> Option<Vec<String>> {
        while fields.len() > width {
            if fields.len() < 2 {
                return None;
            }
            let last = fields.pop()?;
            let tail = fields.last_mut()?;
            tail.push(delimiter);
            tail.push_str(&last);
        }
        Some(fields)
    }
}

/// Never repairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strict;

impl RowRepair for Strict {
    fn repair(&self, _fields: Vec<String>, _width: usize, _delimiter: char) -> Option<Vec<String>> {
        None
    }
}

/// Returns the policy for a configured strategy.
pub fn repair_policy(strategy: RepairStrategy) -> &'static dyn RowRepair {
    match strategy {
        RepairStrategy::MergeTrailing => &MergeTrailing,
        RepairStrategy::Strict => &Strict,
    }
}
