//! Removal of rows with a degenerate depth.

use crate::models::InputRecord;
use tracing::info;

/// Records retained by the zero-depth filter
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub retained: Vec<InputRecord>,
    pub removed: usize,
}

/// Drop every record whose top or bottom depth is exactly zero.
///
/// The detection flag is not consulted. Relative order is preserved.
pub fn filter_zero_depth(records: &[InputRecord]) -> FilterOutcome {
    let retained: Vec<InputRecord> = records
        .iter()
        .filter(|record| record.top.z != 0.0 && record.bottom.z != 0.0)
        .copied()
        .collect();
    let removed = records.len() - retained.len();

    if removed > 0 {
        info!(
            "Removed {} rows with a zero depth on the top or bottom surface",
            removed
        );
    }

    FilterOutcome { retained, removed }
}
