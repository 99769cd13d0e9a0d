//! Stable in-place row sorting.

use tracing::debug;

use crate::data::{Row, Table};

use super::compare::sorts_before;
use super::keys::SortKeys;

/// Sort rows into non-decreasing key order with an insertion sort.
///
/// A row only moves left past a predecessor it sorts strictly before, so
/// rows equal on every key keep their input order. Returns the number of
/// adjacent swaps performed.
pub fn sort_rows(rows: &mut [Row], keys: &SortKeys) -> usize {
    let mut swaps = 0;
    for i in 1..rows.len() {
        let mut j = i;
        while j > 0 && sorts_before(&rows[j], &rows[j - 1], keys) {
            rows.swap(j, j - 1);
            swaps += 1;
            j -= 1;
        }
    }
    swaps
}

/// Sort a table's data rows in place. The header row is never moved.
pub fn sort_table(table: &mut Table, keys: &SortKeys) {
    let swaps = sort_rows(table.rows_mut(), keys);
    debug!(rows = table.row_count(), swaps, "sorted table");
}
