//! Multi-key row comparison.
//!
//! Fields are compared as plain strings (byte-wise ordinal order), key by
//! key in precedence order. Rows equal on every key compare `Equal`, so the
//! ordering is a weak ordering and ties are left to a stable sort.

use std::cmp::Ordering;

use crate::data::Row;

use super::keys::SortKeys;

/// Compare two rows over the key columns.
pub fn compare_rows(a: &Row, b: &Row, keys: &SortKeys) -> Ordering {
    keys.columns()
        .iter()
        .map(|&col| a.field(col).cmp(b.field(col)))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Whether `a` sorts strictly before `b`.
pub fn sorts_before(a: &Row, b: &Row, keys: &SortKeys) -> bool {
    compare_rows(a, b, keys) == Ordering::Less
}

/// Position in the key list of the first key whose values differ.
///
/// Returns `None` when the rows agree on every key.
pub fn mismatch_depth(a: &Row, b: &Row, keys: &SortKeys) -> Option<usize> {
    keys.columns()
        .iter()
        .position(|&col| a.field(col) != b.field(col))
}
