//! Hierarchical grouping of sorted rows.
//!
//! Walks rows already sorted by the same [`SortKeys`] and collapses each
//! maximal run of rows equal on every key into one [`Group`]. A group only
//! records the key values from the depth where it first differs from the
//! previous group, which is exactly what the indented report reprints.

use serde::{Deserialize, Serialize};

use crate::data::{Row, Table};

use super::compare::mismatch_depth;
use super::keys::SortKeys;

/// A run of adjacent rows sharing all key values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Key position where this group first differs from the previous one
    pub depth: usize,
    /// Key values from `depth` through the last key
    pub values: Vec<String>,
    /// Number of rows in the run
    pub count: usize,
}

impl Group {
    fn start(row: &Row, keys: &SortKeys, depth: usize) -> Self {
        let values = keys.columns()[depth..]
            .iter()
            .map(|&col| row.field(col).to_string())
            .collect();
        Self {
            depth,
            values,
            count: 1,
        }
    }

    /// Key positions paired with the values printed for this group.
    pub fn levels(&self) -> impl Iterator<Item = (usize, &str)> {
        self.values
            .iter()
            .enumerate()
            .map(move |(offset, value)| (self.depth + offset, value.as_str()))
    }
}

/// Group sorted rows by their key values.
///
/// The first group starts at depth 0 and carries every key value. Each
/// later group starts at the mismatch depth against the preceding row.
/// Zero rows give zero groups.
pub fn group_rows(rows: &[Row], keys: &SortKeys) -> Vec<Group> {
    let mut groups = Vec::new();
    let Some(first) = rows.first() else {
        return groups;
    };

    let mut current = Group::start(first, keys, 0);
    for pair in rows.windows(2) {
        match mismatch_depth(&pair[0], &pair[1], keys) {
            None => current.count += 1,
            Some(depth) => {
                let next = Group::start(&pair[1], keys, depth);
                groups.push(std::mem::replace(&mut current, next));
            }
        }
    }
    groups.push(current);
    groups
}

/// Group the data rows of a sorted table.
pub fn group_table(table: &Table, keys: &SortKeys) -> Vec<Group> {
    group_rows(table.rows(), keys)
}
