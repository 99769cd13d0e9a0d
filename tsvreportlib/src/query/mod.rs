//! Query layer: sort keys, row comparison, sorting, and grouping.
//!
//! - **keys**: [`SortKeys`], parsed from 1-based column arguments
//! - **compare**: the multi-key comparator and mismatch depth
//! - **sort**: stable in-place insertion sort over data rows
//! - **group**: collapsing sorted rows into hierarchical [`Group`] records

pub mod compare;
pub mod group;
pub mod keys;
pub mod sort;

pub use compare::{compare_rows, mismatch_depth, sorts_before};
pub use group::{group_rows, group_table, Group};
pub use keys::SortKeys;
pub use sort::{sort_rows, sort_table};
