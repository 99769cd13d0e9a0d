//! Table data: rows of text fields and the tab-separated loader.
//!
//! - **table**: [`Row`] and [`Table`], the in-memory representation
//! - **loader**: [`load_table`] / [`parse_table`], building a table from input

pub mod loader;
pub mod table;

pub use loader::{load_table, parse_table};
pub use table::{Row, Table};
