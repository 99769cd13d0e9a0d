//! In-memory table of text fields.
//!
//! A [`Table`] holds the header row separately from its data rows so the
//! header can never take part in sorting. Every stored row has exactly
//! [`Table::column_count`] fields: shorter rows are padded with empty
//! strings when the table is built.

use serde::{Deserialize, Serialize};

/// One row of text fields, one per column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    /// Create a row from its fields.
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field text at a zero-based column; empty past the end of the row.
    pub fn field(&self, col: usize) -> &str {
        self.fields.get(col).map(String::as_str).unwrap_or("")
    }

    /// All fields in column order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of fields in this row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether this row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn pad_to(&mut self, columns: usize) {
        if self.fields.len() < columns {
            self.fields.resize(columns, String::new());
        }
    }
}

impl From<Vec<String>> for Row {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

impl From<Vec<&str>> for Row {
    fn from(fields: Vec<&str>) -> Self {
        Self::new(fields.into_iter().map(str::to_string).collect())
    }
}

/// A header row plus data rows, rectangular after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    header: Row,
    rows: Vec<Row>,
    columns: usize,
}

impl Table {
    /// Build a table, padding every row to the widest row observed.
    pub fn new(header: Row, rows: Vec<Row>) -> Self {
        let columns = rows
            .iter()
            .map(Row::len)
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0);

        let mut header = header;
        header.pad_to(columns);
        let mut rows = rows;
        for row in &mut rows {
            row.pad_to(columns);
        }

        Self {
            header,
            rows,
            columns,
        }
    }

    /// The header row (column names).
    pub fn header(&self) -> &Row {
        &self.header
    }

    /// Name of a zero-based column.
    pub fn column_name(&self, col: usize) -> &str {
        self.header.field(col)
    }

    /// Data rows in their current order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    /// Data row by 1-based row number (row 0 is the header).
    pub fn row(&self, number: usize) -> Option<&Row> {
        match number {
            0 => Some(&self.header),
            n => self.rows.get(n - 1),
        }
    }

    /// Number of data rows, excluding the header.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest field count across all rows, header included.
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_field_past_end_is_empty() {
        let row = Row::from(vec!["a", "b"]);
        assert_eq!(row.field(0), "a");
        assert_eq!(row.field(1), "b");
        assert_eq!(row.field(5), "");
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_table_pads_short_rows() {
        let table = Table::new(
            Row::from(vec!["id", "name"]),
            vec![Row::from(vec!["1"]), Row::from(vec!["2", "b", "extra"])],
        );
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.header().len(), 3);
        assert_eq!(table.column_name(2), "");
        assert!(table.rows().iter().all(|r| r.len() == 3));
        assert_eq!(table.rows()[0].fields(), &["1", "", ""]);
    }

    #[test]
    fn test_row_numbering() {
        let table = Table::new(
            Row::from(vec!["h"]),
            vec![Row::from(vec!["x"]), Row::from(vec!["y"])],
        );
        assert_eq!(table.row(0).map(|r| r.field(0)), Some("h"));
        assert_eq!(table.row(1).map(|r| r.field(0)), Some("x"));
        assert_eq!(table.row(2).map(|r| r.field(0)), Some("y"));
        assert!(table.row(3).is_none());
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new(Row::from(vec!["a", "b"]), Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 2);
    }
}
