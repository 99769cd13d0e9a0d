//! Report model for the three output stages.
//!
//! The data flow is:
//! 1. Table (loaded, then sorted in place)
//! 2. Report (summaries, width metrics, and group records)
//! 3. Text or JSON (see [`super::text`] and [`Report::to_json`])
//!
//! Nothing in here formats strings for display; that is the renderer's job.

use serde::Serialize;

use crate::data::{Row, Table};
use crate::options::ReportOptions;
use crate::query::{group_table, sort_table, Group, SortKeys};
use crate::Result;

/// Width of the " Count" label that closes every stage 3 line.
pub const COUNT_LABEL_WIDTH: usize = 6;

/// One column of a dumped row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnValue {
    /// 1-based column number
    pub column: usize,
    /// Column name from the header row
    pub name: String,
    /// Field text in this row
    pub value: String,
}

/// A data row shown with its column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowDump {
    /// 1-based data row number
    pub number: usize,
    /// One entry per column
    pub columns: Vec<ColumnValue>,
}

impl RowDump {
    /// Dump a data row by 1-based number, if it exists.
    pub fn from_table(table: &Table, number: usize) -> Option<Self> {
        if number == 0 {
            return None;
        }
        let row = table.row(number)?;
        Some(Self {
            number,
            columns: (0..table.column_count())
                .map(|col| ColumnValue {
                    column: col + 1,
                    name: table.column_name(col).to_string(),
                    value: row.field(col).to_string(),
                })
                .collect(),
        })
    }
}

/// Stage 1: what was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    /// Data rows, excluding the header
    pub rows: usize,
    /// Widest field count observed
    pub columns: usize,
    /// The last data row as loaded (None for a header-only table)
    pub last_row: Option<RowDump>,
}

impl IngestSummary {
    pub fn from_table(table: &Table) -> Self {
        Self {
            rows: table.row_count(),
            columns: table.column_count(),
            last_row: RowDump::from_table(table, table.row_count()),
        }
    }
}

/// A sort key column with its header name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyColumn {
    /// 1-based column number
    pub column: usize,
    pub name: String,
}

/// Stage 2: the sort order and sample rows after sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderingSummary {
    /// Key columns in precedence order
    pub keys: Vec<KeyColumn>,
    /// First, middle, and last data rows (empty for a header-only table)
    pub samples: Vec<RowDump>,
}

impl OrderingSummary {
    /// Summarize a table that has already been sorted by `keys`.
    pub fn from_table(table: &Table, keys: &SortKeys) -> Self {
        let keys = keys
            .columns()
            .iter()
            .map(|&col| KeyColumn {
                column: col + 1,
                name: table.column_name(col).to_string(),
            })
            .collect();
        let samples = sample_row_numbers(table.row_count())
            .into_iter()
            .filter_map(|n| RowDump::from_table(table, n))
            .collect();
        Self { keys, samples }
    }
}

/// Row numbers shown in stage 2: first, middle `(n + 1) / 2`, and last.
pub fn sample_row_numbers(rows: usize) -> Vec<usize> {
    if rows == 0 {
        return Vec::new();
    }
    vec![1, (rows + 1) / 2, rows]
}

/// Stage 3: the grouped hierarchy and its layout metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hierarchy {
    /// Spaces of indentation per key level
    pub indent_width: usize,
    /// Header names of the key columns, in precedence order
    pub key_names: Vec<String>,
    /// Longest value (in characters) of the last key column, header included
    pub last_width: usize,
    /// Grouped rows in sorted order
    pub groups: Vec<Group>,
}

impl Hierarchy {
    /// Group a table that has already been sorted by `keys`.
    pub fn from_table(table: &Table, keys: &SortKeys, options: &ReportOptions) -> Self {
        Self {
            indent_width: options.indent_width,
            key_names: keys
                .columns()
                .iter()
                .map(|&col| table.column_name(col).to_string())
                .collect(),
            last_width: last_key_width(table, keys),
            groups: group_table(table, keys),
        }
    }

    /// Number of key levels.
    pub fn depth(&self) -> usize {
        self.key_names.len()
    }

    /// Length of the horizontal rules around the table.
    pub fn rule_width(&self) -> usize {
        self.indent_width * self.depth().saturating_sub(1) + self.last_width + COUNT_LABEL_WIDTH
    }

    /// Total rows across all groups.
    pub fn total_count(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }
}

/// Display width of the widest last-key value, header included.
pub fn last_key_width(table: &Table, keys: &SortKeys) -> usize {
    let Some(col) = keys.last() else {
        return 0;
    };
    std::iter::once(table.header())
        .chain(table.rows())
        .map(|row: &Row| row.field(col).chars().count())
        .max()
        .unwrap_or(0)
}

/// The full report: stage 1 always, stages 2 and 3 only when keys were given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub ingest: IngestSummary,
    pub ordering: Option<OrderingSummary>,
    pub hierarchy: Option<Hierarchy>,
}

impl Report {
    /// A report with stage 1 only.
    pub fn ingest_only(table: &Table) -> Self {
        Self {
            ingest: IngestSummary::from_table(table),
            ordering: None,
            hierarchy: None,
        }
    }

    /// Build every stage, sorting `table` in place by `keys`.
    ///
    /// The ingest summary is taken before sorting. Empty `keys` yield a
    /// stage 1 only report and leave the table untouched.
    ///
    /// ```rust
    /// use tsvreportlib::{parse_table, LoadOptions, Report, ReportOptions, SortKeys};
    ///
    /// let mut table = parse_table("id\tname\n1\ta\n2\ta\n3\tb\n", &LoadOptions::default()).unwrap();
    /// let keys = SortKeys::parse(["2"]).unwrap();
    /// let report = Report::build(&mut table, &keys, &ReportOptions::default()).unwrap();
    ///
    /// let groups = &report.hierarchy.unwrap().groups;
    /// assert_eq!(groups.len(), 2);
    /// assert_eq!((groups[0].values[0].as_str(), groups[0].count), ("a", 2));
    /// assert_eq!((groups[1].values[0].as_str(), groups[1].count), ("b", 1));
    /// ```
    pub fn build(table: &mut Table, keys: &SortKeys, options: &ReportOptions) -> Result<Self> {
        let mut report = Self::ingest_only(table);
        if keys.is_empty() {
            return Ok(report);
        }
        report.analyze(table, keys, options)?;
        Ok(report)
    }

    /// Validate keys, sort, and fill in stages 2 and 3.
    pub fn analyze(
        &mut self,
        table: &mut Table,
        keys: &SortKeys,
        options: &ReportOptions,
    ) -> Result<()> {
        keys.validate(table.column_count())?;
        sort_table(table, keys);
        self.ordering = Some(OrderingSummary::from_table(table, keys));
        self.hierarchy = Some(Hierarchy::from_table(table, keys, options));
        Ok(())
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
