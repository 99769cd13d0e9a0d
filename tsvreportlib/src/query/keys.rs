//! Sort key lists.
//!
//! Users name key columns 1-based, in precedence order; [`SortKeys`] holds
//! them zero-based. The first key is the primary sort key and the outermost
//! grouping level.

use serde::{Deserialize, Serialize};

use crate::error::TsvReportError;
use crate::Result;

/// Ordered list of zero-based key columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortKeys(Vec<usize>);

impl SortKeys {
    /// Create from zero-based column indices.
    pub fn new(columns: Vec<usize>) -> Self {
        Self(columns)
    }

    /// Parse 1-based column arguments, in precedence order.
    ///
    /// Each argument must be a positive integer. The first bad argument is
    /// reported by name.
    ///
    /// ```rust
    /// use tsvreportlib::SortKeys;
    ///
    /// let keys = SortKeys::parse(["3", "1"]).unwrap();
    /// assert_eq!(keys.columns(), &[2, 0]);
    /// assert!(SortKeys::parse(["two"]).is_err());
    /// ```
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        args.into_iter()
            .map(|arg| parse_key(arg.as_ref()))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Check every key against the table's column count.
    pub fn validate(&self, column_count: usize) -> Result<()> {
        match self.0.iter().find(|&&col| col >= column_count) {
            Some(&col) => Err(TsvReportError::SortKeyOutOfRange {
                key: col + 1,
                columns: column_count,
            }),
            None => Ok(()),
        }
    }

    /// Zero-based key columns in precedence order.
    pub fn columns(&self) -> &[usize] {
        &self.0
    }

    /// The innermost (last) key column.
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no keys were given.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn parse_key(arg: &str) -> Result<usize> {
    let invalid = |reason: &str| TsvReportError::InvalidSortKey {
        arg: arg.to_string(),
        reason: reason.to_string(),
    };
    let column: usize = arg
        .parse()
        .map_err(|_| invalid("expected a positive column number"))?;
    if column == 0 {
        return Err(invalid("column numbers start at 1"));
    }
    Ok(column - 1)
}
