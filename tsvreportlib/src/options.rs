//! Input options for loading and reporting tables.
//!
//! This module contains all configuration types that control how input is
//! parsed and how the hierarchical report is laid out.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default maximum field length, in characters.
pub const DEFAULT_MAX_FIELD_LEN: usize = 50;
/// Default maximum number of data rows (1000 input lines including the header).
pub const DEFAULT_MAX_ROWS: usize = 999;
/// Default maximum number of columns on any line.
pub const DEFAULT_MAX_COLUMNS: usize = 30;
/// Default indentation per hierarchy level in stage 3.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// What to do with a line whose field count differs from the header's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaggedPolicy {
    /// Fill missing trailing fields with empty strings (default)
    #[default]
    Pad,
    /// Fail with a `RaggedRow` error
    Reject,
}

impl FromStr for RaggedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pad" => Ok(RaggedPolicy::Pad),
            "reject" | "strict" => Ok(RaggedPolicy::Reject),
            _ => Err(format!(
                "Unknown ragged row policy: {}. Use pad or reject.",
                s
            )),
        }
    }
}

/// Options for loading a table from tab-separated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Fields longer than this many characters are truncated
    pub max_field_len: usize,
    /// Maximum number of data rows (None = unlimited)
    pub max_rows: Option<usize>,
    /// Maximum number of columns on any line (None = unlimited)
    pub max_columns: Option<usize>,
    /// Handling of lines with a different field count than the header
    pub ragged: RaggedPolicy,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_field_len: DEFAULT_MAX_FIELD_LEN,
            max_rows: Some(DEFAULT_MAX_ROWS),
            max_columns: Some(DEFAULT_MAX_COLUMNS),
            ragged: RaggedPolicy::default(),
        }
    }
}

impl LoadOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the row and column limits.
    pub fn unlimited() -> Self {
        Self {
            max_rows: None,
            max_columns: None,
            ..Self::default()
        }
    }

    /// Set the maximum field length.
    pub fn max_field_len(mut self, len: usize) -> Self {
        self.max_field_len = len;
        self
    }

    /// Set the maximum number of data rows.
    pub fn max_rows(mut self, limit: Option<usize>) -> Self {
        self.max_rows = limit;
        self
    }

    /// Set the maximum number of columns.
    pub fn max_columns(mut self, limit: Option<usize>) -> Self {
        self.max_columns = limit;
        self
    }

    /// Set the ragged row policy.
    pub fn ragged(mut self, policy: RaggedPolicy) -> Self {
        self.ragged = policy;
        self
    }
}

/// Options for the hierarchical report layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Spaces of indentation per hierarchy level
    pub indent_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl ReportOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation per hierarchy level.
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_options_defaults() {
        let opts = LoadOptions::default();
        assert_eq!(opts.max_field_len, 50);
        assert_eq!(opts.max_rows, Some(999));
        assert_eq!(opts.max_columns, Some(30));
        assert_eq!(opts.ragged, RaggedPolicy::Pad);
    }

    #[test]
    fn test_load_options_builder() {
        let opts = LoadOptions::new()
            .max_field_len(10)
            .max_rows(None)
            .ragged(RaggedPolicy::Reject);
        assert_eq!(opts.max_field_len, 10);
        assert_eq!(opts.max_rows, None);
        assert_eq!(opts.max_columns, Some(30));
        assert_eq!(opts.ragged, RaggedPolicy::Reject);
    }

    #[test]
    fn test_unlimited() {
        let opts = LoadOptions::unlimited();
        assert!(opts.max_rows.is_none());
        assert!(opts.max_columns.is_none());
        assert_eq!(opts.max_field_len, DEFAULT_MAX_FIELD_LEN);
    }

    #[test]
    fn test_ragged_policy_from_str() {
        assert_eq!("pad".parse::<RaggedPolicy>().unwrap(), RaggedPolicy::Pad);
        assert_eq!(
            "REJECT".parse::<RaggedPolicy>().unwrap(),
            RaggedPolicy::Reject
        );
        assert_eq!(
            "strict".parse::<RaggedPolicy>().unwrap(),
            RaggedPolicy::Reject
        );
        assert!("truncate".parse::<RaggedPolicy>().is_err());
    }

    #[test]
    fn test_report_options() {
        assert_eq!(ReportOptions::default().indent_width, 4);
        assert_eq!(ReportOptions::new().indent_width(2).indent_width, 2);
    }
}
