//! # tsvreportlib
//!
//! Sort tab-separated tables by an ordered list of key columns and summarize
//! them as an indented hierarchy of group counts.
//!
//! ## Overview
//!
//! The library is a small pipeline over an in-memory [`Table`]:
//!
//! - **Load**: [`load_table`] reads tab-separated text (LF or CR-LF), with
//!   configurable field, row, and column limits ([`LoadOptions`])
//! - **Compare**: [`compare_rows`] orders rows key by key, byte-wise
//! - **Sort**: [`sort_table`] reorders data rows in place, stably
//! - **Group**: [`group_rows`] collapses runs of rows equal on every key into
//!   [`Group`] records carrying the depth at which each group starts
//! - **Report**: [`Report`] gathers the three stages as data; [`render_report`]
//!   turns them into the fixed-layout text report
//!
//! Nothing here writes to stdout or exits the process; that is the CLI's job.
//!
//! ## Example
//!
//! ```rust
//! use tsvreportlib::{parse_table, render_report, LoadOptions, Report, ReportOptions, SortKeys};
//!
//! let input = "team\tname\nred\tann\nblue\tbob\nred\tcat\n";
//! let mut table = parse_table(input, &LoadOptions::default()).unwrap();
//! let keys = SortKeys::parse(["1"]).unwrap();
//!
//! let report = Report::build(&mut table, &keys, &ReportOptions::default()).unwrap();
//! let text = render_report(&report);
//!
//! assert!(text.contains("blue     1\n"));
//! assert!(text.contains("red      2\n"));
//! assert!(text.ends_with("ta daa!\n"));
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod query;

pub use data::{load_table, parse_table, Row, Table};
pub use error::TsvReportError;
pub use options::{LoadOptions, RaggedPolicy, ReportOptions};
pub use output::{
    render_analysis, render_hierarchy, render_ingest, render_ordering, render_report, Hierarchy,
    IngestSummary, OrderingSummary, Report, RowDump, CLOSING_LINE,
};
pub use query::{
    compare_rows, group_rows, group_table, mismatch_depth, sort_rows, sort_table, sorts_before,
    Group, SortKeys,
};

/// Result type for tsvreportlib operations
pub type Result<T> = std::result::Result<T, TsvReportError>;
