//! Output: the report model and its renderings.
//!
//! This module handles the final stage of the pipeline:
//!
//! - **report**: [`Report`], the stage summaries and grouped hierarchy as data
//! - **text**: fixed-layout plain text for each stage
//!
//! JSON output is the serde serialization of [`Report`].

pub mod report;
pub mod text;

pub use report::{
    last_key_width, sample_row_numbers, ColumnValue, Hierarchy, IngestSummary, KeyColumn,
    OrderingSummary, Report, RowDump, COUNT_LABEL_WIDTH,
};
pub use text::{
    render_analysis, render_hierarchy, render_ingest, render_ordering, render_report,
    CLOSING_LINE,
};
