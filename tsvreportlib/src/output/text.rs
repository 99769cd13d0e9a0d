//! Plain-text rendering of a [`Report`].
//!
//! Column alignment rules:
//! - row dumps: column number right-aligned in 4, name left-aligned in 11
//! - stage 3: each key level indented by `indent_width` spaces, the last
//!   key padded to the widest last-key value, counts right-aligned in 5

use std::fmt::Write;

use super::report::{Hierarchy, IngestSummary, OrderingSummary, Report, RowDump};

/// Final line printed after a complete report.
pub const CLOSING_LINE: &str = "ta daa!";

const COUNT_LABEL: &str = "Count";
const COUNT_WIDTH: usize = 5;

/// Render every stage present in the report.
pub fn render_report(report: &Report) -> String {
    let mut out = render_ingest(&report.ingest);
    out.push_str(&render_analysis(report));
    out
}

/// Render stages 2 and 3 plus the closing line; empty for a stage 1 only report.
pub fn render_analysis(report: &Report) -> String {
    let mut out = String::new();
    if let Some(ordering) = &report.ordering {
        out.push_str(&render_ordering(ordering));
    }
    if let Some(hierarchy) = &report.hierarchy {
        out.push_str(&render_hierarchy(hierarchy));
        out.push_str(CLOSING_LINE);
        out.push('\n');
    }
    out
}

/// Stage 1: row and column counts, then the last row.
pub fn render_ingest(summary: &IngestSummary) -> String {
    let mut out = String::from("Stage 1\n");
    let _ = writeln!(
        out,
        "input tsv data has {} rows and {} columns",
        summary.rows, summary.columns
    );
    if let Some(row) = &summary.last_row {
        push_row_dump(&mut out, row);
    }
    out
}

/// Stage 2: key order, then the first, middle, and last rows.
pub fn render_ordering(summary: &OrderingSummary) -> String {
    let mut out = String::from("\nStage 2\n");
    let last = summary.keys.len().saturating_sub(1);
    for (i, key) in summary.keys.iter().enumerate() {
        let lead = if i == 0 { "sorting by" } else { "   then by" };
        let sep = if i < last { "," } else { "" };
        let _ = writeln!(out, "{} \"{}\"{}", lead, key.name, sep);
    }
    for row in &summary.samples {
        push_row_dump(&mut out, row);
    }
    out
}

/// Stage 3: ruled header block and one entry per group.
pub fn render_hierarchy(hierarchy: &Hierarchy) -> String {
    let rule = "-".repeat(hierarchy.rule_width());
    let mut out = String::from("\nStage 3\n");
    let _ = writeln!(out, "{rule}");

    let header = hierarchy.key_names.iter().map(String::as_str).enumerate();
    push_levels(&mut out, header, hierarchy);
    let _ = writeln!(out, "{COUNT_LABEL}");
    let _ = writeln!(out, "{rule}");

    for group in &hierarchy.groups {
        push_levels(&mut out, group.levels(), hierarchy);
        let _ = writeln!(out, "{:>width$}", group.count, width = COUNT_WIDTH);
    }
    let _ = writeln!(out, "{rule}");
    out
}

fn push_row_dump(out: &mut String, row: &RowDump) {
    let _ = writeln!(out, "row {} is:", row.number);
    for col in &row.columns {
        let _ = writeln!(out, "{:>4}: {:<11}{}", col.column, col.name, col.value);
    }
}

/// Write key values by level. Inner levels end their line; the last key
/// is padded and followed by a space, leaving the line open for the count.
fn push_levels<'a>(
    out: &mut String,
    levels: impl Iterator<Item = (usize, &'a str)>,
    hierarchy: &Hierarchy,
) {
    let last = hierarchy.depth().saturating_sub(1);
    for (level, value) in levels {
        out.push_str(&" ".repeat(level * hierarchy.indent_width));
        if level < last {
            out.push_str(value);
            out.push('\n');
        } else {
            let _ = write!(out, "{:<width$} ", value, width = hierarchy.last_width);
        }
    }
}
