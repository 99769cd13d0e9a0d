//! Tab-separated input parsing.
//!
//! Lines end in LF or CR-LF; fields are separated by tabs. The first line is
//! the header. Fields longer than [`LoadOptions::max_field_len`] are cut
//! short without error.

use std::io::BufRead;

use tracing::{debug, trace};

use crate::error::TsvReportError;
use crate::options::{LoadOptions, RaggedPolicy};
use crate::Result;

use super::table::{Row, Table};

const FIELD_SEPARATOR: char = '\t';

/// Read a whole tab-separated stream into a [`Table`].
///
/// # Example
///
/// ```rust
/// use tsvreportlib::{load_table, LoadOptions};
///
/// let input = "id\tname\r\n1\tapple\r\n2\tpear\r\n";
/// let table = load_table(input.as_bytes(), &LoadOptions::default()).unwrap();
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.column_count(), 2);
/// assert_eq!(table.rows()[1].field(1), "pear");
/// ```
pub fn load_table<R: BufRead>(mut reader: R, options: &LoadOptions) -> Result<Table> {
    let mut buf = Vec::new();
    let header = match next_line(&mut reader, &mut buf)? {
        Some(text) => parse_line(&text, 1, options)?,
        None => return Err(TsvReportError::EmptyInput),
    };

    let mut rows = Vec::new();
    let mut line_no = 1;
    while let Some(text) = next_line(&mut reader, &mut buf)? {
        line_no += 1;
        let row = parse_line(&text, line_no, options)?;
        check_shape(&row, &header, line_no, options.ragged)?;
        if let Some(limit) = options.max_rows {
            if rows.len() >= limit {
                return Err(TsvReportError::TooManyRows { limit });
            }
        }
        rows.push(row);
    }

    let table = Table::new(header, rows);
    debug!(
        lines = line_no,
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded table"
    );
    Ok(table)
}

/// Parse tab-separated text held in memory.
pub fn parse_table(input: &str, options: &LoadOptions) -> Result<Table> {
    load_table(input.as_bytes(), options)
}

/// Next newline-terminated line without its line ending.
///
/// Returns `None` at end of input. A final fragment with no line feed is
/// not a line and is dropped.
fn next_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.pop() != Some(b'\n') {
        debug!(bytes = buf.len() + 1, "dropped unterminated final line");
        return Ok(None);
    }
    strip_carriage_returns(buf);
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

fn strip_carriage_returns(buf: &mut Vec<u8>) {
    while buf.last() == Some(&b'\r') {
        buf.pop();
    }
}

fn parse_line(line: &str, line_no: usize, options: &LoadOptions) -> Result<Row> {
    let mut fields = Vec::new();
    for raw in line.split(FIELD_SEPARATOR) {
        if let Some(limit) = options.max_columns {
            if fields.len() >= limit {
                return Err(TsvReportError::TooManyColumns {
                    line: line_no,
                    limit,
                });
            }
        }
        fields.push(truncate_field(raw, options.max_field_len, line_no));
    }
    Ok(Row::new(fields))
}

fn truncate_field(raw: &str, max_len: usize, line_no: usize) -> String {
    match raw.char_indices().nth(max_len) {
        Some((cut, _)) => {
            trace!(line = line_no, max_len, "truncated field");
            raw[..cut].to_string()
        }
        None => raw.to_string(),
    }
}

fn check_shape(row: &Row, header: &Row, line_no: usize, policy: RaggedPolicy) -> Result<()> {
    if row.len() == header.len() {
        return Ok(());
    }
    match policy {
        RaggedPolicy::Reject => Err(TsvReportError::RaggedRow {
            line: line_no,
            found: row.len(),
            expected: header.len(),
        }),
        RaggedPolicy::Pad => {
            debug!(
                line = line_no,
                found = row.len(),
                expected = header.len(),
                "ragged row"
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(input: &str) -> Table {
        parse_table(input, &LoadOptions::default()).unwrap()
    }

    #[test]
    fn test_counts_rows_and_columns() {
        let table = load("id\tname\n1\ta\n2\ta\n3\tb\n");
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.header().fields(), &["id", "name"]);
        assert_eq!(table.rows()[2].fields(), &["3", "b"]);
    }

    #[test]
    fn test_crlf_matches_lf() {
        let unix = load("a\tb\n1\t2\nx\ty\n");
        let pc = load("a\tb\r\n1\t2\r\nx\ty\r\n");
        assert_eq!(unix, pc);
    }

    #[test]
    fn test_trailing_newline_is_not_a_row() {
        assert_eq!(load("h\nv\n").row_count(), 1);
    }

    #[test]
    fn test_unterminated_final_line_dropped() {
        let table = load("id\tname\n1\ta\n2\tb");
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows()[0].fields(), &["1", "a"]);
        assert_eq!(load("h\nv").row_count(), 0);

        let err = parse_table("id\tname", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, TsvReportError::EmptyInput));
    }

    #[test]
    fn test_carriage_returns_stripped_at_line_end() {
        let table = load("k\nv\r\nw\r\r\nv\r");
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0].field(0), "v");
        assert_eq!(table.rows()[1].field(0), "w");
        assert_eq!(load("k\r\nv\n").header().field(0), "k");
    }

    #[test]
    fn test_blank_line_is_a_row() {
        let table = load("a\tb\n\n1\t2\n");
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0].fields(), &["", ""]);
    }

    #[test]
    fn test_long_field_truncated() {
        let long = "x".repeat(80);
        let table = load(&format!("col\n{long}\n"));
        assert_eq!(table.rows()[0].field(0).len(), 50);

        let opts = LoadOptions::default().max_field_len(3);
        let table = parse_table("name\nabcdef\n", &opts).unwrap();
        assert_eq!(table.rows()[0].field(0), "abc");
    }

    #[test]
    fn test_truncation_keeps_char_boundaries() {
        let opts = LoadOptions::default().max_field_len(2);
        let table = parse_table("name\nédé\n", &opts).unwrap();
        assert_eq!(table.rows()[0].field(0), "éd");
    }

    #[test]
    fn test_empty_input_is_error() {
        let err = parse_table("", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, TsvReportError::EmptyInput));
    }

    #[test]
    fn test_header_only() {
        let table = load("a\tb\tc\n");
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_ragged_rows_padded() {
        let table = load("a\tb\tc\n1\n1\t2\t3\t4\n");
        assert_eq!(table.column_count(), 4);
        assert_eq!(table.rows()[0].fields(), &["1", "", "", ""]);
        assert_eq!(table.column_name(3), "");
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let opts = LoadOptions::default().ragged(RaggedPolicy::Reject);
        let err = parse_table("a\tb\n1\t2\n3\n", &opts).unwrap_err();
        match err {
            TsvReportError::RaggedRow {
                line,
                found,
                expected,
            } => {
                assert_eq!(line, 3);
                assert_eq!(found, 1);
                assert_eq!(expected, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_row_limit() {
        let opts = LoadOptions::default().max_rows(Some(2));
        assert!(parse_table("h\n1\n2\n", &opts).is_ok());
        let err = parse_table("h\n1\n2\n3\n", &opts).unwrap_err();
        assert!(matches!(err, TsvReportError::TooManyRows { limit: 2 }));
    }

    #[test]
    fn test_column_limit() {
        let opts = LoadOptions::default().max_columns(Some(2));
        let err = parse_table("a\tb\tc\n", &opts).unwrap_err();
        assert!(matches!(
            err,
            TsvReportError::TooManyColumns { line: 1, limit: 2 }
        ));
    }

    #[test]
    fn test_unlimited_accepts_large_input() {
        let mut input = String::from("n\n");
        for i in 0..1500 {
            input.push_str(&format!("{i}\n"));
        }
        assert!(parse_table(&input, &LoadOptions::default()).is_err());
        let table = parse_table(&input, &LoadOptions::unlimited()).unwrap();
        assert_eq!(table.row_count(), 1500);
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let input: &[u8] = b"name\n\xff\xfeab\n";
        let table = load_table(input, &LoadOptions::default()).unwrap();
        assert_eq!(table.row_count(), 1);
        assert!(table.rows()[0].field(0).ends_with("ab"));
    }
}
