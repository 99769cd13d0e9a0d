//! # tsvreport
//!
//! A CLI that reads tab-separated data from stdin, sorts it by key columns,
//! and prints a hierarchical report of group counts.
//!
//! ## Overview
//!
//! tsvreport is built on top of tsvreportlib. It prints three stages:
//!
//! 1. Ingestion summary: row and column counts, and the last row read
//! 2. Sort order: key columns in precedence order, then the first, middle,
//!    and last rows after sorting
//! 3. An indented table grouping rows by key values, with a count per group
//!
//! ## Usage
//!
//! ```bash
//! # Stage 1 only
//! tsvreport < data.tsv
//!
//! # Sort by column 3, then column 1, and report groups
//! tsvreport 3 1 < data.tsv
//!
//! # Same report as JSON
//! tsvreport 3 1 --output json < data.tsv
//!
//! # Large or ragged input
//! tsvreport 2 --no-limits --ragged reject < data.tsv
//! ```
//!
//! Logs go to stderr; `-v` raises verbosity, `-q` keeps only errors.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tsvreportlib::options::DEFAULT_INDENT_WIDTH;
use tsvreportlib::{
    load_table, render_analysis, render_ingest, LoadOptions, RaggedPolicy, Report,
    ReportOptions, SortKeys,
};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tsvreport")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Sort tab-separated data from stdin by key columns and report grouped counts")
        .arg(
            Arg::new("keys")
                .value_name("KEY")
                .num_args(0..)
                .action(ArgAction::Append)
                .allow_negative_numbers(true)
                .help("1-based key columns, in sort precedence order"),
        )
        .arg(
            Arg::new("max-rows")
                .long("max-rows")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Maximum number of data rows [default: 999]"),
        )
        .arg(
            Arg::new("max-columns")
                .long("max-columns")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Maximum number of columns [default: 30]"),
        )
        .arg(
            Arg::new("no-limits")
                .long("no-limits")
                .action(ArgAction::SetTrue)
                .help("Remove the row and column limits"),
        )
        .arg(
            Arg::new("max-field-len")
                .long("max-field-len")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("50")
                .help("Truncate fields longer than this many characters"),
        )
        .arg(
            Arg::new("ragged")
                .long("ragged")
                .value_parser(["pad", "reject"])
                .default_value("pad")
                .help("Rows with a different field count than the header: pad or reject"),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("4")
                .help("Spaces of indentation per key level"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log more to stderr (repeat for more detail)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Only log errors"),
        )
}

/// Install the stderr log subscriber. Stdout carries only the report.
fn init_logging(matches: &ArgMatches) {
    let level = if matches.get_flag("quiet") {
        "error"
    } else {
        match matches.get_count("verbose") {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::new(format!("tsvreport={level},tsvreportlib={level}"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Build load options from matches
fn build_load_options(matches: &ArgMatches) -> Result<LoadOptions, anyhow::Error> {
    let mut options = if matches.get_flag("no-limits") {
        LoadOptions::unlimited()
    } else {
        LoadOptions::new()
    };

    if let Some(&limit) = matches.get_one::<usize>("max-rows") {
        options = options.max_rows(Some(limit));
    }
    if let Some(&limit) = matches.get_one::<usize>("max-columns") {
        options = options.max_columns(Some(limit));
    }
    if let Some(&len) = matches.get_one::<usize>("max-field-len") {
        options = options.max_field_len(len);
    }
    if let Some(policy) = matches.get_one::<String>("ragged") {
        let policy: RaggedPolicy = policy.parse().map_err(anyhow::Error::msg)?;
        options = options.ragged(policy);
    }

    Ok(options)
}

/// Build report options from matches
fn build_report_options(matches: &ArgMatches) -> ReportOptions {
    let indent = matches
        .get_one::<usize>("indent")
        .copied()
        .unwrap_or(DEFAULT_INDENT_WIDTH);
    ReportOptions::new().indent_width(indent)
}

/// Extract raw key arguments from matches
fn extract_keys(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("keys")
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let load_options = build_load_options(matches)?;
    let report_options = build_report_options(matches);
    let json = matches
        .get_one::<String>("output")
        .is_some_and(|s| s == "json");
    debug!(?load_options, ?report_options, json, "options");

    let mut table =
        load_table(io::stdin().lock(), &load_options).context("failed to load table from stdin")?;
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded input"
    );

    let mut report = Report::ingest_only(&table);
    let mut out = io::stdout().lock();
    if !json {
        out.write_all(render_ingest(&report.ingest).as_bytes())?;
        out.flush()?;
    }

    let keys = SortKeys::parse(extract_keys(matches))?;
    if keys.is_empty() {
        info!("no sort keys given, stopping after stage 1");
    } else {
        report.analyze(&mut table, &keys, &report_options)?;
        if let Some(hierarchy) = &report.hierarchy {
            info!(
                groups = hierarchy.groups.len(),
                rows = hierarchy.total_count(),
                "grouped rows"
            );
        }
    }

    if json {
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        out.write_all(render_analysis(&report).as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(&matches);

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
