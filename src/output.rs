//! Report output: the CSV file and the terminal summary.
//!
//! # Examples
//!
//! ```
//! use apidiff::{classify_all, compute_diff, parse_yaml, render_csv};
//!
//! let left = parse_yaml("paths:\n  getUser:\n    summary: Fetch").unwrap();
//! let right = parse_yaml("paths:\n  getUser:\n    summary: Fetch a user").unwrap();
//! let diff = compute_diff(&left, &right).unwrap();
//! let rows = classify_all(&diff, &left).unwrap();
//!
//! let csv = render_csv(&rows);
//! assert!(csv.starts_with("TYPE,API,SECTION,PATH,OLD VALUE,NEW VALUE,REMARKS\n"));
//! assert!(csv.contains("Value Difference,getUser,paths,paths.getUser.summary,Fetch,Fetch a user,"));
//! ```

use crate::classify::ReportRow;
use crate::config::{DEFAULT_PREVIEW_LENGTH, REPORT_HEADERS};
use crate::diff::{DiffStats, DifferenceKind};
use crate::error::OutputError;
use colored::*;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders the header and one line per row.
pub fn render_csv(rows: &[ReportRow]) -> String {
    let mut output = csv_line(REPORT_HEADERS.iter().copied());
    for row in rows {
        output.push_str(&csv_line(row.cells().into_iter()));
    }
    output
}

/// Writes the CSV report to `writer`.
pub fn write_csv<W: Write>(rows: &[ReportRow], mut writer: W) -> std::io::Result<()> {
    writer.write_all(render_csv(rows).as_bytes())?;
    writer.flush()
}

/// Writes the CSV report to a file, replacing any existing content.
pub fn write_csv_file(rows: &[ReportRow], path: &Path) -> Result<(), OutputError> {
    let target = path.to_string_lossy().to_string();
    let file = File::create(path).map_err(|e| OutputError::io(&target, e))?;
    write_csv(rows, BufWriter::new(file)).map_err(|e| OutputError::io(&target, e))?;
    info!("CSV report with {} rows written to {}", rows.len(), target);
    Ok(())
}

fn csv_line<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = cells.map(escape_cell).collect::<Vec<_>>().join(",");
    line.push('\n');
    line
}

/// Quotes a cell containing a comma, quote or line break, doubling inner quotes.
fn escape_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Formats the report rows for the terminal.
///
/// `color` switches ANSI colors on or off.
pub fn format_summary(rows: &[ReportRow], stats: &DiffStats, color: bool) -> String {
    if rows.is_empty() {
        return paint("No differences found.".to_string(), color, |s| s.dimmed());
    }

    let mut output = String::new();
    for row in rows {
        output.push_str(&format_row(row, color));
        output.push('\n');
    }
    output.push('\n');
    output.push_str(&format_stats(stats));
    output
}

fn format_row(row: &ReportRow, color: bool) -> String {
    let location = if row.api.is_empty() {
        format!("[{}]", row.section)
    } else {
        format!("[{} / {}]", row.section, row.api)
    };

    match row.kind {
        DifferenceKind::MissingKey => format!(
            "{} {} {}",
            paint("-".to_string(), color, |s| s.bright_red()),
            location,
            paint(row.path.clone(), color, |s| s.red())
        ),
        DifferenceKind::NewKey => format!(
            "{} {} {}",
            paint("+".to_string(), color, |s| s.bright_green()),
            location,
            paint(row.path.clone(), color, |s| s.green())
        ),
        DifferenceKind::ValueDifference => format!(
            "{} {} {}: {} → {}",
            paint("•".to_string(), color, |s| s.bright_yellow()),
            location,
            paint(row.path.clone(), color, |s| s.yellow()),
            truncate(&row.old_value),
            truncate(&row.new_value)
        ),
    }
}

fn paint(text: String, color: bool, style: impl Fn(&str) -> ColoredString) -> String {
    if color {
        style(&text).to_string()
    } else {
        text
    }
}

fn truncate(value: &str) -> String {
    if value.chars().count() > DEFAULT_PREVIEW_LENGTH {
        let kept: String = value.chars().take(DEFAULT_PREVIEW_LENGTH - 3).collect();
        format!("{}...", kept)
    } else {
        value.to_string()
    }
}

fn format_stats(stats: &DiffStats) -> String {
    if stats.is_empty() {
        return "Summary: No differences".to_string();
    }

    let mut parts = Vec::new();
    if stats.missing_keys > 0 {
        parts.push(format!("{} missing", stats.missing_keys));
    }
    if stats.new_keys > 0 {
        parts.push(format!("{} new", stats.new_keys));
    }
    if stats.value_differences > 0 {
        parts.push(format!("{} changed", stats.value_differences));
    }

    format!("Summary: {}", parts.join(", "))
}
