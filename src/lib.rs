//! apidiff - structural diff for API build documents.
//!
//! Compares two mapping-rooted documents (YAML, JSON or TOML), lists every
//! missing key, new key and changed value, and labels each difference with the
//! API it belongs to based on where it sits in the document.
//!
//! # Example
//!
//! ```no_run
//! use apidiff::{classify_all, compute_diff, parse_file, write_csv_file};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let left = parse_file(Path::new("build1.yaml"))?;
//! let right = parse_file(Path::new("build2.yaml"))?;
//!
//! let diff = compute_diff(&left, &right)?;
//! let rows = classify_all(&diff, &left)?;
//! write_csv_file(&rows, Path::new("yaml_comparison_results.csv"))?;
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod config;
pub mod diff;
pub mod error;
pub mod output;
pub mod parser;
pub mod path;
pub mod sink;
pub mod tree;

pub use classify::{classify, classify_all, ReportRow};
pub use diff::{compute_diff, DiffStats, Difference, DifferenceKind, Differences};
pub use error::{ApidiffError, ClassifyError, DiffError, OutputError, ParseError, Side};
pub use output::{format_summary, render_csv, write_csv, write_csv_file};
pub use parser::{parse_content, parse_file, parse_json, parse_toml, parse_yaml, FormatHint};
pub use sink::{DifferenceSink, FileSink, MemorySink, NoopSink, StdoutSink};
pub use tree::Node;

/// Runs the whole comparison on two loaded documents.
///
/// The difference set is published to `sink` before classification, so it is
/// available even when a flow lookup fails afterwards.
pub fn compare(
    left: &Node,
    right: &Node,
    sink: &mut dyn DifferenceSink,
) -> Result<(Differences, Vec<ReportRow>), ApidiffError> {
    let differences = compute_diff(left, right)?;
    log::debug!(
        "Found {} differences ({} missing, {} new, {} changed)",
        differences.len(),
        differences.stats.missing_keys,
        differences.stats.new_keys,
        differences.stats.value_differences
    );
    sink.publish(&differences)?;
    let rows = classify_all(&differences, left)?;
    Ok((differences, rows))
}
