//! apidiff command-line interface.
//!
//! Parses two documents, publishes the raw difference set, writes the
//! per-API CSV report and prints a summary.

use anyhow::{Context, Result};
use apidiff::config::DEFAULT_OUTPUT_FILE;
use apidiff::{
    compare, format_summary, parse_file, write_csv_file, DifferenceSink, FileSink, NoopSink,
    StdoutSink,
};
use clap::Parser;
use env_logger::Env;
use log::info;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

/// apidiff - structural diff for API build documents
///
/// Compares two YAML, JSON or TOML documents and writes one CSV row per
/// missing key, new key or changed value, labelled with the API it belongs to.
#[derive(Parser)]
#[command(name = "apidiff")]
#[command(version)]
#[command(about = "Structural diff for API build documents", long_about = None)]
struct Cli {
    /// Original document
    #[arg(value_name = "LEFT")]
    left: PathBuf,

    /// Updated document
    #[arg(value_name = "RIGHT")]
    right: PathBuf,

    /// CSV report destination
    #[arg(short, long, value_name = "CSV", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Also write the raw difference set as JSON ("-" for stdout)
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Verbose output (log parsing and file writes)
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (no summary on stdout)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn sink(&self) -> Box<dyn DifferenceSink> {
        match &self.json {
            Some(path) if path.as_os_str() == "-" => Box::new(StdoutSink),
            Some(path) => Box::new(FileSink::new(path)),
            None => Box::new(NoopSink),
        }
    }

    fn json_on_stdout(&self) -> bool {
        self.json.as_ref().is_some_and(|p| p.as_os_str() == "-")
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    info!("Comparing {} and {}", cli.left.display(), cli.right.display());

    let left = parse_file(&cli.left)
        .with_context(|| format!("Failed to parse left document: {}", cli.left.display()))?;
    let right = parse_file(&cli.right)
        .with_context(|| format!("Failed to parse right document: {}", cli.right.display()))?;

    let mut sink = cli.sink();
    let (differences, rows) =
        compare(&left, &right, sink.as_mut()).context("Failed to compare documents")?;

    write_csv_file(&rows, &cli.output)
        .with_context(|| format!("Failed to write report: {}", cli.output.display()))?;

    if !cli.quiet && !cli.json_on_stdout() {
        let color = !cli.no_color && std::io::stdout().is_terminal();
        println!("{}", format_summary(&rows, &differences.stats, color));
    }

    if differences.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_file() {
        let cli = Cli::parse_from(["apidiff", "a.yaml", "b.yaml"]);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert!(cli.json.is_none());
        assert!(!cli.json_on_stdout());
    }

    #[test]
    fn test_json_dash_means_stdout() {
        let cli = Cli::parse_from(["apidiff", "a.yaml", "b.yaml", "--json", "-"]);
        assert!(cli.json_on_stdout());
    }
}
