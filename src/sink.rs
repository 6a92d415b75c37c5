//! Destinations for the machine-readable difference set.
//!
//! The full [`Differences`] are published as pretty JSON with the keys
//! `missing_keys`, `new_keys` and `value_differences`. Where that JSON goes is
//! up to the caller: stdout, a file, or memory in tests.

use crate::diff::Differences;
use crate::error::OutputError;
use log::info;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub trait DifferenceSink {
    fn publish(&mut self, differences: &Differences) -> Result<(), OutputError>;
}

/// Renders the difference set as pretty JSON.
pub fn differences_to_json(differences: &Differences) -> Result<String, OutputError> {
    serde_json::to_string_pretty(differences)
        .map_err(|e| OutputError::JsonSerializationError { source: e })
}

#[derive(Debug, Default)]
pub struct StdoutSink;

impl DifferenceSink for StdoutSink {
    fn publish(&mut self, differences: &Differences) -> Result<(), OutputError> {
        let json = differences_to_json(differences)?;
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", json).map_err(|e| OutputError::io("stdout", e))
    }
}

#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DifferenceSink for FileSink {
    fn publish(&mut self, differences: &Differences) -> Result<(), OutputError> {
        let json = differences_to_json(differences)?;
        fs::write(&self.path, json + "\n")
            .map_err(|e| OutputError::io(self.path.to_string_lossy(), e))?;
        info!("Difference set written to {}", self.path.display());
        Ok(())
    }
}

/// Drops the difference set.
#[derive(Debug, Default)]
pub struct NoopSink;

impl DifferenceSink for NoopSink {
    fn publish(&mut self, _differences: &Differences) -> Result<(), OutputError> {
        Ok(())
    }
}

/// Keeps every published payload.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub published: Vec<String>,
}

impl DifferenceSink for MemorySink {
    fn publish(&mut self, differences: &Differences) -> Result<(), OutputError> {
        self.published.push(differences_to_json(differences)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compute_diff;
    use crate::parser::parse_yaml;

    #[test]
    fn test_memory_sink_collects_json() {
        let left = parse_yaml("a: 1\nb: [1, 2]").unwrap();
        let right = parse_yaml("a: 2\nb: [1]\nc: x").unwrap();
        let diff = compute_diff(&left, &right).unwrap();

        let mut sink = MemorySink::default();
        sink.publish(&diff).unwrap();

        let value: serde_json::Value = serde_json::from_str(&sink.published[0]).unwrap();
        assert_eq!(value["missing_keys"], serde_json::json!(["b[1]"]));
        assert_eq!(value["new_keys"], serde_json::json!(["c"]));
        assert_eq!(value["value_differences"], serde_json::json!([["a", 1, 2]]));
    }

    #[test]
    fn test_file_sink_writes_payload() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("differences.json");
        let diff = compute_diff(&parse_yaml("a: 1").unwrap(), &parse_yaml("a: 1").unwrap()).unwrap();

        FileSink::new(&target).publish(&diff).unwrap();

        let written = fs::read_to_string(&target).unwrap();
        assert!(written.contains("\"missing_keys\": []"));
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn test_file_sink_missing_directory() {
        let diff = Differences::default();
        let err = FileSink::new("/nonexistent/dir/out.json")
            .publish(&diff)
            .unwrap_err();
        assert!(matches!(err, OutputError::Io { .. }));
    }
}
