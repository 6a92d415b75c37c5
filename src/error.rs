//! Custom error types for apidiff.

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in {path}: {source}")]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not detect file format for {path}: {source}")]
    UnknownFormat {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Which document a root-level error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    #[error("The {side} document must be a mapping at the root, found {found}")]
    RootNotMapping { side: Side, found: &'static str },
}

/// Failures while resolving the API label of a difference.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("No numeric index in path segment '{segment}' of {path}")]
    MissingIndex { path: String, segment: String },

    #[error("Field '{field}' not found while resolving {path}")]
    MissingField { path: String, field: String },

    #[error("Expected {expected} at '{field}' while resolving {path}, found {found}")]
    UnexpectedType {
        path: String,
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Index {index} out of range for '{field}' (length {len}) while resolving {path}")]
    IndexOutOfRange {
        path: String,
        field: String,
        index: usize,
        len: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to write {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize to JSON: {source}")]
    JsonSerializationError {
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ApidiffError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl ParseError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn json_error(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonError {
            path: path.into(),
            source,
        }
    }

    pub fn yaml_error(path: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::YamlError {
            path: path.into(),
            source,
        }
    }

    pub fn toml_error(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::TomlError {
            path: path.into(),
            source,
        }
    }

    pub fn unknown_format(path: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::UnknownFormat {
            path: path.into(),
            source,
        }
    }
}

impl OutputError {
    pub fn io(target: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            target: target.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::file_not_found("build1.yaml");
        assert_eq!(err.to_string(), "File not found: build1.yaml");
    }

    #[test]
    fn test_root_not_mapping_display() {
        let err = DiffError::RootNotMapping {
            side: Side::Right,
            found: "sequence",
        };
        assert_eq!(
            err.to_string(),
            "The right document must be a mapping at the root, found sequence"
        );
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = ClassifyError::IndexOutOfRange {
            path: "x-flows[3].steps[0].api".to_string(),
            field: "x-flows".to_string(),
            index: 3,
            len: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("Index 3 out of range"));
        assert!(msg.contains("length 1"));
    }

    #[test]
    fn test_umbrella_from_classify_error() {
        let err: ApidiffError = ClassifyError::MissingIndex {
            path: "x-flows.a".to_string(),
            segment: "a".to_string(),
        }
        .into();
        assert!(matches!(err, ApidiffError::Classify(_)));
    }
}
