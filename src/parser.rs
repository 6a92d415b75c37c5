//! Loading documents from YAML, JSON and TOML.
//!
//! Documents are read fully as text and converted into the [`Node`] tree. The
//! format comes from the file extension; files without a known extension are
//! tried as JSON first and then as YAML.
//!
//! # Examples
//!
//! ```no_run
//! use apidiff::parser::parse_file;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let build = parse_file(Path::new("build1.yaml"))?;
//! # Ok(())
//! # }
//! ```

use crate::error::ParseError;
use crate::tree::Node;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Input format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatHint {
    Json,
    Yaml,
    Toml,
    /// Try JSON, then YAML
    Auto,
}

impl FormatHint {
    /// Picks a format from the file extension.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_lowercase());

        match extension.as_deref() {
            Some("json") => FormatHint::Json,
            Some("yaml") | Some("yml") => FormatHint::Yaml,
            Some("toml") => FormatHint::Toml,
            _ => FormatHint::Auto,
        }
    }
}

/// Parses a file into a Node tree.
///
/// # Errors
///
/// - the file does not exist (`ParseError::FileNotFound`)
/// - the file cannot be read (`ParseError::ReadError`)
/// - the content is malformed for its format (`JsonError`, `YamlError`, `TomlError`)
/// - an extensionless file is neither JSON nor YAML (`ParseError::UnknownFormat`,
///   carrying the YAML error as its source)
pub fn parse_file(path: &Path) -> Result<Node, ParseError> {
    let display = path.to_string_lossy().to_string();

    if !path.exists() {
        return Err(ParseError::file_not_found(display));
    }

    let content = fs::read_to_string(path).map_err(|e| ParseError::read_error(&display, e))?;
    let hint = FormatHint::from_path(path);
    debug!("Parsing {} ({} bytes) as {:?}", display, content.len(), hint);

    parse_content(&content, hint, &display)
}

/// Parses already-loaded text. `origin` names the source in error messages.
pub fn parse_content(content: &str, hint: FormatHint, origin: &str) -> Result<Node, ParseError> {
    match hint {
        FormatHint::Json => parse_json(content).map_err(|e| ParseError::json_error(origin, e)),
        FormatHint::Yaml => parse_yaml(content).map_err(|e| ParseError::yaml_error(origin, e)),
        FormatHint::Toml => parse_toml(content).map_err(|e| ParseError::toml_error(origin, e)),
        FormatHint::Auto => match parse_json(content) {
            Ok(node) => Ok(node),
            Err(json_err) => {
                debug!("{} is not JSON ({}), trying YAML", origin, json_err);
                parse_yaml(content).map_err(|e| ParseError::unknown_format(origin, e))
            }
        },
    }
}

pub fn parse_json(content: &str) -> Result<Node, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(json_to_node(value))
}

/// Parses a YAML string into a Node.
///
/// An empty document parses as `Node::Null`.
///
/// ```
/// use apidiff::parser::parse_yaml;
/// use apidiff::Node;
///
/// let node = parse_yaml("info:\n  version: 2").unwrap();
/// assert_eq!(node.get("info").and_then(|i| i.get("version")), Some(&Node::Integer(2)));
/// ```
pub fn parse_yaml(content: &str) -> Result<Node, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    Ok(yaml_to_node(value))
}

pub fn parse_toml(content: &str) -> Result<Node, toml::de::Error> {
    let value: toml::Value = toml::from_str(content)?;
    Ok(toml_to_node(value))
}

fn json_to_node(value: serde_json::Value) -> Node {
    match value {
        serde_json::Value::Null => Node::Null,
        serde_json::Value::Bool(b) => Node::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Node::Integer(i.into())
            } else if let Some(u) = n.as_u64() {
                Node::Integer(u.into())
            } else {
                Node::Number(n.as_f64().unwrap_or(0.0))
            }
        }
        serde_json::Value::String(s) => Node::String(s),
        serde_json::Value::Array(arr) => Node::Array(arr.into_iter().map(json_to_node).collect()),
        serde_json::Value::Object(obj) => {
            Node::Object(obj.into_iter().map(|(k, v)| (k, json_to_node(v))).collect())
        }
    }
}

/// Non-string mapping keys become their string form; tags are dropped.
fn yaml_to_node(value: serde_yaml::Value) -> Node {
    match value {
        serde_yaml::Value::Null => Node::Null,
        serde_yaml::Value::Bool(b) => Node::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Node::Integer(i.into())
            } else if let Some(u) = n.as_u64() {
                Node::Integer(u.into())
            } else {
                Node::Number(n.as_f64().unwrap_or(0.0))
            }
        }
        serde_yaml::Value::String(s) => Node::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Node::Array(seq.into_iter().map(yaml_to_node).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let entries: HashMap<String, Node> = map
                .into_iter()
                .map(|(k, v)| (yaml_key(k), yaml_to_node(v)))
                .collect();
            Node::Object(entries)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_node(tagged.value),
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Null => "null".to_string(),
        other => yaml_to_node(other).display_value(),
    }
}

/// TOML datetimes are kept as their RFC 3339 text.
fn toml_to_node(value: toml::Value) -> Node {
    match value {
        toml::Value::String(s) => Node::String(s),
        toml::Value::Integer(i) => Node::Integer(i.into()),
        toml::Value::Float(f) => Node::Number(f),
        toml::Value::Boolean(b) => Node::Bool(b),
        toml::Value::Datetime(dt) => Node::String(dt.to_string()),
        toml::Value::Array(arr) => Node::Array(arr.into_iter().map(toml_to_node).collect()),
        toml::Value::Table(table) => {
            Node::Object(table.into_iter().map(|(k, v)| (k, toml_to_node(v))).collect())
        }
    }
}
