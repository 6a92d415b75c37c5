//! In-memory document tree for structured data.

use std::collections::HashMap;

/// A node representing a value in a parsed document (YAML, JSON, TOML).
///
/// Integers are kept exactly; only values written with a fraction or an
/// exponent become `Number`. An integer and a float compare equal when they
/// denote the same value, so `1` equals `1.0`.
#[derive(Debug, Clone)]
pub enum Node {
    Null,
    Bool(bool),
    Integer(i128),
    Number(f64),
    String(String),
    Object(HashMap<String, Node>),
    Array(Vec<Node>),
}

impl Node {
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Integer(_) | Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::Object(_) => "mapping",
            Node::Array(_) => "sequence",
        }
    }

    /// Looks up a field of a mapping. Returns `None` for non-mappings.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Object(map) => map.get(key),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&HashMap<String, Node>> {
        match self {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Renders the value the way it appears in a report cell.
    ///
    /// Strings are written verbatim, integral numbers without a fractional
    /// part, and containers as compact JSON.
    pub fn display_value(&self) -> String {
        match self {
            Node::Null => "null".to_string(),
            Node::Bool(b) => b.to_string(),
            Node::Integer(i) => i.to_string(),
            Node::Number(n) => format_number(*n),
            Node::String(s) => s.clone(),
            Node::Object(_) | Node::Array(_) => self.to_json().to_string(),
        }
    }

    /// Converts the node into a `serde_json::Value`.
    ///
    /// Integral numbers become JSON integers so `1` does not turn into `1.0`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Node::Null => serde_json::Value::Null,
            Node::Bool(b) => serde_json::Value::Bool(*b),
            Node::Integer(i) => integer_to_json(*i),
            Node::Number(n) => number_to_json(*n),
            Node::String(s) => serde_json::Value::String(s.clone()),
            Node::Array(items) => serde_json::Value::Array(items.iter().map(Node::to_json).collect()),
            Node::Object(map) => {
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort();
                let obj: serde_json::Map<String, serde_json::Value> = keys
                    .into_iter()
                    .map(|k| (k.clone(), map[k].to_json()))
                    .collect();
                serde_json::Value::Object(obj)
            }
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Null, Node::Null) => true,
            (Node::Bool(a), Node::Bool(b)) => a == b,
            (Node::Integer(a), Node::Integer(b)) => a == b,
            (Node::Number(a), Node::Number(b)) => a == b,
            (Node::Integer(i), Node::Number(f)) | (Node::Number(f), Node::Integer(i)) => {
                integer_equals_float(*i, *f)
            }
            (Node::String(a), Node::String(b)) => a == b,
            (Node::Object(a), Node::Object(b)) => a == b,
            (Node::Array(a), Node::Array(b)) => a == b,
            _ => false,
        }
    }
}

/// Compares without rounding the integer through `f64`.
fn integer_equals_float(i: i128, f: f64) -> bool {
    f.is_finite()
        && f.fract() == 0.0
        && f.abs() < i128::MAX as f64
        && f as i128 == i
}

fn integer_to_json(i: i128) -> serde_json::Value {
    if let Ok(n) = i64::try_from(i) {
        serde_json::Value::from(n)
    } else if let Ok(n) = u64::try_from(i) {
        serde_json::Value::from(n)
    } else {
        serde_json::Value::String(i.to_string())
    }
}

fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64
}

fn format_number(n: f64) -> String {
    if is_integral(n) {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    if is_integral(n) {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}
