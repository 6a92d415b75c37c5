//! Core structural diff algorithm.
//!
//! This module compares two mapping-rooted document trees and produces a flat
//! list of typed differences. Mappings are compared key by key, sequences
//! position by position, and everything else by exact value equality.
//!
//! # Examples
//!
//! ```
//! use apidiff::{compute_diff, Node};
//! use std::collections::HashMap;
//!
//! let mut left = HashMap::new();
//! left.insert("version".to_string(), Node::Integer(1));
//! let mut right = HashMap::new();
//! right.insert("version".to_string(), Node::Integer(2));
//!
//! let diff = compute_diff(&Node::Object(left), &Node::Object(right)).unwrap();
//! assert_eq!(diff.stats.value_differences, 1);
//! assert_eq!(diff.changes()[0].path().to_string(), "version");
//! ```

use crate::error::{DiffError, Side};
use crate::path::Path;
use crate::tree::Node;
use serde::ser::{SerializeStruct, SerializeTuple};
use std::collections::HashMap;

/// The kind of a difference, as it appears in the TYPE column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifferenceKind {
    /// Present in the left document, absent in the right
    MissingKey,
    /// Present in the right document, absent in the left
    NewKey,
    /// Present in both with different values
    ValueDifference,
}

impl DifferenceKind {
    pub fn label(&self) -> &'static str {
        match self {
            DifferenceKind::MissingKey => "Missing Key",
            DifferenceKind::NewKey => "New Key",
            DifferenceKind::ValueDifference => "Value Difference",
        }
    }
}

/// A single difference between the two documents.
#[derive(Debug, Clone, PartialEq)]
pub enum Difference {
    MissingKey(Path),
    NewKey(Path),
    ValueDifference { path: Path, old: Node, new: Node },
}

impl Difference {
    pub fn path(&self) -> &Path {
        match self {
            Difference::MissingKey(path) | Difference::NewKey(path) => path,
            Difference::ValueDifference { path, .. } => path,
        }
    }

    pub fn kind(&self) -> DifferenceKind {
        match self {
            Difference::MissingKey(_) => DifferenceKind::MissingKey,
            Difference::NewKey(_) => DifferenceKind::NewKey,
            Difference::ValueDifference { .. } => DifferenceKind::ValueDifference,
        }
    }
}

/// Counts per difference kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub missing_keys: usize,
    pub new_keys: usize,
    pub value_differences: usize,
}

impl DiffStats {
    pub fn total(&self) -> usize {
        self.missing_keys + self.new_keys + self.value_differences
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// The complete diff result.
///
/// Changes are ordered by kind: all missing keys, then all new keys, then all
/// value differences. Within a kind they follow traversal order.
#[derive(Debug, Clone, Default)]
pub struct Differences {
    changes: Vec<Difference>,
    pub stats: DiffStats,
}

impl Differences {
    pub fn changes(&self) -> &[Difference] {
        &self.changes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Difference> {
        self.changes.iter()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    fn of_kind(&self, kind: DifferenceKind) -> impl Iterator<Item = &Difference> {
        self.changes.iter().filter(move |d| d.kind() == kind)
    }
}

impl<'a> IntoIterator for &'a Differences {
    type Item = &'a Difference;
    type IntoIter = std::slice::Iter<'a, Difference>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

/// `[path, old, new]` triple used in the serialized form.
struct ValueTriple<'a>(&'a Path, &'a Node, &'a Node);

impl serde::Serialize for ValueTriple<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(self.0)?;
        tuple.serialize_element(&self.1.to_json())?;
        tuple.serialize_element(&self.2.to_json())?;
        tuple.end()
    }
}

/// Serializes as `{"missing_keys": [..], "new_keys": [..], "value_differences": [[path, old, new], ..]}`.
impl serde::Serialize for Differences {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let missing: Vec<&Path> = self
            .of_kind(DifferenceKind::MissingKey)
            .map(Difference::path)
            .collect();
        let new: Vec<&Path> = self
            .of_kind(DifferenceKind::NewKey)
            .map(Difference::path)
            .collect();
        let values: Vec<ValueTriple<'_>> = self
            .changes
            .iter()
            .filter_map(|d| match d {
                Difference::ValueDifference { path, old, new } => {
                    Some(ValueTriple(path, old, new))
                }
                _ => None,
            })
            .collect();

        let mut state = serializer.serialize_struct("Differences", 3)?;
        state.serialize_field("missing_keys", &missing)?;
        state.serialize_field("new_keys", &new)?;
        state.serialize_field("value_differences", &values)?;
        state.end()
    }
}

/// Accumulates differences per kind during traversal.
#[derive(Default)]
struct Collector {
    missing_keys: Vec<Difference>,
    new_keys: Vec<Difference>,
    value_differences: Vec<Difference>,
}

impl Collector {
    fn finish(self) -> Differences {
        let stats = DiffStats {
            missing_keys: self.missing_keys.len(),
            new_keys: self.new_keys.len(),
            value_differences: self.value_differences.len(),
        };
        let mut changes = self.missing_keys;
        changes.extend(self.new_keys);
        changes.extend(self.value_differences);
        Differences { changes, stats }
    }
}

/// Computes the structural diff between two documents.
///
/// Both documents must be mappings at the root; anything else is rejected with
/// [`DiffError::RootNotMapping`].
///
/// # Examples
///
/// ```
/// use apidiff::{compute_diff, Node};
///
/// let err = compute_diff(&Node::Array(vec![]), &Node::Array(vec![])).unwrap_err();
/// assert!(err.to_string().contains("mapping"));
/// ```
pub fn compute_diff(left: &Node, right: &Node) -> Result<Differences, DiffError> {
    let left_map = left.as_object().ok_or(DiffError::RootNotMapping {
        side: Side::Left,
        found: left.type_name(),
    })?;
    let right_map = right.as_object().ok_or(DiffError::RootNotMapping {
        side: Side::Right,
        found: right.type_name(),
    })?;

    let mut collector = Collector::default();
    diff_objects(left_map, right_map, &Path::root(), &mut collector);
    Ok(collector.finish())
}

/// Dispatches on the pair of node kinds found at the same path.
fn diff_nodes(left: &Node, right: &Node, path: Path, out: &mut Collector) {
    match (left, right) {
        (Node::Object(left_map), Node::Object(right_map)) => {
            diff_objects(left_map, right_map, &path, out);
        }
        (Node::Array(left_items), Node::Array(right_items)) => {
            diff_arrays(left_items, right_items, &path, out);
        }
        _ if left != right => {
            out.value_differences.push(Difference::ValueDifference {
                path,
                old: left.clone(),
                new: right.clone(),
            });
        }
        _ => {}
    }
}

/// Compares two mappings.
///
/// Keys only on the left are missing, keys only on the right are new, shared
/// keys are compared recursively. Keys are visited in sorted order.
fn diff_objects(
    left: &HashMap<String, Node>,
    right: &HashMap<String, Node>,
    path: &Path,
    out: &mut Collector,
) {
    let mut left_keys: Vec<&String> = left.keys().collect();
    left_keys.sort();
    let mut right_keys: Vec<&String> = right.keys().collect();
    right_keys.sort();

    for key in &left_keys {
        if !right.contains_key(*key) {
            out.missing_keys.push(Difference::MissingKey(path.key(*key)));
        }
    }

    for key in &right_keys {
        if !left.contains_key(*key) {
            out.new_keys.push(Difference::NewKey(path.key(*key)));
        }
    }

    for key in left_keys {
        if let Some(right_value) = right.get(key) {
            diff_nodes(&left[key], right_value, path.key(key), out);
        }
    }
}

/// Compares two sequences position by position.
///
/// Trailing elements of the longer sequence are reported per index without
/// descending into them.
fn diff_arrays(left: &[Node], right: &[Node], path: &Path, out: &mut Collector) {
    for (i, (left_item, right_item)) in left.iter().zip(right.iter()).enumerate() {
        diff_nodes(left_item, right_item, path.index(i), out);
    }

    for i in right.len()..left.len() {
        out.missing_keys.push(Difference::MissingKey(path.index(i)));
    }

    for i in left.len()..right.len() {
        out.new_keys.push(Difference::NewKey(path.index(i)));
    }
}
