//! Turns raw differences into report rows.
//!
//! The API label of a row comes from the difference's path. For most sections
//! it is the second dotted group (`paths.createUser.get` → `createUser`).
//! Two conventions override that:
//!
//! - sections containing `x-flows` name a flow step rather than an API, so the
//!   label is looked up in the left document at
//!   `x-flows[flow].steps[step].api`, with both indices taken from the digits
//!   in the first and second groups;
//! - sections containing `x-examples` or `x-attributes` carry the API in the
//!   fourth group.

use crate::config::{
    ATTRIBUTES_SECTION, EXAMPLES_SECTION, FLOWS_SECTION, FLOW_STEPS_FIELD, STEP_API_FIELD,
};
use crate::diff::{Difference, DifferenceKind, Differences};
use crate::error::ClassifyError;
use crate::tree::Node;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// One line of the tabular report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub kind: DifferenceKind,
    pub section: String,
    pub api: String,
    pub path: String,
    pub old_value: String,
    pub new_value: String,
    /// Reserved column, always empty
    pub remarks: String,
}

impl ReportRow {
    /// Cell values in the order of [`crate::config::REPORT_HEADERS`].
    pub fn cells(&self) -> [&str; 7] {
        [
            self.kind.label(),
            &self.api,
            &self.section,
            &self.path,
            &self.old_value,
            &self.new_value,
            &self.remarks,
        ]
    }
}

/// Classifies a single difference against the left document.
///
/// # Errors
///
/// Only flow paths can fail: when a group has no digits, or when the
/// `x-flows[flow].steps[step].api` lookup does not resolve in `left`.
///
/// # Examples
///
/// ```
/// use apidiff::classify::classify;
/// use apidiff::diff::Difference;
/// use apidiff::path::Path;
/// use apidiff::Node;
/// use std::collections::HashMap;
///
/// let path = Path::root().key("paths").key("createUser").key("summary");
/// let row = classify(&Difference::MissingKey(path), &Node::Object(HashMap::new())).unwrap();
/// assert_eq!(row.section, "paths");
/// assert_eq!(row.api, "createUser");
/// ```
pub fn classify(difference: &Difference, left: &Node) -> Result<ReportRow, ClassifyError> {
    let path = difference.path();
    let path_str = path.to_string();
    let groups = path.groups();

    let section = groups.first().cloned().unwrap_or_default();
    let mut second = groups.get(1).cloned().unwrap_or_default();
    let fourth = groups.get(3).cloned().unwrap_or_default();

    if section.contains(FLOWS_SECTION) {
        let step = extract_index(&second, &path_str)?;
        let flow = extract_index(&section, &path_str)?;
        second = resolve_step_api(left, flow, step, &path_str)?;
        debug!("Resolved {} to flow {} step {} api '{}'", path_str, flow, step, second);
    }

    let api = if section.contains(EXAMPLES_SECTION) || section.contains(ATTRIBUTES_SECTION) {
        fourth
    } else {
        second
    };

    let (old_value, new_value) = match difference {
        Difference::ValueDifference { old, new, .. } => (old.display_value(), new.display_value()),
        _ => (String::new(), String::new()),
    };

    Ok(ReportRow {
        kind: difference.kind(),
        section,
        api,
        path: path_str,
        old_value,
        new_value,
        remarks: String::new(),
    })
}

/// Classifies every difference in order, stopping at the first failure.
pub fn classify_all(
    differences: &Differences,
    left: &Node,
) -> Result<Vec<ReportRow>, ClassifyError> {
    differences.iter().map(|d| classify(d, left)).collect()
}

/// Returns the first run of digits in `segment` as an index.
fn extract_index(segment: &str, path: &str) -> Result<usize, ClassifyError> {
    DIGITS
        .find(segment)
        .and_then(|m| m.as_str().parse::<usize>().ok())
        .ok_or_else(|| ClassifyError::MissingIndex {
            path: path.to_string(),
            segment: segment.to_string(),
        })
}

/// Looks up `x-flows[flow].steps[step].api` in the left document.
fn resolve_step_api(
    left: &Node,
    flow: usize,
    step: usize,
    path: &str,
) -> Result<String, ClassifyError> {
    let flows = field(left, FLOWS_SECTION, path)?;
    let flow_node = element(flows, flow, FLOWS_SECTION, path)?;
    let steps = field(flow_node, FLOW_STEPS_FIELD, path)?;
    let step_node = element(steps, step, FLOW_STEPS_FIELD, path)?;
    let api = field(step_node, STEP_API_FIELD, path)?;
    Ok(api.display_value())
}

fn field<'a>(node: &'a Node, name: &str, path: &str) -> Result<&'a Node, ClassifyError> {
    let map = node.as_object().ok_or_else(|| ClassifyError::UnexpectedType {
        path: path.to_string(),
        field: name.to_string(),
        expected: "mapping",
        found: node.type_name(),
    })?;
    map.get(name).ok_or_else(|| ClassifyError::MissingField {
        path: path.to_string(),
        field: name.to_string(),
    })
}

fn element<'a>(
    node: &'a Node,
    index: usize,
    name: &str,
    path: &str,
) -> Result<&'a Node, ClassifyError> {
    let items = node.as_array().ok_or_else(|| ClassifyError::UnexpectedType {
        path: path.to_string(),
        field: name.to_string(),
        expected: "sequence",
        found: node.type_name(),
    })?;
    items.get(index).ok_or_else(|| ClassifyError::IndexOutOfRange {
        path: path.to_string(),
        field: name.to_string(),
        index,
        len: items.len(),
    })
}
