//! Structural JSON diff.
//!
//! Two documents are co-walked from the root, objects by key union and
//! arrays by index, and every divergent path is recorded under exactly one
//! of four categories: present on one side only, value changed, or type
//! changed. Entries land in the category of the side that has the value;
//! a type mismatch (including null against a container) is terminal and is
//! never recursed into.

use serde_json::{Map, Value};

use crate::core::value::{kind, values_equal};
use crate::domain::model::{
    DiffReport, PresenceEntry, TypeChangeEntry, ValueChangeEntry,
};
use crate::utils::error::{Result, ToolError};

pub fn diff(first: &Value, second: &Value) -> DiffReport {
    let mut report = DiffReport::default();
    walk("", first, second, &mut report);
    tracing::debug!(
        "Diff finished with {} differences",
        report.summary.total_differences
    );
    report
}

/// Text-level convenience wrapper: parses both sides before delegating to
/// [`diff`]. Either side failing to parse yields the invalid-input error.
pub fn diff_texts(first: &str, second: &str) -> Result<DiffReport> {
    let a: Value = serde_json::from_str(first).map_err(|_| ToolError::InvalidJsonInput)?;
    let b: Value = serde_json::from_str(second).map_err(|_| ToolError::InvalidJsonInput)?;
    Ok(diff(&a, &b))
}

fn walk(path: &str, first: &Value, second: &Value, report: &mut DiffReport) {
    match (first, second) {
        (Value::Object(a), Value::Object(b)) => walk_objects(path, a, b, report),
        (Value::Array(a), Value::Array(b)) => walk_arrays(path, a, b, report),
        _ if kind(first) != kind(second) => report.record_type_changed(TypeChangeEntry {
            path: path.to_string(),
            first_value: first.clone(),
            second_value: second.clone(),
            first_type: kind(first).to_string(),
            second_type: kind(second).to_string(),
        }),
        _ if !values_equal(first, second) => report.record_value_changed(ValueChangeEntry {
            path: path.to_string(),
            first_value: first.clone(),
            second_value: second.clone(),
        }),
        _ => {}
    }
}

fn walk_objects(
    path: &str,
    first: &Map<String, Value>,
    second: &Map<String, Value>,
    report: &mut DiffReport,
) {
    for (key, value) in first {
        let child = join_key(path, key);
        match second.get(key) {
            Some(other) => walk(&child, value, other, report),
            None => report.record_only_in_first(presence(child, value)),
        }
    }
    for (key, value) in second {
        if !first.contains_key(key) {
            report.record_only_in_second(presence(join_key(path, key), value));
        }
    }
}

fn walk_arrays(path: &str, first: &[Value], second: &[Value], report: &mut DiffReport) {
    for i in 0..first.len().max(second.len()) {
        let child = format!("{}[{}]", path, i);
        match (first.get(i), second.get(i)) {
            (Some(a), Some(b)) => walk(&child, a, b, report),
            (Some(a), None) => report.record_only_in_first(presence(child, a)),
            (None, Some(b)) => report.record_only_in_second(presence(child, b)),
            (None, None) => {}
        }
    }
}

fn presence(path: String, value: &Value) -> PresenceEntry {
    PresenceEntry {
        path,
        value: value.clone(),
        value_type: kind(value).to_string(),
    }
}

fn join_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}
