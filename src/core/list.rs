//! List set operations over JSON values.
//!
//! Lists arrive either as a JSON array or as line-by-line text; `Auto`
//! tries JSON first and falls back to lines, matching how the input panel
//! counts entries.

use std::str::FromStr;

use serde_json::Value;

use crate::core::value::{compare, values_equal};
use crate::domain::model::{ListDiffReport, ListReport};
use crate::utils::error::{Result, ToolError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFormat {
    #[default]
    Auto,
    Json,
    Lines,
}

impl FromStr for ListFormat {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ListFormat::Auto),
            "json" => Ok(ListFormat::Json),
            "lines" => Ok(ListFormat::Lines),
            other => Err(ToolError::InvalidInput {
                message: format!("Unknown list format: {}", other),
            }),
        }
    }
}

pub fn parse_list(text: &str, format: ListFormat) -> Result<Vec<Value>> {
    match format {
        ListFormat::Json => parse_json_list(text),
        ListFormat::Lines => Ok(parse_lines(text)),
        ListFormat::Auto => parse_json_list(text).or_else(|_| Ok(parse_lines(text))),
    }
}

fn parse_json_list(text: &str) -> Result<Vec<Value>> {
    match serde_json::from_str(text) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(_) => Err(ToolError::InvalidInput {
            message: "Expected a JSON array".to_string(),
        }),
        Err(_) => Err(ToolError::InvalidJsonInput),
    }
}

fn parse_lines(text: &str) -> Vec<Value> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Value::String(line.to_string()))
        .collect()
}

fn contains(items: &[Value], value: &Value) -> bool {
    items.iter().any(|item| values_equal(item, value))
}

/// First-occurrence order is preserved.
pub fn unique(items: &[Value]) -> ListReport {
    let mut out: Vec<Value> = Vec::new();
    for item in items {
        if !contains(&out, item) {
            out.push(item.clone());
        }
    }
    ListReport::new(out)
}

/// Both directions: elements of `first` absent from `second`, and the
/// reverse.
pub fn difference(first: &[Value], second: &[Value]) -> ListDiffReport {
    let diff1 = first
        .iter()
        .filter(|item| !contains(second, item))
        .cloned()
        .collect();
    let diff2 = second
        .iter()
        .filter(|item| !contains(first, item))
        .cloned()
        .collect();
    ListDiffReport {
        diff1: ListReport::new(diff1),
        diff2: ListReport::new(diff2),
    }
}

pub fn intersection(first: &[Value], second: &[Value]) -> ListReport {
    let mut out: Vec<Value> = Vec::new();
    for item in first {
        if contains(second, item) && !contains(&out, item) {
            out.push(item.clone());
        }
    }
    ListReport::new(out)
}

/// Elements occurring more than once, one entry each, ordered by first
/// repeated occurrence.
pub fn duplicates(items: &[Value]) -> ListReport {
    let mut seen: Vec<&Value> = Vec::new();
    let mut dups: Vec<Value> = Vec::new();
    for item in items {
        if seen.iter().any(|other| values_equal(other, item)) {
            if !contains(&dups, item) {
                dups.push(item.clone());
            }
        } else {
            seen.push(item);
        }
    }
    ListReport::new(dups)
}

pub fn sort(items: &[Value]) -> ListReport {
    let mut out = items.to_vec();
    out.sort_by(compare);
    ListReport::new(out)
}
