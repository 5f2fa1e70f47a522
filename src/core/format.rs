//! JSON formatting helpers: pretty-print, compact, and deep array flatten.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::utils::error::{Result, ToolError};

pub fn prettify(text: &str) -> Result<String> {
    prettify_with_indent(text, 2)
}

pub fn prettify_with_indent(text: &str, indent: usize) -> Result<String> {
    let value = parse(text)?;
    let spaces = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(spaces.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn stringify(text: &str) -> Result<String> {
    let value = parse(text)?;
    Ok(value.to_string())
}

/// Flatten a JSON array of arbitrarily nested arrays into a flat list of
/// leaf values.
pub fn flatten(text: &str) -> Result<Vec<Value>> {
    match parse(text)? {
        Value::Array(items) => {
            let mut out = Vec::new();
            flatten_into(items, &mut out);
            Ok(out)
        }
        _ => Err(ToolError::InvalidInput {
            message: "Flatten expects a JSON array".to_string(),
        }),
    }
}

fn flatten_into(items: Vec<Value>, out: &mut Vec<Value>) {
    for item in items {
        match item {
            Value::Array(inner) => flatten_into(inner, out),
            other => out.push(other),
        }
    }
}

fn parse(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|_| ToolError::InvalidJsonInput)
}
