//! Heuristic JSON repair.
//!
//! Strict parsing is always attempted first; only when it fails does the
//! input run through an ordered pipeline of text-rewrite passes covering the
//! usual hand-edited-JSON mistakes (single quotes, bare property names,
//! trailing commas, comments, unbalanced brackets). The passes are
//! best-effort: they can leave invalid JSON invalid and can rewrite string
//! contents that merely look broken. Pass order is load-bearing: quote
//! normalization must run before property-name quoting, which must run
//! before value quoting, or the later patterns fail to match.

use regex::Regex;
use serde_json::Value;

use crate::domain::model::RepairResult;

pub fn repair(input: &str) -> RepairResult {
    let trimmed = input.trim();
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return RepairResult::Fixed {
            original: input.to_string(),
            fixed: pretty(&value),
            issues: Vec::new(),
        };
    }

    let mut issues = Vec::new();
    let mut fixed = trimmed.to_string();

    fixed = normalize_quotes(fixed, &mut issues);
    fixed = quote_property_names(fixed, &mut issues);
    fixed = remove_trailing_commas(fixed, &mut issues);
    fixed = quote_string_values(fixed, &mut issues);
    fixed = unquote_literals(fixed, &mut issues);
    fixed = strip_comments(fixed, &mut issues);
    fixed = balance_brackets(fixed, &mut issues);
    fixed = fix_malformed_numbers(fixed, &mut issues);
    fixed = wrap_root(fixed, &mut issues);
    fixed = insert_missing_commas(fixed, &mut issues);
    fixed = normalize_whitespace(&fixed);

    tracing::debug!("Applied {} repair heuristics", issues.len());

    match serde_json::from_str::<Value>(&fixed) {
        Ok(value) => RepairResult::Fixed {
            original: input.to_string(),
            fixed: pretty(&value),
            issues,
        },
        Err(err) => RepairResult::Failed {
            original: input.to_string(),
            attempted: fixed,
            issues,
            error: err.to_string(),
        },
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Swap single quotes for double quotes, then undo the damage this does to
/// escape sequences. Best-effort: apostrophes inside legitimate strings get
/// rewritten too.
fn normalize_quotes(text: String, issues: &mut Vec<String>) -> String {
    if !text.contains('\'') {
        return text;
    }
    issues.push("Converted single quotes to double quotes".to_string());
    text.replace('\'', "\"")
        .replace("\\\"", "\\'")
        .replace("\\'", "\"")
}

fn quote_property_names(text: String, issues: &mut Vec<String>) -> String {
    let re = Regex::new(r"([{,]\s*)([A-Za-z_$][A-Za-z0-9_$]*)\s*:").unwrap();
    if !re.is_match(&text) {
        return text;
    }
    issues.push("Added quotes around unquoted property names".to_string());
    re.replace_all(&text, "${1}\"${2}\":").into_owned()
}

fn remove_trailing_commas(text: String, issues: &mut Vec<String>) -> String {
    let re = Regex::new(r",(\s*[}\]])").unwrap();
    if !re.is_match(&text) {
        return text;
    }
    issues.push("Removed trailing commas".to_string());
    re.replace_all(&text, "${1}").into_owned()
}

/// Quote a bare alphabetic token in value position. `true`/`false`/`null`
/// are left alone; numeric tokens never match the pattern.
fn quote_string_values(text: String, issues: &mut Vec<String>) -> String {
    let re = Regex::new(r":\s*([A-Za-z][A-Za-z0-9\s]*[A-Za-z0-9])\s*([,}\]])").unwrap();
    let mut changed = false;
    let result = re
        .replace_all(&text, |caps: &regex::Captures| {
            let token = &caps[1];
            if matches!(token, "true" | "false" | "null") {
                caps[0].to_string()
            } else {
                changed = true;
                format!(": \"{}\"{}", token, &caps[2])
            }
        })
        .into_owned();
    if changed {
        issues.push("Added quotes around unquoted string values".to_string());
    }
    result
}

fn unquote_literals(text: String, issues: &mut Vec<String>) -> String {
    let re = Regex::new(r#""(true|false|null)""#).unwrap();
    if !re.is_match(&text) {
        return text;
    }
    issues.push("Converted string literals to proper boolean/null values".to_string());
    re.replace_all(&text, "${1}").into_owned()
}

fn strip_comments(text: String, issues: &mut Vec<String>) -> String {
    if !text.contains("//") && !text.contains("/*") {
        return text;
    }
    issues.push("Removed comments".to_string());
    let line = Regex::new(r"(?m)//.*$").unwrap();
    let block = Regex::new(r"(?s)/\*.*?\*/").unwrap();
    let without_line = line.replace_all(&text, "");
    block.replace_all(&without_line, "").into_owned()
}

/// Append missing closers, or drop excess trailing closers, for `{}` and
/// `[]` independently. Count-based, so interleaved nesting errors stay
/// broken and surface as a `Failed` result.
fn balance_brackets(text: String, issues: &mut Vec<String>) -> String {
    let mut fixed = text;

    let open_braces = fixed.matches('{').count();
    let close_braces = fixed.matches('}').count();
    if open_braces > close_braces {
        issues.push("Added missing closing braces".to_string());
        fixed.push_str(&"}".repeat(open_braces - close_braces));
    } else if close_braces > open_braces {
        issues.push("Removed extra closing braces".to_string());
        fixed = strip_trailing_closers(&fixed, '}', close_braces - open_braces);
    }

    let open_brackets = fixed.matches('[').count();
    let close_brackets = fixed.matches(']').count();
    if open_brackets > close_brackets {
        issues.push("Added missing closing brackets".to_string());
        fixed.push_str(&"]".repeat(open_brackets - close_brackets));
    } else if close_brackets > open_brackets {
        issues.push("Removed extra closing brackets".to_string());
        fixed = strip_trailing_closers(&fixed, ']', close_brackets - open_brackets);
    }

    fixed
}

fn strip_trailing_closers(text: &str, closer: char, excess: usize) -> String {
    let mut out = text.to_string();
    let mut removed = 0;
    while removed < excess && out.ends_with(closer) {
        out.pop();
        removed += 1;
    }
    out
}

fn fix_malformed_numbers(text: String, issues: &mut Vec<String>) -> String {
    let re = Regex::new(r":\s*([0-9]+\.[0-9]*\.+[0-9]*)").unwrap();
    if !re.is_match(&text) {
        return text;
    }
    issues.push("Fixed malformed numbers".to_string());
    let dots = Regex::new(r"\.+").unwrap();
    re.replace_all(&text, |caps: &regex::Captures| {
        format!(": {}", dots.replace_all(&caps[1], "."))
    })
    .into_owned()
}

fn wrap_root(text: String, issues: &mut Vec<String>) -> String {
    let trimmed = text.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return text;
    }
    issues.push("Wrapped content in object braces".to_string());
    format!("{{{}}}", text)
}

/// Line-oriented comma insertion: when a line ends in a value terminator and
/// the next line starts a new property or element, a separating comma is
/// assumed missing.
fn insert_missing_commas(text: String, issues: &mut Vec<String>) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut result = Vec::with_capacity(lines.len());
    let mut added = false;

    for (i, raw) in lines.iter().enumerate() {
        let mut line = raw.trim().to_string();
        let next = lines.get(i + 1).map(|l| l.trim()).unwrap_or("");

        if !line.is_empty()
            && !next.is_empty()
            && ends_with_value(&line)
            && starts_new_value(next)
            && !line.ends_with(',')
        {
            line.push(',');
            added = true;
        }

        result.push(line);
    }

    if added {
        issues.push("Added missing commas between elements".to_string());
    }
    result.join("\n")
}

fn ends_with_value(line: &str) -> bool {
    line.ends_with('"')
        || line.ends_with('}')
        || line.ends_with(']')
        || line.chars().last().is_some_and(|c| c.is_ascii_digit())
        || line.ends_with("true")
        || line.ends_with("false")
        || line.ends_with("null")
}

fn starts_new_value(line: &str) -> bool {
    line.starts_with('"')
        || line.starts_with('{')
        || line.starts_with('[')
        || line.chars().next().is_some_and(|c| c.is_ascii_digit())
        || line.starts_with("true")
        || line.starts_with("false")
        || line.starts_with("null")
}

// Runs unconditionally and is not reported as an issue.
fn normalize_whitespace(text: &str) -> String {
    let ws = Regex::new(r"\s+").unwrap();
    let structural = Regex::new(r"\s*([{}\[\],:])\s*").unwrap();
    let collapsed = ws.replace_all(text, " ");
    structural.replace_all(&collapsed, "${1}").into_owned()
}
