use std::collections::HashMap;
use std::io::Write;

use alchemy_tools::config::file::{FileConfig, ListConfig, OutputConfig};
use alchemy_tools::domain::ports::InputReader;
use alchemy_tools::utils::error::{Result, ToolError};
use alchemy_tools::{Command, JsonCommand, ListCommand, LocalInput, TimeCommand, ToolEngine};
use serde_json::{json, Value};

#[derive(Default)]
struct MockInput {
    files: HashMap<String, String>,
}

impl MockInput {
    fn with(entries: &[(&str, &str)]) -> Self {
        Self {
            files: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl InputReader for MockInput {
    fn read(&self, source: &str) -> Result<String> {
        self.files.get(source).cloned().ok_or_else(|| {
            ToolError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", source),
            ))
        })
    }
}

#[test]
fn test_engine_repairs_json_from_input_source() {
    let reader = MockInput::with(&[("broken.json", "{name: 'John', age: 30,}")]);
    let engine = ToolEngine::new(reader);

    let output = engine
        .run(&Command::Json(JsonCommand::Repair {
            input: "broken.json".to_string(),
        }))
        .unwrap();

    let rendered: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(rendered["type"], json!("fixed"));
    assert_eq!(rendered["issues"].as_array().unwrap().len(), 3);
}

#[test]
fn test_engine_diffs_two_documents() {
    let reader = MockInput::with(&[
        ("a.json", r#"{"a": 1, "b": 2}"#),
        ("b.json", r#"{"a": 1, "c": 3}"#),
    ]);
    let engine = ToolEngine::new(reader);

    let output = engine
        .run(&Command::Json(JsonCommand::Diff {
            first: "a.json".to_string(),
            second: "b.json".to_string(),
        }))
        .unwrap();

    let rendered: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(rendered["summary"]["totalDifferences"], json!(2));
}

#[test]
fn test_engine_diff_with_invalid_json_errors() {
    let reader = MockInput::with(&[("a.json", "{"), ("b.json", "{}")]);
    let engine = ToolEngine::new(reader);

    let err = engine
        .run(&Command::Json(JsonCommand::Diff {
            first: "a.json".to_string(),
            second: "b.json".to_string(),
        }))
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid JSON input");
}

#[test]
fn test_engine_prettify_uses_config_indent() {
    let reader = MockInput::with(&[("doc.json", r#"{"a":1}"#)]);
    let defaults = FileConfig {
        output: Some(OutputConfig { indent: Some(4) }),
        list: None,
    };
    let engine = ToolEngine::with_defaults(reader, defaults);

    let output = engine
        .run(&Command::Json(JsonCommand::Prettify {
            input: "doc.json".to_string(),
            indent: None,
        }))
        .unwrap();
    assert_eq!(output, "{\n    \"a\": 1\n}");
}

#[test]
fn test_engine_prettify_flag_overrides_config() {
    let reader = MockInput::with(&[("doc.json", r#"{"a":1}"#)]);
    let defaults = FileConfig {
        output: Some(OutputConfig { indent: Some(4) }),
        list: None,
    };
    let engine = ToolEngine::with_defaults(reader, defaults);

    let output = engine
        .run(&Command::Json(JsonCommand::Prettify {
            input: "doc.json".to_string(),
            indent: Some(2),
        }))
        .unwrap();
    assert_eq!(output, "{\n  \"a\": 1\n}");
}

#[test]
fn test_engine_list_unique_with_lines_default_from_config() {
    let reader = MockInput::with(&[("items.txt", "apple\nbanana\napple\n")]);
    let defaults = FileConfig {
        output: None,
        list: Some(ListConfig {
            format: Some("lines".to_string()),
        }),
    };
    let engine = ToolEngine::with_defaults(reader, defaults);

    let output = engine
        .run(&Command::List(ListCommand::Unique {
            input: "items.txt".to_string(),
            format: None,
        }))
        .unwrap();

    let rendered: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(rendered["count"], json!(2));
    assert_eq!(rendered["items"], json!(["apple", "banana"]));
}

#[test]
fn test_engine_list_diff() {
    let reader = MockInput::with(&[("a.json", "[1, 2, 3]"), ("b.json", "[3, 4]")]);
    let engine = ToolEngine::new(reader);

    let output = engine
        .run(&Command::List(ListCommand::Diff {
            first: "a.json".to_string(),
            second: "b.json".to_string(),
            format: None,
        }))
        .unwrap();

    let rendered: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(rendered["diff1"]["items"], json!([1, 2]));
    assert_eq!(rendered["diff2"]["items"], json!([4]));
}

#[test]
fn test_engine_time_now_renders_all_fields() {
    let engine = ToolEngine::new(MockInput::default());

    let output = engine.run(&Command::Time(TimeCommand::Now)).unwrap();
    let rendered: Value = serde_json::from_str(&output).unwrap();

    assert!(rendered["utc"].is_string());
    assert!(rendered["local"].is_string());
    assert!(rendered["unix"].is_i64());
    assert!(rendered["ms"].is_i64());
}

#[test]
fn test_engine_time_shift_rejects_bad_unit() {
    let engine = ToolEngine::new(MockInput::default());

    let err = engine
        .run(&Command::Time(TimeCommand::Shift {
            date: "2024-01-01".to_string(),
            amount: 1,
            unit: "fortnights".to_string(),
            op: "add".to_string(),
        }))
        .unwrap_err();
    assert!(err.to_string().contains("Invalid time unit"));
}

#[test]
fn test_engine_missing_input_surfaces_io_error() {
    let engine = ToolEngine::new(MockInput::default());

    let err = engine
        .run(&Command::Json(JsonCommand::Stringify {
            input: "missing.json".to_string(),
        }))
        .unwrap_err();
    assert!(matches!(err, ToolError::IoError(_)));
}

#[test]
fn test_local_input_reads_files_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{\"a\": 1}}").unwrap();

    let text = LocalInput.read(file.path().to_str().unwrap()).unwrap();
    assert_eq!(text, "{\"a\": 1}");
}

#[test]
fn test_local_input_missing_file_errors() {
    assert!(LocalInput.read("/nonexistent/input.json").is_err());
}
