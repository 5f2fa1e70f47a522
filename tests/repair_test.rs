use alchemy_tools::{repair, RepairResult};
use serde_json::{json, Value};

fn fixed_value(result: &RepairResult) -> Value {
    serde_json::from_str(result.fixed_text().expect("expected Fixed result")).unwrap()
}

#[test]
fn test_well_formed_input_round_trips() {
    let input = r#"{"name": "John", "tags": ["a", "b"], "age": 30, "active": true}"#;
    let result = repair(input);

    assert!(result.success());
    assert!(result.issues().is_empty());
    assert_eq!(
        fixed_value(&result),
        serde_json::from_str::<Value>(input).unwrap()
    );
}

#[test]
fn test_repair_is_idempotent_on_its_own_output() {
    let result = repair("{name: 'John', age: 30,}");
    assert!(result.success());

    let again = repair(result.fixed_text().unwrap());
    assert!(again.success());
    assert!(again.issues().is_empty());
    assert_eq!(again.fixed_text(), result.fixed_text());
}

#[test]
fn test_common_mistakes_scenario() {
    let result = repair("{name: 'John', age: 30,}");

    assert!(result.success());
    assert_eq!(
        result.issues(),
        [
            "Converted single quotes to double quotes",
            "Added quotes around unquoted property names",
            "Removed trailing commas",
        ]
    );
    assert_eq!(fixed_value(&result), json!({"name": "John", "age": 30}));
}

#[test]
fn test_single_quoted_document() {
    let result = repair("{'city': 'Oslo', 'zip': '0150'}");
    assert!(result.success());
    assert_eq!(fixed_value(&result), json!({"city": "Oslo", "zip": "0150"}));
}

#[test]
fn test_unquoted_property_names() {
    let result = repair(r#"{name: "John", nested: {age: 30}}"#);
    assert!(result.success());
    assert_eq!(
        result.issues(),
        ["Added quotes around unquoted property names"]
    );
    assert_eq!(fixed_value(&result), json!({"name": "John", "nested": {"age": 30}}));
}

#[test]
fn test_trailing_commas_in_objects_and_arrays() {
    let result = repair(r#"{"items": [1, 2, 3,], "done": true,}"#);
    assert!(result.success());
    assert_eq!(result.issues(), ["Removed trailing commas"]);
    assert_eq!(fixed_value(&result), json!({"items": [1, 2, 3], "done": true}));
}

#[test]
fn test_unquoted_string_values() {
    let result = repair(r#"{"name": John Smith, "city": Oslo}"#);
    assert!(result.success());
    assert!(result
        .issues()
        .contains(&"Added quotes around unquoted string values".to_string()));
    assert_eq!(
        fixed_value(&result),
        json!({"name": "John Smith", "city": "Oslo"})
    );
}

#[test]
fn test_bare_literals_survive_value_quoting() {
    let result = repair("{active: true, parent: null, retired: false}");
    assert!(result.success());
    assert_eq!(
        fixed_value(&result),
        json!({"active": true, "parent": null, "retired": false})
    );
}

#[test]
fn test_quoted_literals_become_real_literals() {
    let result = repair(r#"{flag: "true", parent: "null"}"#);
    assert!(result.success());
    assert!(result
        .issues()
        .contains(&"Converted string literals to proper boolean/null values".to_string()));
    assert_eq!(fixed_value(&result), json!({"flag": true, "parent": null}));
}

#[test]
fn test_comments_are_stripped() {
    let input = "{\n  \"a\": 1, // inline note\n  /* block\n     comment */\n  \"b\": 2\n}";
    let result = repair(input);
    assert!(result.success());
    assert!(result.issues().contains(&"Removed comments".to_string()));
    assert_eq!(fixed_value(&result), json!({"a": 1, "b": 2}));
}

#[test]
fn test_missing_closers_appended() {
    let result = repair(r#"{"a": {"b": 1"#);
    assert!(result.success());
    assert!(result
        .issues()
        .contains(&"Added missing closing braces".to_string()));
    assert_eq!(fixed_value(&result), json!({"a": {"b": 1}}));
}

#[test]
fn test_excess_closers_stripped() {
    let result = repair(r#"{"a": 1}}}"#);
    assert!(result.success());
    assert!(result
        .issues()
        .contains(&"Removed extra closing braces".to_string()));
    assert_eq!(fixed_value(&result), json!({"a": 1}));
}

#[test]
fn test_malformed_number_collapsed() {
    let result = repair(r#"{"price": 10..5}"#);
    assert!(result.success());
    assert!(result
        .issues()
        .contains(&"Fixed malformed numbers".to_string()));
    assert_eq!(fixed_value(&result), json!({"price": 10.5}));
}

#[test]
fn test_bare_content_wrapped_in_braces() {
    let result = repair(r#""a": 1, "b": 2"#);
    assert!(result.success());
    assert!(result
        .issues()
        .contains(&"Wrapped content in object braces".to_string()));
    assert_eq!(fixed_value(&result), json!({"a": 1, "b": 2}));
}

#[test]
fn test_missing_commas_between_lines() {
    let result = repair("{\n\"a\": 1\n\"b\": 2\n}");
    assert!(result.success());
    assert_eq!(
        result.issues(),
        ["Added missing commas between elements"]
    );
    assert_eq!(fixed_value(&result), json!({"a": 1, "b": 2}));
}

#[test]
fn test_empty_and_blank_input_do_not_panic() {
    for input in ["", "   ", "\n\t"] {
        let result = repair(input);
        assert!(result.success(), "input {:?} should fall back to {{}}", input);
        assert_eq!(fixed_value(&result), json!({}));
        assert_eq!(result.issues(), ["Wrapped content in object braces"]);
    }
}

#[test]
fn test_array_root_is_preserved() {
    let result = repair("[1, 2, 3,]");
    assert!(result.success());
    assert_eq!(fixed_value(&result), json!([1, 2, 3]));
}

#[test]
fn test_unfixable_input_reports_failure_details() {
    let input = "{a: [}";
    match repair(input) {
        RepairResult::Failed {
            original,
            attempted,
            issues,
            error,
        } => {
            assert_eq!(original, input);
            assert!(!attempted.is_empty());
            assert!(!issues.is_empty());
            assert!(!error.is_empty());
        }
        RepairResult::Fixed { .. } => panic!("expected Failed result"),
    }
}

#[test]
fn test_result_serializes_with_original_wire_shape() {
    let value = serde_json::to_value(repair("{'a': 1}")).unwrap();
    assert_eq!(value["type"], json!("fixed"));
    assert!(value["issues"].as_array().is_some());
    assert!(value["fixed"].as_str().is_some());
    assert!(value["original"].as_str().is_some());
}
