use apidiff::{parse_content, parse_file, parse_json, parse_toml, parse_yaml, FormatHint, Node, ParseError};
use std::path::Path;

#[test]
fn test_fixture_formats_agree() {
    let yaml = parse_file(Path::new("tests/fixtures/build1.yaml")).unwrap();
    let json = parse_file(Path::new("tests/fixtures/build1.json")).unwrap();
    assert_eq!(yaml, json);
}

#[test]
fn test_yaml_versions_stay_strings() {
    let node = parse_yaml("openapi: 3.0.0\ninfo:\n  version: 1.0.0").unwrap();
    assert_eq!(node.get("openapi"), Some(&Node::String("3.0.0".to_string())));
}

#[test]
fn test_yaml_sequences_of_mappings() {
    let node = parse_yaml("steps:\n  - api: a\n  - api: b").unwrap();
    let steps = node.get("steps").and_then(Node::as_array).unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[1].get("api"), Some(&Node::String("b".to_string())));
}

#[test]
fn test_json_numbers() {
    let node = parse_json(r#"{"status": 200, "ratio": 0.25}"#).unwrap();
    assert_eq!(node.get("status"), Some(&Node::Integer(200)));
    assert_eq!(node.get("ratio"), Some(&Node::Number(0.25)));
}

#[test]
fn test_toml_tables_and_arrays() {
    let node = parse_toml("tags = [\"a\", \"b\"]\n[info]\ntitle = \"Users\"").unwrap();
    assert_eq!(
        node.get("tags"),
        Some(&Node::Array(vec![
            Node::String("a".to_string()),
            Node::String("b".to_string())
        ]))
    );
    assert_eq!(
        node.get("info").and_then(|i| i.get("title")),
        Some(&Node::String("Users".to_string()))
    );
}

#[test]
fn test_malformed_fixture() {
    let err = parse_file(Path::new("tests/fixtures/malformed.yaml")).unwrap_err();
    assert!(matches!(err, ParseError::YamlError { .. }));
    assert!(err.to_string().contains("malformed.yaml"));
}

#[test]
fn test_parse_content_names_origin() {
    let err = parse_content("{\"a\": ", FormatHint::Json, "left.json").unwrap_err();
    assert!(err.to_string().starts_with("Invalid JSON in left.json"));
}

#[test]
fn test_missing_file() {
    let err = parse_file(Path::new("tests/fixtures/absent.yaml")).unwrap_err();
    assert_eq!(err.to_string(), "File not found: tests/fixtures/absent.yaml");
}
