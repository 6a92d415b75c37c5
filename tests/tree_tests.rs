use apidiff::Node;
use std::collections::HashMap;

#[test]
fn test_type_name() {
    assert_eq!(Node::Null.type_name(), "null");
    assert_eq!(Node::Bool(true).type_name(), "boolean");
    assert_eq!(Node::Number(42.5).type_name(), "number");
    assert_eq!(Node::Integer(42).type_name(), "number");
    assert_eq!(Node::String("test".to_string()).type_name(), "string");
    assert_eq!(Node::Object(HashMap::new()).type_name(), "mapping");
    assert_eq!(Node::Array(vec![]).type_name(), "sequence");
}

#[test]
fn test_deep_equality_ignores_key_order() {
    let mut a = HashMap::new();
    a.insert("x".to_string(), Node::Number(1.0));
    a.insert("y".to_string(), Node::Array(vec![Node::Null]));
    let mut b = HashMap::new();
    b.insert("y".to_string(), Node::Array(vec![Node::Null]));
    b.insert("x".to_string(), Node::Number(1.0));
    assert_eq!(Node::Object(a), Node::Object(b));
}

#[test]
fn test_sequence_order_matters() {
    let a = Node::Array(vec![Node::Number(1.0), Node::Number(2.0)]);
    let b = Node::Array(vec![Node::Number(2.0), Node::Number(1.0)]);
    assert_ne!(a, b);
}

#[test]
fn test_to_json_integers() {
    let node = Node::Array(vec![Node::Integer(200), Node::Number(0.5), Node::Null]);
    assert_eq!(node.to_json(), serde_json::json!([200, 0.5, null]));
}
