use super::*;
use crate::sanitize::special::{EventLocation, SpecialValue};
use crate::tree::node::Map;

fn sample() -> Node {
    let mut map = Map::new();
    map.insert("b".into(), Node::Int(1));
    map.insert("a".into(), Node::array(vec![Node::Real(1.5), Node::from("é")]));
    map.insert("e".into(), Node::object(Map::new()));
    Node::object(map)
}

#[test]
fn pretty_output_uses_two_spaces_and_no_trailing_newline() {
    let out = String::from_utf8(encode(&sample(), &EncodeOptions::default()).unwrap().bytes).unwrap();
    assert_eq!(out, "{\n  \"b\": 1,\n  \"a\": [\n    1.5,\n    \"é\"\n  ],\n  \"e\": {}\n}");
}

#[test]
fn compact_output_is_single_line() {
    let out = String::from_utf8(encode(&sample(), &EncodeOptions::compact()).unwrap().bytes).unwrap();
    assert_eq!(out, r#"{"b":1,"a":[1.5,"é"],"e":{}}"#);
}

#[test]
fn non_finite_reals_are_written_as_sentinels() {
    let tree = Node::array(vec![
        Node::Real(f64::INFINITY),
        Node::Real(f64::NEG_INFINITY),
        Node::Real(f64::NAN),
    ]);
    let out = encode(&tree, &EncodeOptions::compact()).unwrap();
    let back: Node = serde_json::from_slice(&out.bytes).unwrap();
    assert_eq!(
        back,
        Node::array(vec![
            Node::Real(f64::MAX),
            Node::Real(-f64::MAX),
            Node::Real(0.0),
        ])
    );
    assert!(!String::from_utf8(out.bytes).unwrap().contains("inf"));

    assert_eq!(out.sanitized.len(), 3);
    assert_eq!(out.sanitized[2].location, EventLocation::Path("$[2]".into()));
    assert_eq!(out.sanitized[2].original, SpecialValue::NaN);
}

#[test]
fn finite_trees_report_nothing() {
    let out = encode(&sample(), &EncodeOptions::compact()).unwrap();
    assert!(out.sanitized.is_empty());
}

#[test]
fn reals_keep_a_fractional_marker() {
    let out = encode(&Node::Real(200.0), &EncodeOptions::compact()).unwrap();
    assert_eq!(out.bytes, b"200.0");
}
