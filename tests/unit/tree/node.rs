use super::*;

fn parse(s: &str) -> Node {
    serde_json::from_str(s).unwrap()
}

#[test]
fn integers_and_reals_keep_their_representation() {
    let n = parse(r#"{"a": 1, "b": 1.0, "c": -3, "d": 2.5e3}"#);
    assert_eq!(n.get("a"), Some(&Node::Int(1)));
    assert_eq!(n.get("b"), Some(&Node::Real(1.0)));
    assert_eq!(n.get("c"), Some(&Node::Int(-3)));
    assert_eq!(n.get("d"), Some(&Node::Real(2500.0)));
}

#[test]
fn unsigned_integers_above_i64_stay_exact() {
    assert_eq!(parse("18446744073709551615"), Node::UInt(u64::MAX));
    assert_eq!(parse("9223372036854775807"), Node::Int(i64::MAX));
    assert_eq!(Node::from(7_u64), Node::Int(7));
    assert!(Node::UInt(u64::MAX).is_number());
    assert_eq!(Node::UInt(u64::MAX).kind_name(), "integer");
    assert_eq!(Node::UInt(u64::MAX).as_i64(), None);
}

#[test]
fn object_order_survives_serialization() {
    let src = r#"{"zeta":1,"alpha":[true,null,"x"],"mid":{"b":2,"a":1}}"#;
    let n = parse(src);
    assert_eq!(serde_json::to_string(&n).unwrap(), src);
    let keys: Vec<&str> = n.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn pointer_walks_objects_and_arrays() {
    let n = parse(r#"{"sourceBin":[{"rect":[0,0,1920,1080]}]}"#);
    assert_eq!(n.pointer("/sourceBin/0/rect/2"), Some(&Node::Int(1920)));
    assert_eq!(n.pointer(""), Some(&n));
    assert_eq!(n.pointer("/sourceBin/1"), None);
    assert_eq!(n.pointer("/sourceBin/x"), None);
    assert_eq!(n.pointer("sourceBin"), None);
}

#[test]
fn clones_share_container_allocations() {
    let n = parse(r#"{"a":{"b":1}}"#);
    let copy = n.clone();
    assert!(n.shares_allocation(&copy));
    assert!(!n.shares_allocation(&parse(r#"{"a":{"b":1}}"#)));
    assert!(!Node::Int(1).shares_allocation(&Node::Int(1)));
}

#[test]
fn display_renders_compact_json_and_special_literals() {
    assert_eq!(parse(r#"{"a": [1, 2.5]}"#).to_string(), r#"{"a":[1,2.5]}"#);
    assert_eq!(Node::Real(f64::INFINITY).to_string(), "Infinity");
    assert_eq!(Node::Real(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(Node::Real(f64::NAN).to_string(), "NaN");
}

#[test]
fn accessors_reject_other_kinds() {
    let n = Node::from("text");
    assert_eq!(n.as_str(), Some("text"));
    assert_eq!(n.as_f64(), None);
    assert_eq!(Node::Int(4).as_f64(), Some(4.0));
    assert_eq!(Node::Real(4.0).as_i64(), None);
    assert!(Node::Null.get("x").is_none());
    assert_eq!(Node::from(vec![Node::Null]).kind_name(), "array");
}
