use super::*;

fn parse(s: &str) -> Node {
    serde_json::from_str(s).unwrap()
}

#[test]
fn sentinels_preserve_sign_and_zero_nan() {
    assert_eq!(sanitize_f64(f64::INFINITY), f64::MAX);
    assert_eq!(sanitize_f64(f64::NEG_INFINITY), -f64::MAX);
    assert_eq!(sanitize_f64(f64::NAN), 0.0);
    assert_eq!(sanitize_f64(-12.5), -12.5);
    assert_eq!(SpecialValue::of(1.0), None);
}

#[test]
fn tree_pass_replaces_nested_specials_with_paths() {
    let mut map = Map::new();
    map.insert("ok".to_string(), Node::Real(1.5));
    map.insert(
        "tracks".to_string(),
        Node::array(vec![Node::Int(1), Node::Real(f64::NAN)]),
    );
    map.insert("peak".to_string(), Node::Real(f64::INFINITY));
    let tree = Node::object(map);

    let (clean, events) = sanitize(&tree);
    assert_eq!(clean.pointer("/tracks/1"), Some(&Node::Real(0.0)));
    assert_eq!(clean.get("peak"), Some(&Node::Real(f64::MAX)));
    assert_eq!(clean.get("ok"), Some(&Node::Real(1.5)));

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].location, EventLocation::Path("$.tracks[1]".into()));
    assert_eq!(events[0].original, SpecialValue::NaN);
    assert_eq!(events[1].location, EventLocation::Path("$.peak".into()));
    assert_eq!(events[1].replacement, f64::MAX);
}

#[test]
fn clean_tree_is_returned_shared() {
    let tree = parse(r#"{"a":[1,2.5,{"b":null}]}"#);
    let (clean, events) = sanitize(&tree);
    assert!(events.is_empty());
    assert!(clean.shares_allocation(&tree));
}

#[test]
fn relax_rewrites_bare_literals_outside_strings() {
    let src = "{\n  \"a\": -Infinity,\n  \"b\": [NaN, Infinity],\n  \"c\": \"NaN -Infinity\"\n}";
    let (text, events) = relax_special_literals(src);
    let tree = parse(&text);
    assert_eq!(tree.get("a"), Some(&Node::Real(-f64::MAX)));
    assert_eq!(tree.pointer("/b/0"), Some(&Node::Real(0.0)));
    assert_eq!(tree.pointer("/b/1"), Some(&Node::Real(f64::MAX)));
    assert_eq!(tree.get("c"), Some(&Node::from("NaN -Infinity")));

    assert_eq!(events.len(), 3);
    assert_eq!(events[0].location, EventLocation::Source { line: 2, column: 8 });
    assert_eq!(events[0].original, SpecialValue::NegativeInfinity);
    assert_eq!(events[1].location, EventLocation::Source { line: 3, column: 9 });
    assert_eq!(events[2].original, SpecialValue::PositiveInfinity);
}

#[test]
fn relax_ignores_escaped_quotes_and_borrows_clean_text() {
    let src = r#"{"s": "say \"NaN\" twice", "n": -5}"#;
    let (text, events) = relax_special_literals(src);
    assert!(matches!(text, Cow::Borrowed(_)));
    assert!(events.is_empty());
}

#[test]
fn relax_rewrites_overflowing_numbers_only() {
    let src = r#"[1e400, -1e400, 1e-400, 12.5e3, "1e400"]"#;
    let (text, events) = relax_special_literals(src);
    let tree = parse(&text);
    assert_eq!(tree.pointer("/0"), Some(&Node::Real(f64::MAX)));
    assert_eq!(tree.pointer("/1"), Some(&Node::Real(-f64::MAX)));
    assert_eq!(tree.pointer("/3"), Some(&Node::Real(12500.0)));
    assert_eq!(tree.pointer("/4"), Some(&Node::from("1e400")));

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].location, EventLocation::Source { line: 1, column: 2 });
    assert_eq!(events[1].location, EventLocation::Source { line: 1, column: 9 });
    assert!(text.contains("1e-400"));
}
