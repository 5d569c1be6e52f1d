use super::*;
use crate::sanitize::special::{EventLocation, SpecialValue};

#[test]
fn keeps_key_order_and_integer_kinds() {
    let d = decode(br#"{"z":1,"a":2.0,"m":[true,null,"s"]}"#).unwrap();
    let keys: Vec<&str> = d.tree.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "a", "m"]);
    assert_eq!(d.tree.get("z"), Some(&Node::Int(1)));
    assert_eq!(d.tree.get("a"), Some(&Node::Real(2.0)));
    assert!(d.sanitized.is_empty());
}

#[test]
fn strips_leading_bom() {
    let d = decode("\u{feff}{\"width\":3}".as_bytes()).unwrap();
    assert_eq!(d.tree.get("width"), Some(&Node::Int(3)));
}

#[test]
fn rejects_invalid_utf8_and_malformed_json() {
    let err = decode(&[b'{', 0xff, b'}']).unwrap_err();
    assert!(matches!(err, ProjscaleError::Parse(_)));
    assert!(err.to_string().contains("UTF-8"));

    let err = decode(b"{\n  \"a\": 1,\n}").unwrap_err();
    assert!(matches!(err, ProjscaleError::Parse(_)));
    assert!(err.to_string().contains("line 3"), "{err}");
}

#[test]
fn accepts_bare_special_literals() {
    let d = decode(br#"{"integratedLUFS": -Infinity, "peak": NaN}"#).unwrap();
    assert_eq!(d.tree.get("integratedLUFS"), Some(&Node::Real(-f64::MAX)));
    assert_eq!(d.tree.get("peak"), Some(&Node::Real(0.0)));
    assert_eq!(d.sanitized.len(), 2);
    assert_eq!(d.sanitized[0].original, SpecialValue::NegativeInfinity);
    assert!(matches!(d.sanitized[0].location, EventLocation::Source { line: 1, .. }));
}

#[test]
fn numbers_beyond_double_range_become_sentinels() {
    let d = decode(br#"{"integratedLUFS": 1e400, "width": 10, "peak": -2E+999}"#).unwrap();
    assert_eq!(d.tree.get("integratedLUFS"), Some(&Node::Real(f64::MAX)));
    assert_eq!(d.tree.get("peak"), Some(&Node::Real(-f64::MAX)));
    assert_eq!(d.tree.get("width"), Some(&Node::Int(10)));

    assert_eq!(d.sanitized.len(), 2);
    assert_eq!(d.sanitized[0].original, SpecialValue::PositiveInfinity);
    assert_eq!(d.sanitized[0].location, EventLocation::Source { line: 1, column: 20 });
    assert_eq!(d.sanitized[1].original, SpecialValue::NegativeInfinity);
}

#[test]
fn unsigned_integers_round_trip_exactly() {
    let src = br#"{"unknownId":18446744073709551615,"small":9223372036854775807}"#;
    let d = decode(src).unwrap();
    assert_eq!(d.tree.get("unknownId"), Some(&Node::UInt(u64::MAX)));
    assert_eq!(d.tree.get("small"), Some(&Node::Int(i64::MAX)));
    assert_eq!(serde_json::to_vec(&d.tree).unwrap(), src);
}
