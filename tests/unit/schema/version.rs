use super::*;

fn doc(s: &str) -> Node {
    serde_json::from_str(s).unwrap()
}

#[test]
fn parse_round_trips_known_versions() {
    for v in ProjectVersion::ALL {
        if v != ProjectVersion::Unknown {
            assert_eq!(ProjectVersion::parse(v.as_str()), v);
        }
    }
    assert_eq!(ProjectVersion::parse("10.0"), ProjectVersion::Unknown);
}

#[test]
fn support_and_legacy_are_disjoint() {
    for v in ProjectVersion::ALL {
        assert!(!(v.is_supported() && v.is_legacy()), "{v}");
    }
    assert!(ProjectVersion::V4_0.is_supported());
    assert!(ProjectVersion::V9_0.is_supported());
    assert!(ProjectVersion::V2_0.is_legacy());
    assert!(!ProjectVersion::Unknown.is_legacy());
}

#[test]
fn edit_rates_by_version() {
    assert_eq!(ProjectVersion::V4_0.edit_rate(), 60);
    assert_eq!(ProjectVersion::V9_0.edit_rate(), 705_600_000);
    assert_eq!(ProjectVersion::Unknown.edit_rate(), 60);
}

#[test]
fn detects_from_root_version_string() {
    assert_eq!(detect_version(&doc(r#"{"version":"9.0"}"#)), ProjectVersion::V9_0);
    assert_eq!(detect_version(&doc(r#"{"version":9}"#)), ProjectVersion::Unknown);
    assert_eq!(detect_version(&doc("[]")), ProjectVersion::Unknown);

    assert_eq!(declared_version(&doc(r#"{"version":"7.1"}"#)), Some("7.1".to_string()));
    assert_eq!(declared_version(&doc(r#"{"version":9}"#)), Some("9".to_string()));
    assert_eq!(declared_version(&doc("{}")), None);
}
