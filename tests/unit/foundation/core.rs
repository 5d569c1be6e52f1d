use super::*;

#[test]
fn scale_factor_rejects_non_positive_and_non_finite() {
    assert!(ScaleFactor::new(0.0).is_err());
    assert!(ScaleFactor::new(-1.5).is_err());
    assert!(ScaleFactor::new(f64::NAN).is_err());
    assert!(ScaleFactor::new(f64::INFINITY).is_err());
    assert!(ScaleFactor::from_percent(0.0).is_err());
    assert!(ScaleFactor::from_percent(-50.0).is_err());
}

#[test]
fn percent_converts_to_multiplier() {
    let f = ScaleFactor::from_percent(150.0).unwrap();
    assert_eq!(f.get(), 1.5);
    assert_eq!(f.percent(), 150.0);
    assert_eq!(f.to_string(), "1.5x");
}

#[test]
fn then_and_recip_compose() {
    let a = ScaleFactor::new(2.0).unwrap();
    let b = ScaleFactor::new(0.25).unwrap();
    assert_eq!(a.then(b).unwrap().get(), 0.5);
    assert_eq!(a.recip().unwrap().get(), 0.5);
    assert_eq!(ScaleFactor::default(), ScaleFactor::IDENTITY);
}

#[test]
fn pass_kind_names_are_stable() {
    assert_eq!(PassKind::Spatial.to_string(), "spatial");
    assert_eq!(PassKind::Temporal.as_str(), "temporal");
}
