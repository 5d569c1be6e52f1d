use super::*;

fn root() -> PropertyPath<'static> {
    PropertyPath::root()
}

#[test]
fn geometry_keys_are_spatial() {
    for key in ["width", "height", "translation1", "scale2", "geometryCrop3", "stroke-width"] {
        assert_eq!(classify(key, &root()), Category::SpatialScalar, "{key}");
    }
    assert_eq!(classify("default-scale", &root()), Category::SpatialScalar);
    assert_eq!(classify("rect", &root()), Category::SpatialArray(4));
    assert_eq!(classify("trackRect", &root()), Category::SpatialArray(4));
}

#[test]
fn time_keys_are_temporal() {
    for key in ["start", "duration", "mediaStart", "mediaDuration", "trimStartSum", "time", "endTime"]
    {
        assert_eq!(classify(key, &root()), Category::TemporalScalar, "{key}");
    }
    assert_eq!(classify("range", &root()), Category::TemporalRange(2));
}

#[test]
fn measurement_keys_never_scale() {
    for key in ["sampleRate", "integratedLUFS", "peakLevel"] {
        assert_eq!(classify(key, &root()), Category::PassThrough);
        assert!(is_excluded(key));
    }
    assert!(!is_excluded("width"));
}

#[test]
fn value_follows_its_animated_property() {
    let spatial = root().with_key("translation0").with_key("keyframes").with_index(0);
    assert_eq!(classify("value", &spatial), Category::SpatialScalar);

    let wrapped = root().with_key("parameters").with_key("scale0");
    assert_eq!(classify("defaultValue", &wrapped), Category::SpatialScalar);

    let opacity = root().with_key("opacity").with_key("keyframes").with_index(1);
    assert_eq!(classify("value", &opacity), Category::PassThrough);

    let timed = root().with_key("start");
    assert_eq!(classify("value", &timed), Category::PassThrough);

    assert_eq!(classify("value", &root()), Category::PassThrough);
}

#[test]
fn unknown_keys_pass_through() {
    assert_eq!(classify("ident", &root()), Category::PassThrough);
    assert_eq!(classify("Width", &root()), Category::PassThrough);
    assert_eq!(Category::PassThrough.pass(), None);
    assert_eq!(Category::SpatialArray(4).pass(), Some(PassKind::Spatial));
    assert_eq!(Category::TemporalRange(2).pass(), Some(PassKind::Temporal));
}

#[test]
fn definition_is_the_only_self_contained_object() {
    let fields = self_contained_fields("def").unwrap();
    assert_eq!(fields, ["width", "height", "corner-radius", "stroke-width"]);
    assert!(self_contained_fields("parameters").is_none());
    assert!(is_duration_like("mediaDuration"));
    assert!(!is_duration_like("start"));
}
