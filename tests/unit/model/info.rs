use super::*;

fn doc(s: &str) -> Node {
    serde_json::from_str(s).unwrap()
}

const PROJECT: &str = r#"{
    "title": "demo",
    "version": "4.0",
    "editRate": 60,
    "width": 1280,
    "height": 720,
    "videoFormatFrameRate": 60,
    "sourceBin": [{"id": 1}, {"id": 2}],
    "timeline": {"sceneTrack": {"scenes": [{"csml": {"tracks": [
        {"trackIndex": 0, "medias": [
            {"_type": "VMFile", "start": 0, "duration": 300},
            {"_type": "Callout", "start": 60, "duration": 60}
        ]},
        {"trackIndex": 1, "medias": [
            {"_type": "AMFile", "start": 120, "duration": 480}
        ]},
        {"trackIndex": 2}
    ]}}]}}
}"#;

#[test]
fn summarizes_a_complete_project() {
    let info = ProjectInfo::from_tree(&doc(PROJECT));
    assert_eq!(info.version, ProjectVersion::V4_0);
    assert_eq!(info.title.as_deref(), Some("demo"));
    assert_eq!(info.edit_rate, 60);
    assert_eq!(info.canvas, Canvas { width: 1280.0, height: 720.0, frame_rate: 60.0 });
    assert_eq!(info.source_bin_items, 2);
    assert_eq!(info.tracks, 3);
    assert_eq!(info.media_counts.get(&MediaKind::Video), Some(&1));
    assert_eq!(info.media_counts.get(&MediaKind::Audio), Some(&1));
    assert_eq!(info.media_counts.get(&MediaKind::Annotation), Some(&1));
    assert_eq!(info.media_total(), 3);
    assert_eq!(info.duration_ticks, 600);
    assert_eq!(info.duration_seconds(), 10.0);
    assert!(info.warnings.is_empty());
}

#[test]
fn missing_fields_fall_back_to_defaults_with_warnings() {
    let tree = doc(r#"{"version":"9.0"}"#);
    let info = ProjectInfo::from_tree(&tree);
    assert_eq!(info.edit_rate, 705_600_000);
    assert_eq!(info.canvas.width, DEFAULT_WIDTH);
    assert_eq!(info.canvas.height, DEFAULT_HEIGHT);
    assert_eq!(info.canvas.frame_rate, DEFAULT_FRAME_RATE);
    assert_eq!(info.tracks, 0);
    assert_eq!(info.duration_ticks, 0);

    let paths: Vec<&str> = info.warnings.iter().map(|w| w.path.as_str()).collect();
    assert_eq!(paths, ["$.editRate", "$.width", "$.height", "$.videoFormatFrameRate"]);

    // The view never writes its defaults back.
    assert_eq!(tree, doc(r#"{"version":"9.0"}"#));
}

#[test]
fn display_lists_unknown_versions_verbatim() {
    let info = ProjectInfo::from_tree(&doc(r#"{"version":"12.5","editRate":30}"#));
    let text = info.to_string();
    assert!(text.contains("version:     12.5 (unknown)"), "{text}");
    assert!(text.contains("edit rate:   30 ticks/s"), "{text}");
}
