//! Fixed key tables driving classification.
//!
//! Classification is by bare key name wherever the key appears. The only keys whose meaning
//! depends on ancestry are the value keys (`value`, `defaultValue`), which take the category of
//! the animated property that owns them.

use crate::classify::media::MediaKind;
use crate::foundation::core::PassKind;
use crate::tree::path::PropertyPath;

/// Scaling category of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Single geometric number.
    SpatialScalar,
    /// Fixed-length geometric array, e.g. `[x, y, width, height]`.
    SpatialArray(usize),
    /// Single time value in ticks.
    TemporalScalar,
    /// Fixed-length tick range, e.g. `[start, end]`.
    TemporalRange(usize),
    /// Never scaled.
    PassThrough,
}

impl Category {
    /// The pass that rewrites fields of this category.
    pub fn pass(self) -> Option<PassKind> {
        match self {
            Self::SpatialScalar | Self::SpatialArray(_) => Some(PassKind::Spatial),
            Self::TemporalScalar | Self::TemporalRange(_) => Some(PassKind::Temporal),
            Self::PassThrough => None,
        }
    }
}

/// Geometry scalars. Scale axes compose multiplicatively with the stored scale.
pub const SPATIAL_SCALAR_KEYS: &[&str] = &[
    "width",
    "height",
    "widthAttr",
    "heightAttr",
    "translation0",
    "translation1",
    "translation2",
    "scale0",
    "scale1",
    "scale2",
    "geometryCrop0",
    "geometryCrop1",
    "geometryCrop2",
    "geometryCrop3",
    "corner-radius",
    "stroke-width",
    "default-width",
    "default-height",
    "default-translation0",
    "default-translation1",
    "default-translation2",
    "default-scale",
    "default-scale0",
    "default-scale1",
    "default-scale2",
];

/// `[x, y, width, height]` rectangles.
pub const SPATIAL_ARRAY_KEYS: &[&str] = &["rect", "trackRect"];

/// Element count of a spatial rectangle.
pub const RECT_LEN: usize = 4;

/// Time placement and duration scalars.
pub const TEMPORAL_SCALAR_KEYS: &[&str] = &[
    "start",
    "duration",
    "mediaStart",
    "mediaDuration",
    "trimStartSum",
    "time",
    "endTime",
];

/// `[start, end]` tick ranges.
pub const TEMPORAL_RANGE_KEYS: &[&str] = &["range"];

/// Element count of a tick range.
pub const RANGE_LEN: usize = 2;

/// Measurement fields that are never scaled and never descended into.
pub const EXCLUDED_KEYS: &[&str] = &["sampleRate", "integratedLUFS", "peakLevel"];

/// Keys classified through their animated property instead of their own name.
pub const VALUE_KEYS: &[&str] = &["value", "defaultValue"];

/// Duration-like fields kept unscaled for media whose policy does not scale duration.
pub const DURATION_LIKE_KEYS: &[&str] = &["duration", "mediaStart", "mediaDuration"];

/// Key holding an animation curve.
pub const KEYFRAMES_KEY: &str = "keyframes";

/// Key holding a callout definition.
pub const DEFINITION_KEY: &str = "def";

/// Key holding a media type tag.
pub const TYPE_TAG_KEY: &str = "_type";

/// Classify `key` found in the object at `path` using the built-in tables only.
pub fn classify(key: &str, path: &PropertyPath<'_>) -> Category {
    if EXCLUDED_KEYS.contains(&key) {
        return Category::PassThrough;
    }
    if VALUE_KEYS.contains(&key) {
        return match path.animated_property() {
            Some(owner) if SPATIAL_SCALAR_KEYS.contains(&owner) => Category::SpatialScalar,
            _ => Category::PassThrough,
        };
    }
    if SPATIAL_SCALAR_KEYS.contains(&key) {
        Category::SpatialScalar
    } else if SPATIAL_ARRAY_KEYS.contains(&key) {
        Category::SpatialArray(RECT_LEN)
    } else if TEMPORAL_SCALAR_KEYS.contains(&key) {
        Category::TemporalScalar
    } else if TEMPORAL_RANGE_KEYS.contains(&key) {
        Category::TemporalRange(RANGE_LEN)
    } else {
        Category::PassThrough
    }
}

/// True for the built-in measurement exclusions.
pub fn is_excluded(key: &str) -> bool {
    EXCLUDED_KEYS.contains(&key)
}

/// True for fields exempt from temporal scaling under a duration-preserving media kind.
pub fn is_duration_like(key: &str) -> bool {
    DURATION_LIKE_KEYS.contains(&key)
}

/// Fixed spatial key set for a named self-contained sub-object.
pub fn self_contained_fields(key: &str) -> Option<&'static [&'static str]> {
    (key == DEFINITION_KEY).then(|| MediaKind::Annotation.policy().spatial_fields)
}

#[cfg(test)]
#[path = "../../tests/unit/classify/table.rs"]
mod tests;
