use std::fmt;

/// Closed set of media categories, resolved from an object's `_type` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MediaKind {
    /// Video-bearing items: `VMFile`, `ScreenVMFile`, `UnifiedMedia`, `Group`, `StitchedMedia`.
    Video,
    /// Audio-only items: `AMFile`.
    Audio,
    /// Still images: `IMFile`.
    Image,
    /// Callouts and other annotations: `Callout`.
    Annotation,
    /// Any other tag.
    Unknown,
}

/// Per-kind scaling policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaPolicy {
    /// Whether duration-like fields follow the temporal scale factor.
    pub scales_duration: bool,
    /// Fixed spatial key set of the kind's self-contained definition object, if it has one.
    pub spatial_fields: &'static [&'static str],
}

const ANNOTATION_SPATIAL_FIELDS: &[&str] = &["width", "height", "corner-radius", "stroke-width"];

impl MediaKind {
    /// Resolve a `_type` tag.
    pub fn from_type_tag(tag: &str) -> Self {
        match tag {
            "VMFile" | "ScreenVMFile" | "UnifiedMedia" | "Group" | "StitchedMedia" => Self::Video,
            "AMFile" => Self::Audio,
            "IMFile" => Self::Image,
            "Callout" => Self::Annotation,
            _ => Self::Unknown,
        }
    }

    /// Policy record for this kind.
    pub const fn policy(self) -> MediaPolicy {
        match self {
            Self::Audio => MediaPolicy {
                scales_duration: false,
                spatial_fields: &[],
            },
            Self::Annotation => MediaPolicy {
                scales_duration: true,
                spatial_fields: ANNOTATION_SPATIAL_FIELDS,
            },
            Self::Video | Self::Image | Self::Unknown => MediaPolicy {
                scales_duration: true,
                spatial_fields: &[],
            },
        }
    }

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Image => "image",
            Self::Annotation => "annotation",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/classify/media.rs"]
mod tests;
