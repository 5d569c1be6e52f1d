use std::fmt;

use crate::tree::node::Node;

/// Top-level key holding the format version string.
pub const VERSION_KEY: &str = "version";

/// Known project format versions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectVersion {
    /// Oldest format.
    V1_0,
    /// 2018 format.
    V2_0,
    /// 2019 format.
    V3_0,
    /// 2020 format, 60 ticks per second.
    V4_0,
    /// 2021+ format, 705 600 000 ticks per second.
    V9_0,
    /// Absent or unrecognized version string.
    Unknown,
}

impl ProjectVersion {
    /// Every variant, oldest first.
    pub const ALL: [Self; 6] = [
        Self::V1_0,
        Self::V2_0,
        Self::V3_0,
        Self::V4_0,
        Self::V9_0,
        Self::Unknown,
    ];

    /// Parse a version string; anything unrecognized is [`ProjectVersion::Unknown`].
    pub fn parse(s: &str) -> Self {
        match s {
            "1.0" => Self::V1_0,
            "2.0" => Self::V2_0,
            "3.0" => Self::V3_0,
            "4.0" => Self::V4_0,
            "9.0" => Self::V9_0,
            _ => Self::Unknown,
        }
    }

    /// Version string as written in documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V1_0 => "1.0",
            Self::V2_0 => "2.0",
            Self::V3_0 => "3.0",
            Self::V4_0 => "4.0",
            Self::V9_0 => "9.0",
            Self::Unknown => "unknown",
        }
    }

    /// Ticks per second used when the document does not state `editRate`.
    pub fn edit_rate(self) -> i64 {
        match self {
            Self::V9_0 => 705_600_000,
            _ => 60,
        }
    }

    /// Versions this tool is tested against.
    pub fn is_supported(self) -> bool {
        matches!(self, Self::V4_0 | Self::V9_0)
    }

    /// Pre-2020 formats; detected and reported, never specially handled.
    pub fn is_legacy(self) -> bool {
        matches!(self, Self::V1_0 | Self::V2_0 | Self::V3_0)
    }
}

impl fmt::Display for ProjectVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw `version` value of the document root, rendered as text.
///
/// `None` when the root is not an object or has no `version` key.
pub fn declared_version(tree: &Node) -> Option<String> {
    tree.get(VERSION_KEY).map(|v| match v {
        Node::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Detect the document format version.
pub fn detect_version(tree: &Node) -> ProjectVersion {
    let version = tree
        .get(VERSION_KEY)
        .and_then(Node::as_str)
        .map_or(ProjectVersion::Unknown, ProjectVersion::parse);
    tracing::debug!(%version, "detected project version");
    version
}

#[cfg(test)]
#[path = "../../tests/unit/schema/version.rs"]
mod tests;
