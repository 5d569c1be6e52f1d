use std::collections::BTreeMap;
use std::fmt;

use crate::classify::media::MediaKind;
use crate::classify::table::TYPE_TAG_KEY;
use crate::schema::validate::StructuralWarning;
use crate::schema::version::{self, ProjectVersion};
use crate::tree::node::Node;

/// Canvas width used when the document does not state one.
pub const DEFAULT_WIDTH: f64 = 1920.0;
/// Canvas height used when the document does not state one.
pub const DEFAULT_HEIGHT: f64 = 1080.0;
/// Frame rate used when the document does not state one.
pub const DEFAULT_FRAME_RATE: f64 = 30.0;

/// Output canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Video frame rate.
    pub frame_rate: f64,
}

/// Summary of a project, derived without modifying the tree.
///
/// Defaults filled in for missing fields exist only in this view.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectInfo {
    /// Detected format version.
    pub version: ProjectVersion,
    /// Raw `version` value, when present.
    pub declared_version: Option<String>,
    /// Document title, when present.
    pub title: Option<String>,
    /// Ticks per second.
    pub edit_rate: i64,
    /// Output canvas.
    pub canvas: Canvas,
    /// Number of entries in `sourceBin`.
    pub source_bin_items: usize,
    /// Number of timeline tracks across all scenes.
    pub tracks: usize,
    /// Timeline media items per kind.
    pub media_counts: BTreeMap<MediaKind, usize>,
    /// End of the last timeline media item, in ticks.
    pub duration_ticks: i64,
    /// Missing fields replaced by defaults.
    pub warnings: Vec<StructuralWarning>,
}

impl ProjectInfo {
    /// Summarize `tree`.
    pub fn from_tree(tree: &Node) -> Self {
        let version = version::detect_version(tree);
        let mut warnings = Vec::new();

        let edit_rate = match tree.get("editRate").and_then(Node::as_i64) {
            Some(rate) if rate > 0 => rate,
            _ => {
                warnings.push(StructuralWarning::new(
                    "$.editRate",
                    format!("missing or invalid, using {}", version.edit_rate()),
                ));
                version.edit_rate()
            }
        };

        let mut number_or = |key: &str, default: f64| {
            tree.get(key).and_then(Node::as_f64).unwrap_or_else(|| {
                warnings.push(StructuralWarning::new(
                    format!("$.{key}"),
                    format!("missing, using {default}"),
                ));
                default
            })
        };
        let canvas = Canvas {
            width: number_or("width", DEFAULT_WIDTH),
            height: number_or("height", DEFAULT_HEIGHT),
            frame_rate: number_or("videoFormatFrameRate", DEFAULT_FRAME_RATE),
        };

        let source_bin_items = tree
            .get("sourceBin")
            .and_then(Node::as_array)
            .map_or(0, <[Node]>::len);

        let tracks: Vec<&Node> = timeline_tracks(tree).collect();
        let mut media_counts = BTreeMap::new();
        let mut duration_ticks = 0_i64;
        for media in tracks.iter().flat_map(|t| array_at(t, "medias")) {
            let kind = media
                .get(TYPE_TAG_KEY)
                .and_then(Node::as_str)
                .map_or(MediaKind::Unknown, MediaKind::from_type_tag);
            *media_counts.entry(kind).or_insert(0) += 1;

            let start = media.get("start").and_then(Node::as_f64).unwrap_or(0.0);
            let duration = media.get("duration").and_then(Node::as_f64).unwrap_or(0.0);
            duration_ticks = duration_ticks.max((start + duration) as i64);
        }

        Self {
            version,
            declared_version: version::declared_version(tree),
            title: tree.get("title").and_then(Node::as_str).map(str::to_owned),
            edit_rate,
            canvas,
            source_bin_items,
            tracks: tracks.len(),
            media_counts,
            duration_ticks,
            warnings,
        }
    }

    /// Timeline duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.duration_ticks as f64 / self.edit_rate as f64
    }

    /// Total number of timeline media items.
    pub fn media_total(&self) -> usize {
        self.media_counts.values().sum()
    }
}

fn array_at<'a>(node: &'a Node, key: &str) -> &'a [Node] {
    node.get(key).and_then(Node::as_array).unwrap_or_default()
}

// timeline.sceneTrack.scenes[*].csml.tracks[*]
fn timeline_tracks(tree: &Node) -> impl Iterator<Item = &Node> {
    let scenes = tree
        .get("timeline")
        .and_then(|t| t.get("sceneTrack"))
        .map_or(&[][..], |st| array_at(st, "scenes"));
    scenes
        .iter()
        .filter_map(|scene| scene.get("csml"))
        .flat_map(|csml| array_at(csml, "tracks"))
}

impl fmt::Display for ProjectInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.title {
            writeln!(f, "title:       {title}")?;
        }
        match &self.declared_version {
            Some(raw) if self.version == ProjectVersion::Unknown => {
                writeln!(f, "version:     {raw} (unknown)")?
            }
            _ => writeln!(f, "version:     {}", self.version)?,
        }
        writeln!(f, "edit rate:   {} ticks/s", self.edit_rate)?;
        writeln!(
            f,
            "canvas:      {}x{} @ {} fps",
            self.canvas.width, self.canvas.height, self.canvas.frame_rate
        )?;
        writeln!(f, "source bin:  {} items", self.source_bin_items)?;
        writeln!(f, "tracks:      {}", self.tracks)?;
        write!(f, "media:       {}", self.media_total())?;
        for (kind, count) in &self.media_counts {
            write!(f, " {kind}={count}")?;
        }
        writeln!(f)?;
        write!(
            f,
            "duration:    {} ticks ({:.3} s)",
            self.duration_ticks,
            self.duration_seconds()
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/info.rs"]
mod tests;
