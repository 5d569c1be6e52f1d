use std::fmt;

use crate::schema::version::{self, VERSION_KEY};
use crate::tree::node::Node;

/// Fields a supported document must carry at its root.
pub const REQUIRED_ROOT_FIELDS: &[&str] = &[VERSION_KEY, "editRate", "width", "height"];

/// A non-fatal finding about the document's shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuralWarning {
    /// Where the problem is, e.g. `$.sourceBin[2]`.
    pub path: String,
    /// What is wrong.
    pub message: String,
}

impl StructuralWarning {
    /// Build a warning at `path`.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for StructuralWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Check the handful of structural facts the tool relies on.
///
/// Unknown keys and unexpected nesting below these points are never reported.
pub fn check_structure(tree: &Node) -> Vec<StructuralWarning> {
    let Some(root) = tree.as_object() else {
        return vec![StructuralWarning::new(
            "$",
            format!("document root must be an object, got {}", tree.kind_name()),
        )];
    };

    let mut out = Vec::new();

    let version = version::detect_version(tree);
    if version.is_supported() {
        for field in REQUIRED_ROOT_FIELDS {
            if !root.contains_key(*field) {
                out.push(StructuralWarning::new(
                    "$",
                    format!("missing required field for version {version}: {field}"),
                ));
            }
        }
    }

    if let Some(bin) = root.get("sourceBin") {
        match bin.as_array() {
            None => out.push(StructuralWarning::new(
                "$.sourceBin",
                format!("must be an array, got {}", bin.kind_name()),
            )),
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    let path = format!("$.sourceBin[{i}]");
                    match item.as_object() {
                        None => out.push(StructuralWarning::new(path, "must be an object")),
                        Some(obj) if !obj.contains_key("id") => {
                            out.push(StructuralWarning::new(path, "missing 'id' field"))
                        }
                        Some(_) => {}
                    }
                }
            }
        }
    }

    if let Some(timeline) = root.get("timeline")
        && timeline.as_object().is_none()
    {
        out.push(StructuralWarning::new(
            "$.timeline",
            format!("must be an object, got {}", timeline.kind_name()),
        ));
    }

    for w in &out {
        tracing::warn!(path = %w.path, "{}", w.message);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
