//! projscale rescales Camtasia `.tscproj` project documents.
//!
//! A project is an untyped JSON tree. One pass multiplies every field of one semantic
//! category by a factor and leaves all other fields, known or not, exactly as they were:
//!
//! - the **spatial** pass scales geometry (sizes, positions, crops, rectangles);
//! - the **temporal** pass scales time placement and duration, except that audio media keep
//!   their own duration.
//!
//! Fields are classified by key name through fixed tables, with the animated property owning a
//! `value` deciding how that value scales. Integers stay integers, reals stay reals, and the
//! output never contains `NaN` or infinities.
//!
//! The usual entry points are [`transform_bytes`] for whole documents and [`apply_pass`] for
//! trees already in memory.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod classify;
mod codec;
mod files;
mod foundation;
mod model;
mod pass;
mod sanitize;
mod schema;
mod transform;
mod tree;

pub use crate::classify::media::{MediaKind, MediaPolicy};
pub use crate::classify::rules::{Classifier, ExclusionRule};
pub use crate::classify::table::Category;
pub use crate::codec::decode::{Decoded, decode, decode_str};
pub use crate::codec::encode::{EncodeOptions, Encoded, encode};
pub use crate::files::{derive_output_path, has_project_extension, transform_file, write_atomic};
pub use crate::foundation::core::{PassKind, ScaleFactor};
pub use crate::foundation::error::{ProjscaleError, ProjscaleResult};
pub use crate::model::info::{Canvas, ProjectInfo};
pub use crate::pass::config::PassConfig;
pub use crate::pass::report::{PassReport, Warning};
pub use crate::pass::run::{PassOutput, Transformed, apply_pass, check_document, transform_bytes};
pub use crate::sanitize::special::{
    EventLocation, SanitizationEvent, SpecialValue, sanitize, sanitize_f64,
};
pub use crate::schema::validate::{StructuralWarning, check_structure};
pub use crate::schema::version::{ProjectVersion, detect_version};
pub use crate::transform::numeric::{Rounding, ScaleContext, ScaleOutcome, scale, scale_number};
pub use crate::transform::walker::{TreeWalker, WalkStats};
pub use crate::tree::node::{Map, Node};
pub use crate::tree::path::{PathSegment, PropertyPath};
