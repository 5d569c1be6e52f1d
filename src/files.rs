//! Output naming and fail-closed document writing.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::foundation::core::PassKind;
use crate::foundation::error::{ProjscaleError, ProjscaleResult};
use crate::pass::config::PassConfig;
use crate::pass::run::{Transformed, transform_bytes};

/// Extension of project documents.
pub const PROJECT_EXTENSION: &str = "tscproj";

/// Default output path next to `input`.
///
/// `talk.tscproj` scaled spatially by 150% becomes `talk_150pct.tscproj`; scaled temporally by
/// 50.5% it becomes `talk_time50_5pct.tscproj`.
pub fn derive_output_path(input: &Path, kind: PassKind, percent: f64) -> PathBuf {
    let percent = if percent.fract() == 0.0 {
        format!("{percent:.0}pct")
    } else {
        format!("{percent:.1}pct").replace('.', "_")
    };
    let tag = match kind {
        PassKind::Spatial => "",
        PassKind::Temporal => "time",
    };
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = input
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_{tag}{percent}{ext}"))
}

/// True when `path` carries the project extension (case-insensitive).
pub fn has_project_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case(PROJECT_EXTENSION))
}

/// Write `bytes` to `dest` through a temporary sibling file.
///
/// `dest` is either fully replaced or left as it was.
pub fn write_atomic(dest: &Path, bytes: &[u8]) -> ProjscaleResult<()> {
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| {
        ProjscaleError::io(format!("failed to create directory '{}': {e}", dir.display()))
    })?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
        ProjscaleError::io(format!("failed to create temp file in '{}': {e}", dir.display()))
    })?;
    tmp.write_all(bytes)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| ProjscaleError::io(format!("failed to write '{}': {e}", dest.display())))?;
    tmp.persist(dest).map_err(|e| {
        ProjscaleError::io(format!("failed to replace '{}': {}", dest.display(), e.error))
    })?;
    Ok(())
}

/// Transform the document at `input` and write it to `output`.
///
/// Nothing is written unless the whole transform succeeds.
#[tracing::instrument(skip(config), fields(kind = %config.kind, factor = %config.factor))]
pub fn transform_file(
    input: &Path,
    output: &Path,
    config: &PassConfig,
) -> ProjscaleResult<Transformed> {
    let bytes = fs::read(input)
        .map_err(|e| ProjscaleError::io(format!("failed to read '{}': {e}", input.display())))?;
    let out = transform_bytes(&bytes, config)?;
    write_atomic(output, &out.bytes)?;
    tracing::info!(output = %output.display(), bytes = out.bytes.len(), "wrote project");
    Ok(out)
}

#[cfg(test)]
#[path = "../tests/unit/files.rs"]
mod tests;
