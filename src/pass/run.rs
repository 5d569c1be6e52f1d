use crate::codec::decode::decode;
use crate::codec::encode::encode;
use crate::foundation::error::{ProjscaleError, ProjscaleResult};
use crate::pass::config::PassConfig;
use crate::pass::report::{PassReport, Warning};
use crate::sanitize::special;
use crate::schema::validate::check_structure;
use crate::schema::version::{declared_version, detect_version};
use crate::transform::walker::TreeWalker;
use crate::tree::node::Node;

/// Result of [`apply_pass`].
#[derive(Clone, Debug)]
pub struct PassOutput {
    /// The rewritten tree, sharing untouched branches with the input.
    pub tree: Node,
    /// What changed.
    pub report: PassReport,
}

/// Result of [`transform_bytes`].
#[derive(Clone, Debug)]
pub struct Transformed {
    /// Encoded output document.
    pub bytes: Vec<u8>,
    /// What changed, including read-time sanitization and document warnings.
    pub report: PassReport,
}

/// Run one pass over an in-memory tree.
///
/// The input is never modified. The output is sanitized, so scaling overflow never leaves an
/// infinite real behind.
#[tracing::instrument(skip(tree, config), fields(kind = %config.kind, factor = %config.factor))]
pub fn apply_pass(tree: &Node, config: &PassConfig) -> PassOutput {
    let walker = TreeWalker::new(config.kind, config.factor, &config.classifier)
        .preserve_audio_duration(config.preserve_audio_duration);
    let (walked, stats) = walker.walk(tree);
    let (tree, sanitized) = special::sanitize(&walked);

    let mut report = PassReport::new(config.kind, config.factor);
    report.scaled = stats.scaled;
    report.audio_exempt = stats.exempt;
    report.sanitized = sanitized;

    tracing::info!(
        scaled = report.scaled,
        audio_exempt = report.audio_exempt,
        sanitized = report.sanitized.len(),
        "pass complete"
    );
    PassOutput { tree, report }
}

/// Collect structural and version warnings for `tree`.
///
/// With `strict`, a structural problem is a [`ProjscaleError::Validation`] and an unsupported
/// version is a [`ProjscaleError::UnsupportedVersion`], checked in that order.
pub fn check_document(tree: &Node, strict: bool) -> ProjscaleResult<Vec<Warning>> {
    let structural = check_structure(tree);
    if strict && !structural.is_empty() {
        let joined = structural
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ProjscaleError::validation(format!(
            "invalid project structure: {joined}"
        )));
    }
    let mut warnings: Vec<Warning> = structural.into_iter().map(Warning::Structural).collect();

    let version = detect_version(tree);
    if !version.is_supported() {
        let declared = declared_version(tree);
        if strict {
            return Err(ProjscaleError::unsupported_version(format!(
                "{} (supported: 4.0, 9.0)",
                declared.as_deref().unwrap_or("<none>")
            )));
        }
        let warning = Warning::UnknownVersion {
            declared,
            legacy: version.is_legacy(),
        };
        tracing::warn!("{warning}");
        warnings.push(warning);
    }
    Ok(warnings)
}

/// Decode, check, transform and encode one document.
#[tracing::instrument(skip(bytes, config), fields(kind = %config.kind, len = bytes.len()))]
pub fn transform_bytes(bytes: &[u8], config: &PassConfig) -> ProjscaleResult<Transformed> {
    let decoded = decode(bytes)?;
    let warnings = check_document(&decoded.tree, config.strict)?;

    let PassOutput { tree, mut report } = apply_pass(&decoded.tree, config);
    let encoded = encode(&tree, &config.output)?;
    let mut sanitized = decoded.sanitized;
    sanitized.append(&mut report.sanitized);
    sanitized.extend(encoded.sanitized);
    report.sanitized = sanitized;
    report.warnings = warnings;

    Ok(Transformed {
        bytes: encoded.bytes,
        report,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/pass/run.rs"]
mod tests;
