use std::fmt;

use crate::foundation::core::{PassKind, ScaleFactor};
use crate::sanitize::special::SanitizationEvent;
use crate::schema::validate::StructuralWarning;

/// Non-fatal finding attached to a pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    /// Unexpected document shape.
    Structural(StructuralWarning),
    /// Version outside the supported set.
    UnknownVersion {
        /// Raw `version` value, if any.
        declared: Option<String>,
        /// Whether the version is a known pre-2020 format.
        legacy: bool,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structural(w) => fmt::Display::fmt(w, f),
            Self::UnknownVersion { declared, legacy } => {
                let declared = declared.as_deref().unwrap_or("<none>");
                if *legacy {
                    write!(f, "legacy project version {declared}; supported versions are 4.0 and 9.0")
                } else {
                    write!(f, "unknown project version {declared}; supported versions are 4.0 and 9.0")
                }
            }
        }
    }
}

/// What a pass did.
#[derive(Clone, Debug, PartialEq)]
pub struct PassReport {
    /// Pass that ran.
    pub kind: PassKind,
    /// Factor it applied.
    pub factor: ScaleFactor,
    /// Fields rewritten.
    pub scaled: usize,
    /// Fields left unscaled because of the audio duration rule.
    pub audio_exempt: usize,
    /// Special values replaced, on read and after scaling.
    pub sanitized: Vec<SanitizationEvent>,
    /// Non-fatal findings.
    pub warnings: Vec<Warning>,
}

impl PassReport {
    pub(crate) fn new(kind: PassKind, factor: ScaleFactor) -> Self {
        Self {
            kind,
            factor,
            scaled: 0,
            audio_exempt: 0,
            sanitized: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl fmt::Display for PassReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pass {}: {} scaled, {} audio-exempt, {} sanitized, {} warnings",
            self.kind,
            self.factor,
            self.scaled,
            self.audio_exempt,
            self.sanitized.len(),
            self.warnings.len()
        )
    }
}
