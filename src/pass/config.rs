use crate::classify::rules::{Classifier, ExclusionRule};
use crate::codec::encode::EncodeOptions;
use crate::foundation::core::{PassKind, ScaleFactor};

/// Everything a pass needs besides the document.
#[derive(Clone, Debug)]
pub struct PassConfig {
    /// Which category of fields is rewritten.
    pub kind: PassKind,
    /// Multiplier applied to every classified field.
    pub factor: ScaleFactor,
    /// Keep duration-like fields of audio media unscaled (temporal pass only).
    pub preserve_audio_duration: bool,
    /// Turn structural and version warnings into errors.
    pub strict: bool,
    /// Classification tables plus caller exclusions.
    pub classifier: Classifier,
    /// Output layout for [`crate::transform_bytes`].
    pub output: EncodeOptions,
}

impl PassConfig {
    /// Pass of `kind` with default flags.
    pub fn new(kind: PassKind, factor: ScaleFactor) -> Self {
        Self {
            kind,
            factor,
            preserve_audio_duration: true,
            strict: false,
            classifier: Classifier::new(),
            output: EncodeOptions::default(),
        }
    }

    /// Geometry pass.
    pub fn spatial(factor: ScaleFactor) -> Self {
        Self::new(PassKind::Spatial, factor)
    }

    /// Timing pass.
    pub fn temporal(factor: ScaleFactor) -> Self {
        Self::new(PassKind::Temporal, factor)
    }

    /// Set whether audio media keep their durations.
    pub fn with_preserve_audio_duration(mut self, preserve: bool) -> Self {
        self.preserve_audio_duration = preserve;
        self
    }

    /// Set strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Add a caller exclusion.
    pub fn with_exclusion(mut self, rule: ExclusionRule) -> Self {
        self.classifier = self.classifier.with_rule(rule);
        self
    }

    /// Set the output layout.
    pub fn with_output(mut self, output: EncodeOptions) -> Self {
        self.output = output;
        self
    }
}
