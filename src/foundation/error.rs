/// Convenience result type used across projscale.
pub type ProjscaleResult<T> = Result<T, ProjscaleError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only fatal conditions live here. Structural and version warnings are reported through
/// [`crate::PassReport`] and never abort a pass unless strict mode promotes them.
#[derive(thiserror::Error, Debug)]
pub enum ProjscaleError {
    /// Malformed input document (not UTF-8, not JSON).
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid configuration or, in strict mode, an invalid document structure.
    #[error("validation error: {0}")]
    Validation(String),

    /// Document declares a format version that strict mode refuses to process.
    #[error("unsupported project version: {0}")]
    UnsupportedVersion(String),

    /// Errors when serializing the transformed tree.
    #[error("serialization error: {0}")]
    Serde(String),

    /// File system failures, with the offending path in the message.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProjscaleError {
    /// Build a [`ProjscaleError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`ProjscaleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ProjscaleError::UnsupportedVersion`] value.
    pub fn unsupported_version(msg: impl Into<String>) -> Self {
        Self::UnsupportedVersion(msg.into())
    }

    /// Build a [`ProjscaleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`ProjscaleError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
