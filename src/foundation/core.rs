use std::fmt;

use crate::foundation::error::{ProjscaleError, ProjscaleResult};

/// Positive, finite multiplier applied to classified numeric leaves.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// The factor that leaves every value unchanged.
    pub const IDENTITY: Self = Self(1.0);

    /// Build a factor from a plain multiplier (`1.5` scales by 150%).
    pub fn new(factor: f64) -> ProjscaleResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ProjscaleError::validation(format!(
                "scale factor must be finite and > 0, got {factor}"
            )));
        }
        Ok(Self(factor))
    }

    /// Build a factor from a percentage (`150.0` scales by 1.5).
    pub fn from_percent(percent: f64) -> ProjscaleResult<Self> {
        if !percent.is_finite() || percent <= 0.0 {
            return Err(ProjscaleError::validation(format!(
                "scale percentage must be finite and > 0, got {percent}"
            )));
        }
        Self::new(percent / 100.0)
    }

    /// Raw multiplier.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Multiplier expressed as a percentage.
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }

    /// Factor undoing this one (up to rounding of integer leaves).
    pub fn recip(self) -> ProjscaleResult<Self> {
        Self::new(1.0 / self.0)
    }

    /// Single factor equivalent to applying `self` and then `other`.
    pub fn then(self, other: Self) -> ProjscaleResult<Self> {
        Self::new(self.0 * other.0)
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

/// Which semantic category of numeric fields a pass rewrites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PassKind {
    /// Geometry: position, size, crop, shape metrics.
    Spatial,
    /// Time placement and duration.
    Temporal,
}

impl PassKind {
    /// Stable lowercase name used in logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spatial => "spatial",
            Self::Temporal => "temporal",
        }
    }
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
