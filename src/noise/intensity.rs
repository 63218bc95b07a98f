//! Noise scale factor.

use crate::error::ScrubError;
use serde::{Deserialize, Serialize};

/// Above this magnitude most deltas exceed the byte range and clamping
/// dominates the output.
const CLAMP_DOMINANT: f64 = 1.0;

/// Scale factor applied to each pseudo-random delta.
///
/// Always finite. Zero is the identity transform; there is no upper
/// bound, but values beyond 1.0 mostly saturate pixels at 0 or 255.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct NoiseIntensity(f64);

impl NoiseIntensity {
    /// The identity intensity.
    pub const ZERO: Self = Self(0.0);

    /// Validates and wraps an intensity.
    pub fn new(value: f64) -> Result<Self, ScrubError> {
        if !value.is_finite() {
            return Err(ScrubError::invalid(format!(
                "noise intensity must be finite, got {}",
                value
            )));
        }
        if value.abs() > CLAMP_DOMINANT {
            tracing::warn!(intensity = value, "Noise intensity large enough that clamping dominates");
        }
        Ok(Self(value))
    }

    /// Returns the raw scale factor.
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns true if this intensity leaves data unchanged.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl Default for NoiseIntensity {
    /// 1% of the draw range.
    fn default() -> Self {
        Self(0.01)
    }
}

impl TryFrom<f64> for NoiseIntensity {
    type Error = ScrubError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NoiseIntensity> for f64 {
    fn from(intensity: NoiseIntensity) -> Self {
        intensity.0
    }
}
