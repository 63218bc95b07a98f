//! Steganography risk classification from byte entropy.
//!
//! Compressed media already sits at high entropy, so these levels are
//! hints for a human reviewer, not detections.

use super::entropy::{calculate_entropy, MAX_ENTROPY};
use crate::error::ScrubError;
use serde::{Deserialize, Serialize};

/// Coarse likelihood that a buffer carries hidden data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SteganographyRisk {
    /// At or below the medium threshold.
    Low,
    /// Above the medium threshold, at or below the high one.
    Medium,
    /// Above the high threshold.
    High,
}

impl std::fmt::Display for SteganographyRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        };
        f.write_str(label)
    }
}

/// Entropy levels above which a buffer is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Entropy strictly above this is at least `Medium`.
    pub medium: f64,
    /// Entropy strictly above this is `High`.
    pub high: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            medium: 6.5,
            high: 7.5,
        }
    }
}

impl RiskThresholds {
    /// Checks that thresholds are finite and ordered within [0, 8].
    pub fn validate(&self) -> Result<(), ScrubError> {
        let in_range = |v: f64| v.is_finite() && (0.0..=MAX_ENTROPY).contains(&v);
        if !in_range(self.medium) || !in_range(self.high) {
            return Err(ScrubError::invalid(format!(
                "risk thresholds must lie in [0, 8], got medium={} high={}",
                self.medium, self.high
            )));
        }
        if self.medium > self.high {
            return Err(ScrubError::invalid(format!(
                "medium risk threshold {} exceeds high threshold {}",
                self.medium, self.high
            )));
        }
        Ok(())
    }

    /// Maps an entropy value to a risk level.
    pub fn classify(&self, entropy: f64) -> SteganographyRisk {
        if entropy > self.high {
            SteganographyRisk::High
        } else if entropy > self.medium {
            SteganographyRisk::Medium
        } else {
            SteganographyRisk::Low
        }
    }
}

/// Entropy of a buffer with its risk level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyAssessment {
    /// Shannon entropy in bits per byte.
    pub entropy: f64,
    /// Risk level for `entropy`.
    pub risk: SteganographyRisk,
}

impl EntropyAssessment {
    /// Computes entropy and classifies it.
    pub fn of(data: &[u8], thresholds: &RiskThresholds) -> Self {
        let entropy = calculate_entropy(data);
        let risk = thresholds.classify(entropy);

        if risk == SteganographyRisk::High {
            tracing::debug!(entropy, len = data.len(), "High entropy buffer");
        }

        Self { entropy, risk }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        let thresholds = RiskThresholds::default();
        assert_eq!(thresholds.classify(0.0), SteganographyRisk::Low);
        assert_eq!(thresholds.classify(6.5), SteganographyRisk::Low);
        assert_eq!(thresholds.classify(6.51), SteganographyRisk::Medium);
        assert_eq!(thresholds.classify(7.5), SteganographyRisk::Medium);
        assert_eq!(thresholds.classify(7.9), SteganographyRisk::High);
    }

    #[test]
    fn test_validate() {
        assert!(RiskThresholds::default().validate().is_ok());

        let inverted = RiskThresholds { medium: 7.0, high: 6.0 };
        assert!(inverted.validate().is_err());

        let out_of_range = RiskThresholds { medium: 6.0, high: 9.0 };
        assert!(out_of_range.validate().is_err());

        let nan = RiskThresholds { medium: f64::NAN, high: 7.0 };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_assess_uniform_is_high() {
        let data: Vec<u8> = (0..=255).collect();
        let assessment = EntropyAssessment::of(&data, &RiskThresholds::default());

        assert_eq!(assessment.entropy, 8.0);
        assert_eq!(assessment.risk, SteganographyRisk::High);
    }

    #[test]
    fn test_assess_constant_is_low() {
        let assessment = EntropyAssessment::of(&[0x80; 512], &RiskThresholds::default());
        assert_eq!(assessment.risk, SteganographyRisk::Low);
        assert_eq!(assessment.risk.to_string(), "LOW");
    }
}
