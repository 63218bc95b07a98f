//! Scrubber configuration.
//!
//! Hosts usually keep signature lists and noise settings in a TOML file
//! next to their own configuration. Every section is optional and
//! falls back to its defaults.

use crate::analysis::{DigestAlgorithm, RiskThresholds};
use crate::error::ScrubError;
use crate::noise::{NoiseInjector, NoiseIntensity};
use crate::patterns::{signatures, PatternSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration loading and validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The text is not valid TOML for this format, or could not be written back.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
    /// A value parsed but failed validation.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ScrubError),
}

/// Full configuration file format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrubConfig {
    /// Signature removal settings.
    #[serde(default)]
    pub patterns: PatternConfig,
    /// Noise injection settings.
    #[serde(default)]
    pub noise: NoiseConfig,
    /// Entropy analysis settings.
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Signature removal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Signatures as hex strings, in match priority order.
    pub signatures: Vec<String>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            signatures: signatures::jpeg_app_markers().to_hex(),
        }
    }
}

/// Noise injection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Scale factor for per-byte deltas.
    pub intensity: f64,
    /// Fixed generator seed; OS entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            intensity: NoiseIntensity::default().get(),
            seed: None,
        }
    }
}

/// Entropy analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Entropy above which a buffer is medium risk.
    pub medium_risk_entropy: f64,
    /// Entropy above which a buffer is high risk.
    pub high_risk_entropy: f64,
    /// Digest used for before/after fingerprints.
    pub digest: DigestAlgorithm,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let thresholds = RiskThresholds::default();
        Self {
            medium_risk_entropy: thresholds.medium,
            high_risk_entropy: thresholds.high,
            digest: DigestAlgorithm::default(),
        }
    }
}

impl ScrubConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ScrubConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let patterns = self.pattern_set()?;
        if patterns.is_empty() {
            tracing::warn!("No signatures configured; pattern removal is a no-op");
        }
        self.noise_intensity()?;
        self.risk_thresholds().validate()?;
        Ok(())
    }

    /// Builds the configured signature set.
    pub fn pattern_set(&self) -> Result<PatternSet, ScrubError> {
        PatternSet::from_hex(&self.patterns.signatures)
    }

    /// Returns the configured noise intensity.
    pub fn noise_intensity(&self) -> Result<NoiseIntensity, ScrubError> {
        NoiseIntensity::new(self.noise.intensity)
    }

    /// Builds a noise injector, seeded if a seed is configured.
    pub fn noise_injector(&self) -> NoiseInjector {
        match self.noise.seed {
            Some(seed) => NoiseInjector::seed_from_u64(seed),
            None => NoiseInjector::from_os_entropy(),
        }
    }

    /// Returns the configured risk thresholds.
    pub fn risk_thresholds(&self) -> RiskThresholds {
        RiskThresholds {
            medium: self.analysis.medium_risk_entropy,
            high: self.analysis.high_risk_entropy,
        }
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
