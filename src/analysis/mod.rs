//! Statistical signature of byte buffers.
//!
//! Shannon entropy is the main measure: comparing it before and after a
//! scrub shows whether the statistical signature of the data moved.
//! Risk levels and fingerprints build on it.

mod entropy;
mod fingerprint;
mod risk;

pub use entropy::{calculate_entropy, ByteHistogram, MAX_ENTROPY};
pub use fingerprint::{DigestAlgorithm, Fingerprint, SignatureComparison};
pub use risk::{EntropyAssessment, RiskThresholds, SteganographyRisk};
