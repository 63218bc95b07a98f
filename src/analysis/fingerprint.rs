//! Content fingerprints and before/after comparison.
//!
//! A scrub pass is judged on two axes: whether the bytes changed at all
//! (digest) and whether their statistical signature moved (entropy).

use super::entropy::calculate_entropy;
use blake3::Hasher as Blake3Hasher;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// BLAKE3 - fast, recommended default.
    #[default]
    Blake3,
    /// SHA-256 - matches common file hash tooling.
    Sha256,
}

/// 32-byte digest of a buffer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    algorithm: DigestAlgorithm,
    digest: [u8; 32],
}

impl Fingerprint {
    /// Hashes `data` with `algorithm`.
    pub fn of(data: &[u8], algorithm: DigestAlgorithm) -> Self {
        let digest = match algorithm {
            DigestAlgorithm::Blake3 => {
                let mut hasher = Blake3Hasher::new();
                hasher.update(data);
                *hasher.finalize().as_bytes()
            }
            DigestAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(data);
                let mut digest = [0u8; 32];
                digest.copy_from_slice(&hasher.finalize());
                digest
            }
        };

        Self { algorithm, digest }
    }

    /// Returns the digest bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.digest
    }

    /// Returns the algorithm used.
    #[inline]
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Lower-case hex rendering of the digest.
    pub fn to_hex(&self) -> String {
        self.digest.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fingerprint")
            .field("algorithm", &self.algorithm)
            .field("digest", &self.to_hex())
            .finish()
    }
}

/// Statistical and content signature of a buffer before and after scrubbing.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureComparison {
    /// Entropy of the original buffer.
    pub entropy_before: f64,
    /// Entropy of the scrubbed buffer.
    pub entropy_after: f64,
    /// Digest of the original buffer.
    pub before: Fingerprint,
    /// Digest of the scrubbed buffer.
    pub after: Fingerprint,
}

impl SignatureComparison {
    /// Compares two buffers.
    pub fn between(before: &[u8], after: &[u8], algorithm: DigestAlgorithm) -> Self {
        let comparison = Self {
            entropy_before: calculate_entropy(before),
            entropy_after: calculate_entropy(after),
            before: Fingerprint::of(before, algorithm),
            after: Fingerprint::of(after, algorithm),
        };

        tracing::debug!(
            entropy_before = comparison.entropy_before,
            entropy_after = comparison.entropy_after,
            changed = comparison.content_changed(),
            "Signature comparison"
        );

        comparison
    }

    /// `entropy_after - entropy_before`.
    #[inline]
    pub fn entropy_delta(&self) -> f64 {
        self.entropy_after - self.entropy_before
    }

    /// Returns true if the bytes differ.
    #[inline]
    pub fn content_changed(&self) -> bool {
        self.before != self.after
    }

    /// Returns true if entropy moved by more than `tolerance` bits.
    pub fn entropy_shifted(&self, tolerance: f64) -> bool {
        self.entropy_delta().abs() > tolerance
    }
}
