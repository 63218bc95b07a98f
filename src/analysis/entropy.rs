//! Shannon entropy over the byte alphabet.

/// Maximum entropy of a byte buffer, in bits per byte.
pub const MAX_ENTROPY: f64 = 8.0;

/// Frequency of each of the 256 byte values in a buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct ByteHistogram {
    counts: [u64; 256],
    total: u64,
}

impl ByteHistogram {
    /// Counts byte frequencies in one pass.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for &byte in data {
            counts[byte as usize] += 1;
        }
        Self {
            counts,
            total: data.len() as u64,
        }
    }

    /// Returns how often `byte` occurs.
    #[inline]
    pub fn count(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Returns the number of bytes counted.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the number of distinct byte values present.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Shannon entropy `-Σ p·log2(p)` in bits per byte.
    ///
    /// Zero-frequency values are skipped, and an empty histogram has
    /// entropy 0.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        let total = self.total as f64;
        // p·log2(1/p) keeps every term at +0.0 or above, so a single
        // symbol yields 0.0 rather than -0.0
        let entropy = self
            .counts
            .iter()
            .filter(|&&c| c > 0)
            .map(|&c| {
                let p = c as f64 / total;
                p * (1.0 / p).log2()
            })
            .fold(0.0, |acc, term| acc + term);

        // Rounding can leave the sum a hair outside the valid range
        entropy.clamp(0.0, MAX_ENTROPY)
    }
}

impl std::fmt::Debug for ByteHistogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteHistogram")
            .field("total", &self.total)
            .field("distinct", &self.distinct())
            .finish()
    }
}

/// Computes the Shannon entropy of `data` in bits per byte.
///
/// Returns a value in [0.0, 8.0]: 0.0 for an empty buffer or a single
/// repeated byte, 8.0 when all 256 values occur equally often.
///
/// # Example
///
/// ```
/// use media_scrub::calculate_entropy;
///
/// assert_eq!(calculate_entropy(b"AAAA"), 0.0);
/// assert_eq!(calculate_entropy(b"ABAB"), 1.0);
/// ```
pub fn calculate_entropy(data: &[u8]) -> f64 {
    ByteHistogram::from_bytes(data).entropy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(calculate_entropy(b""), 0.0);
    }

    #[test]
    fn test_single_symbol_is_zero() {
        assert_eq!(calculate_entropy(b"AAAA"), 0.0);
        assert_eq!(calculate_entropy(&[0x00; 1000]), 0.0);
    }

    #[test]
    fn test_single_symbol_is_positive_zero() {
        for data in [&b"AAAA"[..], &[0x00; 1000][..], &[0xFF][..]] {
            let entropy = calculate_entropy(data);
            assert!(!entropy.is_sign_negative());
            assert_eq!(format!("{}", entropy), "0");
        }
    }

    #[test]
    fn test_uniform_is_maximum() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(calculate_entropy(&data), MAX_ENTROPY);

        let repeated: Vec<u8> = (0..=255u8).cycle().take(256 * 10).collect();
        assert_eq!(calculate_entropy(&repeated), MAX_ENTROPY);
    }

    #[test]
    fn test_two_equal_symbols_is_one_bit() {
        let data: Vec<u8> = (0..500).flat_map(|_| [0x00u8, 0xFF]).collect();
        assert!((calculate_entropy(&data) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_skewed_distribution() {
        // p = 3/4, 1/4 -> 0.8113 bits
        let entropy = calculate_entropy(b"AAAB");
        assert!((entropy - 0.811_278_124_459_132_8).abs() < 1e-12);
    }

    #[test]
    fn test_histogram_counts() {
        let histogram = ByteHistogram::from_bytes(b"hello");
        assert_eq!(histogram.total(), 5);
        assert_eq!(histogram.count(b'l'), 2);
        assert_eq!(histogram.count(b'z'), 0);
        assert_eq!(histogram.distinct(), 4);
    }
}
