//! Per-byte noise injection backed by an explicit generator.
//!
//! Each byte receives `trunc(draw * intensity)` where `draw` is uniform
//! over [-128, 127]. The sum is clamped to [0, 255] before narrowing so
//! large deltas saturate instead of wrapping.

use super::intensity::NoiseIntensity;
use crate::buffer::output_buffer;
use crate::error::ScrubError;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

/// Adds bounded noise to `data` using the caller's generator.
///
/// Fails with [`ScrubError::InvalidArgument`] if `intensity` is NaN or
/// infinite. An intensity of zero returns an unchanged copy.
///
/// # Example
///
/// ```
/// use media_scrub::add_noise;
/// use rand_chacha::ChaCha20Rng;
/// use rand_core::SeedableRng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let noisy = add_noise(&[10, 128, 250], 0.05, &mut rng).unwrap();
/// assert_eq!(noisy.len(), 3);
/// ```
pub fn add_noise<R>(data: &[u8], intensity: f64, rng: &mut R) -> Result<Vec<u8>, ScrubError>
where
    R: RngCore + ?Sized,
{
    let intensity = NoiseIntensity::new(intensity)?;
    perturb(data, intensity, rng)
}

fn perturb<R>(data: &[u8], intensity: NoiseIntensity, rng: &mut R) -> Result<Vec<u8>, ScrubError>
where
    R: RngCore + ?Sized,
{
    let mut output = output_buffer(data.len())?;

    if intensity.is_zero() {
        output.extend_from_slice(data);
    } else {
        let scale = intensity.get();
        output.extend(data.iter().map(|&byte| perturb_byte(byte, draw(rng), scale)));
    }

    tracing::debug!(
        len = data.len(),
        intensity = intensity.get(),
        "Pixel noise applied"
    );

    Ok(output)
}

/// Uniform integer in [-128, 127].
#[inline]
fn draw<R: RngCore + ?Sized>(rng: &mut R) -> i64 {
    i64::from(rng.next_u32() & 0xFF) - 128
}

#[inline]
fn perturb_byte(byte: u8, draw: i64, scale: f64) -> u8 {
    // `as` truncates toward zero and saturates on overflow
    let delta = (draw as f64 * scale) as i64;
    i64::from(byte).saturating_add(delta).clamp(0, 255) as u8
}

/// Noise generator handle owned by one caller.
///
/// Wraps a ChaCha20 stream. Seeded from the OS it gives a fresh stream
/// per injector; seeded explicitly it reproduces the same noise for the
/// same inputs. An injector is not shared between threads: give each
/// thread its own. The generator stays private so every byte it
/// perturbs is counted.
pub struct NoiseInjector {
    rng: ChaCha20Rng,
    /// Calls to `add_noise` served.
    calls: u64,
    /// Total bytes perturbed across all calls.
    bytes_perturbed: u64,
}

impl NoiseInjector {
    /// Creates an injector seeded from the OS entropy source.
    pub fn from_os_entropy() -> Self {
        let mut seed = [0u8; 32];
        rand_core::OsRng.fill_bytes(&mut seed);
        Self::from_seed(seed)
    }

    /// Creates an injector with a fixed seed (reproducible noise).
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            rng: ChaCha20Rng::from_seed(seed),
            calls: 0,
            bytes_perturbed: 0,
        }
    }

    /// Creates a reproducible injector from a short numeric seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            calls: 0,
            bytes_perturbed: 0,
        }
    }

    /// Adds bounded noise to `data`.
    pub fn add_noise(&mut self, data: &[u8], intensity: NoiseIntensity) -> Result<Vec<u8>, ScrubError> {
        let output = perturb(data, intensity, &mut self.rng)?;
        self.calls += 1;
        self.bytes_perturbed += data.len() as u64;
        Ok(output)
    }

    /// Returns the number of calls served.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Returns the total number of bytes perturbed.
    pub fn bytes_perturbed(&self) -> u64 {
        self.bytes_perturbed
    }
}

impl Default for NoiseInjector {
    fn default() -> Self {
        Self::from_os_entropy()
    }
}

impl std::fmt::Debug for NoiseInjector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseInjector")
            .field("calls", &self.calls)
            .field("bytes_perturbed", &self.bytes_perturbed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient() -> Vec<u8> {
        (0..=255u8).cycle().take(4096).collect()
    }

    #[test]
    fn test_zero_intensity_is_identity() {
        let data = gradient();
        let mut injector = NoiseInjector::from_os_entropy();

        let noisy = injector.add_noise(&data, NoiseIntensity::ZERO).unwrap();
        assert_eq!(noisy, data);
    }

    #[test]
    fn test_length_preserved() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for len in [0, 1, 17, 1000] {
            let data = vec![128u8; len];
            let noisy = add_noise(&data, 0.3, &mut rng).unwrap();
            assert_eq!(noisy.len(), len);
        }
    }

    #[test]
    fn test_delta_bounded_by_intensity() {
        let data = vec![128u8; 10_000];
        let mut rng = ChaCha20Rng::seed_from_u64(99);

        let noisy = add_noise(&data, 0.5, &mut rng).unwrap();

        // |trunc(draw * 0.5)| <= 64
        assert!(noisy.iter().all(|&b| (i16::from(b) - 128).abs() <= 64));
        assert!(noisy.iter().any(|&b| b != 128));
    }

    #[test]
    fn test_clamps_instead_of_wrapping() {
        assert_eq!(perturb_byte(250, 127, 1.0), 255);
        assert_eq!(perturb_byte(5, -128, 1.0), 0);
        assert_eq!(perturb_byte(0, -128, 1e300), 0);
        assert_eq!(perturb_byte(255, 127, f64::MAX), 255);
    }

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(perturb_byte(100, 127, 0.01), 101); // 1.27 -> 1
        assert_eq!(perturb_byte(100, -128, 0.01), 99); // -1.28 -> -1
        assert_eq!(perturb_byte(100, 50, 0.01), 100); // 0.5 -> 0
        assert_eq!(perturb_byte(100, -50, 0.01), 100); // -0.5 -> 0
    }

    #[test]
    fn test_negative_intensity_flips_direction() {
        assert_eq!(perturb_byte(100, 10, -1.0), 90);
    }

    #[test]
    fn test_non_finite_intensity_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let result = add_noise(&[1, 2, 3], f64::NAN, &mut rng);
        assert!(matches!(result, Err(ScrubError::InvalidArgument(_))));

        let result = add_noise(&[1, 2, 3], f64::INFINITY, &mut rng);
        assert!(matches!(result, Err(ScrubError::InvalidArgument(_))));
    }

    #[test]
    fn test_seeded_injectors_reproduce() {
        let data = gradient();
        let intensity = NoiseIntensity::new(0.2).unwrap();

        let mut a = NoiseInjector::from_seed([0x42; 32]);
        let mut b = NoiseInjector::from_seed([0x42; 32]);

        assert_eq!(
            a.add_noise(&data, intensity).unwrap(),
            b.add_noise(&data, intensity).unwrap()
        );
    }

    #[test]
    fn test_successive_calls_differ() {
        let data = vec![128u8; 1024];
        let intensity = NoiseIntensity::new(0.5).unwrap();
        let mut injector = NoiseInjector::seed_from_u64(5);

        let first = injector.add_noise(&data, intensity).unwrap();
        let second = injector.add_noise(&data, intensity).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_counters() {
        let mut injector = NoiseInjector::seed_from_u64(3);
        let intensity = NoiseIntensity::default();

        injector.add_noise(&[0u8; 100], intensity).unwrap();
        injector.add_noise(&[0u8; 28], intensity).unwrap();

        assert_eq!(injector.calls(), 2);
        assert_eq!(injector.bytes_perturbed(), 128);
    }
}
