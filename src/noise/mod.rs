//! Bounded pseudo-random pixel noise.
//!
//! Perturbs every byte of a buffer by a small random delta so that
//! pixel-level fingerprints (sensor noise patterns, embedded LSB data)
//! no longer survive byte-for-byte. The generator is an explicit handle
//! owned by the caller rather than process-wide state.

mod injector;
mod intensity;

pub use injector::{add_noise, NoiseInjector};
pub use intensity::NoiseIntensity;
