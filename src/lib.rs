//! Media Scrub Library
//!
//! Byte-buffer transforms for scrubbing identifying artifacts from
//! media files. Buffers are opaque bytes: reading, decoding and writing
//! files is left to the caller.
//!
//! # Transforms
//!
//! ```text
//! remove_patterns    strip known binary signatures (JPEG APPn markers, ...)
//! add_noise          perturb pixel bytes with bounded pseudo-random deltas
//! calculate_entropy  Shannon entropy, to judge whether the signature moved
//! ```
//!
//! Each transform is a leaf: it borrows its input, allocates a fresh
//! output and keeps no state. The only state in the crate is the noise
//! generator, which is an explicit handle owned by the caller.
//!
//! # Design Principles
//!
//! - **Fail fast**: arguments are validated before any output is built
//! - **No format awareness**: signatures are matched as raw bytes
//! - **Explicit randomness**: no process-wide generator
//! - **No cryptographic claims**: noise hides fingerprints, it is not a cipher
//!
//! # Example
//!
//! ```
//! use media_scrub::{
//!     analysis::{DigestAlgorithm, SignatureComparison},
//!     noise::{NoiseInjector, NoiseIntensity},
//!     patterns::{remove_patterns_in, signatures},
//! };
//!
//! let original = vec![0xFF, 0xD8, 0xFF, 0xE1, 0x45, 0x78, 0x69, 0x66, 0xFF, 0xD9];
//!
//! let outcome = remove_patterns_in(&original, &signatures::jpeg_app_markers()).unwrap();
//! assert_eq!(outcome.removed, 1);
//!
//! let mut injector = NoiseInjector::from_os_entropy();
//! let noisy = injector.add_noise(&outcome.data, NoiseIntensity::default()).unwrap();
//!
//! let comparison = SignatureComparison::between(&original, &noisy, DigestAlgorithm::Blake3);
//! assert!(comparison.content_changed());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
mod buffer;
pub mod config;
pub mod error;
pub mod metrics;
pub mod noise;
pub mod patterns;

// Re-export commonly used types at crate root
pub use analysis::{calculate_entropy, RiskThresholds, SignatureComparison, SteganographyRisk};
pub use config::ScrubConfig;
pub use error::ScrubError;
pub use noise::{add_noise, NoiseInjector, NoiseIntensity};
pub use patterns::{find_patterns, remove_patterns, PatternSet};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
