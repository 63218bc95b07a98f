//! Prometheus metrics for scrub activity.
//!
//! The transforms themselves are stateless; hosts that scrub many
//! buffers accumulate a [`MetricsSnapshot`] and push it into a
//! [`MetricsRegistry`], which they expose however they like.
//!
//! # Metrics Exposed
//!
//! - `media_scrub_buffers_scrubbed_total` - Buffers passed through pattern removal
//! - `media_scrub_bytes_in_total` - Bytes entering pattern removal
//! - `media_scrub_bytes_out_total` - Bytes left after pattern removal
//! - `media_scrub_patterns_removed_total` - Signature occurrences removed
//! - `media_scrub_noise_bytes_total` - Bytes perturbed by noise injection
//! - `media_scrub_entropy_before` - Entropy of the last buffer before scrubbing
//! - `media_scrub_entropy_after` - Entropy of the last buffer after scrubbing
//! - `media_scrub_high_risk_total` - Scrubbed buffers still at high risk
//!
//! # Example
//!
//! ```
//! use media_scrub::metrics::{MetricsRegistry, MetricsSnapshot};
//! use media_scrub::patterns::{remove_patterns_in, signatures};
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//! let mut snapshot = MetricsSnapshot::default();
//!
//! let data = [0xFF, 0xD8, 0xFF, 0xE1, 0x12, 0x34];
//! let outcome = remove_patterns_in(&data, &signatures::jpeg_app_markers()).unwrap();
//! snapshot.record_scrub(data.len(), &outcome);
//!
//! registry.update(&snapshot);
//! assert!(registry.encode().unwrap().contains("media_scrub_patterns_removed_total 1"));
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry, MetricsSnapshot};
