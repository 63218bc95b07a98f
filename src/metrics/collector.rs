//! Metrics collection and registry.

use crate::analysis::{RiskThresholds, SignatureComparison, SteganographyRisk};
use crate::patterns::ScrubOutcome;
use prometheus::{Encoder, Gauge, IntCounter, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Metric construction, registration or encoding failed.
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// Running totals of scrub activity, pushed into a [`MetricsRegistry`].
#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    /// Buffers passed through pattern removal.
    pub buffers_scrubbed: u64,
    /// Bytes entering pattern removal.
    pub bytes_in: u64,
    /// Bytes left after pattern removal.
    pub bytes_out: u64,
    /// Pattern occurrences removed.
    pub patterns_removed: u64,
    /// Bytes perturbed by noise injection.
    pub noise_bytes: u64,
    /// Entropy of the most recent buffer before scrubbing.
    pub entropy_before: Option<f64>,
    /// Entropy of the most recent buffer after scrubbing.
    pub entropy_after: Option<f64>,
    /// Scrubbed buffers still classified as high risk.
    pub high_risk_buffers: u64,
}

impl MetricsSnapshot {
    /// Accounts for one pattern removal pass.
    pub fn record_scrub(&mut self, input_len: usize, outcome: &ScrubOutcome) {
        self.buffers_scrubbed += 1;
        self.bytes_in += input_len as u64;
        self.bytes_out += outcome.data.len() as u64;
        self.patterns_removed += outcome.removed as u64;
    }

    /// Accounts for one noise pass over `bytes` bytes.
    pub fn record_noise(&mut self, bytes: usize) {
        self.noise_bytes += bytes as u64;
    }

    /// Records entropy before and after, and counts residual high risk.
    pub fn record_comparison(&mut self, comparison: &SignatureComparison, thresholds: &RiskThresholds) {
        self.entropy_before = Some(comparison.entropy_before);
        self.entropy_after = Some(comparison.entropy_after);
        if thresholds.classify(comparison.entropy_after) == SteganographyRisk::High {
            self.high_risk_buffers += 1;
        }
    }
}

/// Prometheus metrics registry for scrub monitoring.
pub struct MetricsRegistry {
    registry: Registry,

    // Pattern removal
    buffers_scrubbed: IntCounter,
    bytes_in: IntCounter,
    bytes_out: IntCounter,
    patterns_removed: IntCounter,

    // Noise
    noise_bytes: IntCounter,

    // Entropy
    entropy_before: Gauge,
    entropy_after: Gauge,
    high_risk: IntCounter,
}

impl MetricsRegistry {
    /// Creates a new registry with all scrub metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let buffers_scrubbed = IntCounter::new(
            "media_scrub_buffers_scrubbed_total",
            "Total buffers passed through pattern removal",
        )?;
        let bytes_in = IntCounter::new(
            "media_scrub_bytes_in_total",
            "Total bytes entering pattern removal",
        )?;
        let bytes_out = IntCounter::new(
            "media_scrub_bytes_out_total",
            "Total bytes left after pattern removal",
        )?;
        let patterns_removed = IntCounter::new(
            "media_scrub_patterns_removed_total",
            "Total signature occurrences removed",
        )?;
        let noise_bytes = IntCounter::new(
            "media_scrub_noise_bytes_total",
            "Total bytes perturbed by noise injection",
        )?;
        let entropy_before = Gauge::new(
            "media_scrub_entropy_before",
            "Shannon entropy of the last buffer before scrubbing (bits/byte)",
        )?;
        let entropy_after = Gauge::new(
            "media_scrub_entropy_after",
            "Shannon entropy of the last buffer after scrubbing (bits/byte)",
        )?;
        let high_risk = IntCounter::new(
            "media_scrub_high_risk_total",
            "Scrubbed buffers still classified as high steganography risk",
        )?;

        registry.register(Box::new(buffers_scrubbed.clone()))?;
        registry.register(Box::new(bytes_in.clone()))?;
        registry.register(Box::new(bytes_out.clone()))?;
        registry.register(Box::new(patterns_removed.clone()))?;
        registry.register(Box::new(noise_bytes.clone()))?;
        registry.register(Box::new(entropy_before.clone()))?;
        registry.register(Box::new(entropy_after.clone()))?;
        registry.register(Box::new(high_risk.clone()))?;

        Ok(Self {
            registry,
            buffers_scrubbed,
            bytes_in,
            bytes_out,
            patterns_removed,
            noise_bytes,
            entropy_before,
            entropy_after,
            high_risk,
        })
    }

    /// Updates all metrics from a snapshot.
    pub fn update(&self, snapshot: &MetricsSnapshot) {
        // Counters only move forward, by the difference
        advance(&self.buffers_scrubbed, snapshot.buffers_scrubbed);
        advance(&self.bytes_in, snapshot.bytes_in);
        advance(&self.bytes_out, snapshot.bytes_out);
        advance(&self.patterns_removed, snapshot.patterns_removed);
        advance(&self.noise_bytes, snapshot.noise_bytes);
        advance(&self.high_risk, snapshot.high_risk_buffers);

        if let Some(entropy) = snapshot.entropy_before {
            self.entropy_before.set(entropy);
        }
        if let Some(entropy) = snapshot.entropy_after {
            self.entropy_after.set(entropy);
        }
    }

    /// Returns the underlying Prometheus registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn advance(counter: &IntCounter, total: u64) {
    let current = counter.get();
    if total > current {
        counter.inc_by(total - current);
    }
}
