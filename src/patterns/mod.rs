//! Binary signature removal.
//!
//! This module strips known byte signatures (metadata segment markers
//! and similar artifacts) from an opaque byte buffer. Matching is a
//! single left-to-right, non-overlapping, leftmost-greedy scan: once a
//! pattern matches, the cursor jumps past it, so a match can never
//! start inside bytes that were already removed.

mod scrubber;
mod set;
pub mod signatures;

pub use scrubber::{find_patterns, remove_patterns, remove_patterns_in, PatternMatch, ScrubOutcome};
pub use set::PatternSet;
