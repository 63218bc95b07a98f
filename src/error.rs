//! Error type shared by the scrubbing transforms.

use thiserror::Error;

/// Errors returned by the scrubbing transforms.
///
/// Every check runs before an output buffer is allocated, so an error
/// never comes with a partially written result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrubError {
    /// A structurally malformed input (empty pattern, non-finite intensity, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The output buffer could not be allocated.
    #[error("out of memory: failed to allocate {requested} bytes for output")]
    OutOfMemory {
        /// Capacity that was asked for.
        requested: usize,
    },
}

impl ScrubError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    /// Returns true for the `InvalidArgument` kind.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ScrubError::invalid("pattern 2 is empty");
        assert_eq!(err.to_string(), "invalid argument: pattern 2 is empty");
        assert!(err.is_invalid_argument());

        let oom = ScrubError::OutOfMemory { requested: 64 };
        assert!(oom.to_string().contains("64 bytes"));
        assert!(!oom.is_invalid_argument());
    }
}
