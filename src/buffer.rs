//! Output buffer allocation.

use crate::error::ScrubError;

/// Allocates an empty output buffer able to hold `capacity` bytes.
///
/// Allocation failure is reported as [`ScrubError::OutOfMemory`]
/// instead of aborting the process.
pub(crate) fn output_buffer(capacity: usize) -> Result<Vec<u8>, ScrubError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|_| ScrubError::OutOfMemory {
            requested: capacity,
        })?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserves_requested_capacity() {
        let buffer = output_buffer(1024).unwrap();
        assert!(buffer.is_empty());
        assert!(buffer.capacity() >= 1024);
    }

    #[test]
    fn test_impossible_allocation_reported() {
        assert!(matches!(
            output_buffer(usize::MAX),
            Err(ScrubError::OutOfMemory { requested: usize::MAX })
        ));
    }
}
