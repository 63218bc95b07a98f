//! Single-pass pattern removal and detection.

use super::set::{self, PatternSet};
use crate::buffer::output_buffer;
use crate::error::ScrubError;

/// A pattern occurrence found by the removal scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    /// Byte offset of the match in the input buffer.
    pub offset: usize,
    /// Index of the matching pattern in its set.
    pub pattern_index: usize,
}

/// Result of scrubbing a buffer with a validated pattern set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrubOutcome {
    /// The bytes left after removal, in their original order.
    pub data: Vec<u8>,
    /// Number of pattern occurrences skipped.
    pub removed: usize,
}

impl ScrubOutcome {
    /// Consumes the outcome and returns the scrubbed bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Removes every occurrence of `patterns` from `data`.
///
/// Fails with [`ScrubError::InvalidArgument`] if any pattern is empty.
/// An empty pattern list returns a copy of `data`.
///
/// # Example
///
/// ```
/// use media_scrub::remove_patterns;
///
/// let cleaned = remove_patterns(b"ABCXYZABC", &[b"ABC"]).unwrap();
/// assert_eq!(cleaned, b"XYZ");
/// ```
pub fn remove_patterns<P: AsRef<[u8]>>(data: &[u8], patterns: &[P]) -> Result<Vec<u8>, ScrubError> {
    set::validate(patterns)?;
    scrub(data, patterns).map(ScrubOutcome::into_bytes)
}

/// Removes every occurrence of an already-validated pattern set.
pub fn remove_patterns_in(data: &[u8], patterns: &PatternSet) -> Result<ScrubOutcome, ScrubError> {
    scrub(data, patterns.as_slice())
}

/// Lists the occurrences [`remove_patterns_in`] would remove.
///
/// Uses the same cursor policy as removal, so matches never overlap
/// and their count equals [`ScrubOutcome::removed`].
///
/// # Example
///
/// ```
/// use media_scrub::{find_patterns, PatternSet};
///
/// let set = PatternSet::new(vec![b"AA".to_vec()]).unwrap();
/// let matches = find_patterns(b"AAAXAA", &set);
///
/// assert_eq!(matches.len(), 2);
/// assert_eq!(matches[0].offset, 0);
/// assert_eq!(matches[1].offset, 4);
/// ```
pub fn find_patterns(data: &[u8], patterns: &PatternSet) -> Vec<PatternMatch> {
    let patterns = patterns.as_slice();
    let mut matches = Vec::new();
    let mut cursor = 0;

    while cursor < data.len() {
        match match_at(&data[cursor..], patterns) {
            Some(pattern_index) => {
                matches.push(PatternMatch {
                    offset: cursor,
                    pattern_index,
                });
                cursor += patterns[pattern_index].len();
            }
            None => cursor += 1,
        }
    }

    matches
}

/// Core scan. Callers must have rejected empty patterns, otherwise the
/// cursor would never advance past a match.
fn scrub<P: AsRef<[u8]>>(data: &[u8], patterns: &[P]) -> Result<ScrubOutcome, ScrubError> {
    let mut output = output_buffer(data.len())?;
    let mut removed = 0;
    let mut cursor = 0;

    if patterns.is_empty() {
        output.extend_from_slice(data);
    } else {
        while cursor < data.len() {
            match match_at(&data[cursor..], patterns) {
                Some(index) => {
                    let len = patterns[index].as_ref().len();
                    tracing::trace!(offset = cursor, pattern = index, len, "Pattern removed");
                    cursor += len;
                    removed += 1;
                }
                None => {
                    output.push(data[cursor]);
                    cursor += 1;
                }
            }
        }
    }

    tracing::debug!(
        input_len = data.len(),
        output_len = output.len(),
        patterns = patterns.len(),
        removed,
        "Pattern scrub complete"
    );

    Ok(ScrubOutcome {
        data: output,
        removed,
    })
}

/// Index of the first pattern that is a prefix of `window`.
#[inline]
fn match_at<P: AsRef<[u8]>>(window: &[u8], patterns: &[P]) -> Option<usize> {
    patterns.iter().position(|p| window.starts_with(p.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(patterns: &[&[u8]]) -> PatternSet {
        PatternSet::new(patterns.iter().copied()).unwrap()
    }

    #[test]
    fn test_removes_all_occurrences() {
        let cleaned = remove_patterns(b"ABCXYZABC", &[b"ABC"]).unwrap();
        assert_eq!(cleaned, b"XYZ");
    }

    #[test]
    fn test_non_overlapping_scan() {
        // Consumes 0-1 then 2-3, never 1-2
        let cleaned = remove_patterns(b"AAAA", &[b"AA"]).unwrap();
        assert!(cleaned.is_empty());

        let cleaned = remove_patterns(b"AAA", &[b"AA"]).unwrap();
        assert_eq!(cleaned, b"A");
    }

    #[test]
    fn test_no_rescan_after_removal() {
        // Removing "BC" joins "A" and "D" but the scan has moved on
        let cleaned = remove_patterns(b"ABCD", &[&b"BC"[..], &b"AD"[..]]).unwrap();
        assert_eq!(cleaned, b"AD");
    }

    #[test]
    fn test_first_listed_pattern_wins() {
        let cleaned = remove_patterns(b"ABCD", &[&b"AB"[..], &b"ABC"[..]]).unwrap();
        assert_eq!(cleaned, b"CD");

        let cleaned = remove_patterns(b"ABCD", &[&b"ABC"[..], &b"AB"[..]]).unwrap();
        assert_eq!(cleaned, b"D");
    }

    #[test]
    fn test_empty_pattern_list_is_identity() {
        let data = b"\xFF\xD8\xFF\xE1payload";
        let cleaned = remove_patterns::<&[u8]>(data, &[]).unwrap();
        assert_eq!(cleaned, data);
    }

    #[test]
    fn test_empty_input() {
        let cleaned = remove_patterns(b"", &[b"AB"]).unwrap();
        assert!(cleaned.is_empty());
    }

    #[test]
    fn test_pattern_longer_than_tail() {
        let cleaned = remove_patterns(b"XXAB", &[b"ABC"]).unwrap();
        assert_eq!(cleaned, b"XXAB");
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let result = remove_patterns(b"data", &[&b"da"[..], &b""[..]]);
        assert!(matches!(result, Err(ScrubError::InvalidArgument(_))));
    }

    #[test]
    fn test_jpeg_markers_stripped() {
        let data = [0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x10, 0xFF, 0xDB];
        let outcome = remove_patterns_in(&data, &set(&[&[0xFF, 0xE1]])).unwrap();

        assert_eq!(outcome.data, vec![0xFF, 0xD8, 0x00, 0x10, 0xFF, 0xDB]);
        assert_eq!(outcome.removed, 1);
    }

    #[test]
    fn test_find_matches_removal() {
        let patterns = set(&[&b"AA"[..], &b"B"[..]]);
        let data = b"AAABAAB";

        let matches = find_patterns(data, &patterns);
        let outcome = remove_patterns_in(data, &patterns).unwrap();

        assert_eq!(
            matches,
            vec![
                PatternMatch { offset: 0, pattern_index: 0 },
                PatternMatch { offset: 3, pattern_index: 1 },
                PatternMatch { offset: 4, pattern_index: 0 },
                PatternMatch { offset: 6, pattern_index: 1 },
            ]
        );
        assert_eq!(outcome.removed, matches.len());
        assert_eq!(outcome.data, b"A");
    }

    #[test]
    fn test_find_skips_consumed_bytes() {
        let patterns = set(&[&b"AA"[..]]);
        let matches = find_patterns(b"AAAXAA", &patterns);

        assert_eq!(
            matches,
            vec![
                PatternMatch { offset: 0, pattern_index: 0 },
                PatternMatch { offset: 4, pattern_index: 0 },
            ]
        );
    }

    #[test]
    fn test_find_nothing() {
        assert!(find_patterns(b"hello", &set(&[&b"xyz"[..]])).is_empty());
        assert!(find_patterns(b"hello", &PatternSet::default()).is_empty());
    }
}
