//! Validated, ordered collection of byte patterns.

use crate::error::ScrubError;

/// An ordered list of non-empty byte patterns.
///
/// Order only matters for tie-breaking: when several patterns match at
/// the same position, the one listed first wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<Vec<u8>>,
}

impl PatternSet {
    /// Builds a pattern set, rejecting any empty pattern.
    pub fn new<I, P>(patterns: I) -> Result<Self, ScrubError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Vec<u8>>,
    {
        let patterns: Vec<Vec<u8>> = patterns.into_iter().map(Into::into).collect();
        validate(&patterns)?;
        Ok(Self { patterns })
    }

    /// Builds a set from fixed-width signatures known to be non-empty.
    pub(crate) fn from_static<const N: usize>(patterns: &[[u8; N]]) -> Self {
        debug_assert!(N > 0);
        Self {
            patterns: patterns.iter().map(|p| p.to_vec()).collect(),
        }
    }

    /// Parses patterns written as hex strings, e.g. `"FFE1"` or `"ff e1"`.
    ///
    /// Whitespace is ignored and digits are case-insensitive.
    pub fn from_hex<I, S>(patterns: I) -> Result<Self, ScrubError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .enumerate()
            .map(|(index, text)| parse_hex(index, text.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(patterns)
    }

    /// Returns the number of patterns.
    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if the set holds no patterns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the pattern at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.patterns.get(index).map(Vec::as_slice)
    }

    /// Iterates over the patterns in list order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.patterns.iter().map(Vec::as_slice)
    }

    /// Returns the patterns as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Vec<u8>] {
        &self.patterns
    }

    /// Length of the longest pattern, or 0 for an empty set.
    pub fn max_len(&self) -> usize {
        self.patterns.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Renders every pattern as upper-case hex.
    pub fn to_hex(&self) -> Vec<String> {
        self.patterns
            .iter()
            .map(|p| p.iter().map(|b| format!("{:02X}", b)).collect())
            .collect()
    }
}

/// Rejects the first empty pattern found.
pub(crate) fn validate<P: AsRef<[u8]>>(patterns: &[P]) -> Result<(), ScrubError> {
    match patterns.iter().position(|p| p.as_ref().is_empty()) {
        Some(index) => Err(ScrubError::invalid(format!("pattern {} is empty", index))),
        None => Ok(()),
    }
}

fn parse_hex(index: usize, text: &str) -> Result<Vec<u8>, ScrubError> {
    let digits: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();

    if digits.is_empty() {
        return Err(ScrubError::invalid(format!("pattern {} is empty", index)));
    }
    if digits.len() % 2 != 0 {
        return Err(ScrubError::invalid(format!(
            "pattern {} has an odd number of hex digits: {:?}",
            index, text
        )));
    }

    digits
        .chunks_exact(2)
        .map(|pair| match (hex_value(pair[0]), hex_value(pair[1])) {
            (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
            _ => Err(ScrubError::invalid(format!(
                "pattern {} is not valid hex: {:?}",
                index, text
            ))),
        })
        .collect()
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
