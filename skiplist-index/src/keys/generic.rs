//! Fixed-capacity generic byte-buffer keys (`Generic<N>`, N in {4,8,16,64,256})

use super::{BytesKeyAdapter, KeyAdapter};
use std::cmp::Ordering;

/// A byte-bounded key of up to `N` bytes
///
/// Comparison reads the occupied prefix first (`len` bytes), falling back to
/// length to break ties between a key and one of its proper prefixes — this
/// is the "fast-first by prefix" comparator the specification calls for.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Generic<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> Generic<N> {
    /// Builds a generic key from a byte slice, truncating to `N` bytes
    pub fn new(raw: &[u8]) -> Self {
        let len = raw.len().min(N);
        let mut bytes = [0u8; N];
        bytes[..len].copy_from_slice(&raw[..len]);
        Self { bytes, len }
    }

    /// The occupied prefix of the backing buffer
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl<const N: usize> PartialEq for Generic<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> PartialOrd for Generic<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for Generic<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<const N: usize> KeyAdapter for Generic<N> {
    type Raw = [u8];

    fn from_raw(raw: &Self::Raw) -> Self {
        Self::new(raw)
    }
}

impl<const N: usize> BytesKeyAdapter for Generic<N> {
    fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_lexicographically() {
        let a = Generic::<8>::new(b"abc");
        let b = Generic::<8>::new(b"abd");
        assert!(a < b);
    }

    #[test]
    fn shorter_prefix_sorts_first() {
        let short = Generic::<8>::new(b"ab");
        let long = Generic::<8>::new(b"abc");
        assert!(short < long);
    }

    #[test]
    fn truncates_to_capacity() {
        let key = Generic::<4>::new(b"abcdef");
        assert_eq!(key.as_slice(), b"abcd");
    }
}
