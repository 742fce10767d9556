//! Shannon entropy over byte frequency distributions.
//!
//! Entropy depends only on how often each byte value occurs, never on
//! where it occurs, so everything here is built on a 256-bucket
//! histogram.

/// Maximum entropy of a byte stream, in bits per byte.
pub const MAX_ENTROPY: f64 = 8.0;

/// Frequency counts for each of the 256 byte values.
#[derive(Clone, PartialEq, Eq)]
pub struct ByteHistogram {
    counts: [u64; 256],
    total: u64,
}

impl ByteHistogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self {
            counts: [0u64; 256],
            total: 0,
        }
    }

    /// Builds a histogram from a single pass over `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut histogram = Self::new();
        histogram.add(data);
        histogram
    }

    /// Accumulates the bytes of `data` into the histogram.
    pub fn add(&mut self, data: &[u8]) {
        for &byte in data {
            self.counts[byte as usize] += 1;
        }
        self.total += data.len() as u64;
    }

    /// Returns how many times `byte` has been seen.
    #[inline]
    pub fn count(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// Returns the number of bytes counted.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns true if no bytes have been counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns the number of distinct byte values seen.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Shannon entropy of the counted bytes, in bits per byte.
    ///
    /// Empty buckets contribute nothing (`0 * log2(0) = 0`). An empty
    /// histogram has no distribution to measure and reports `0.0`.
    pub fn entropy(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }

        let len = self.total as f64;
        let mut entropy = 0.0;

        for &count in &self.counts {
            if count > 0 {
                let p = count as f64 / len;
                entropy -= p * p.log2();
            }
        }

        // Rounding can push a uniform distribution a hair past the bound.
        entropy.clamp(0.0, MAX_ENTROPY)
    }
}

impl Default for ByteHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ByteHistogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteHistogram")
            .field("total", &self.total)
            .field("distinct", &self.distinct())
            .field("entropy", &format!("{:.4}", self.entropy()))
            .finish()
    }
}

/// Computes the Shannon entropy of `data` in bits per byte.
///
/// Returns a value in `[0.0, 8.0]`: `0.0` when every byte is identical,
/// `8.0` when all 256 values occur equally often.
#[inline]
pub fn shannon_entropy(data: &[u8]) -> f64 {
    ByteHistogram::from_bytes(data).entropy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_bytes_zero_entropy() {
        assert_eq!(shannon_entropy(&[0x41]), 0.0);
        assert_eq!(shannon_entropy(&vec![0xAAu8; 4096]), 0.0);
    }

    #[test]
    fn test_uniform_distribution_max_entropy() {
        let data: Vec<u8> = (0..=255u8).cycle().take(256 * 16).collect();
        assert!((shannon_entropy(&data) - MAX_ENTROPY).abs() < 1e-9);
    }

    #[test]
    fn test_two_symbols_one_bit() {
        let data: Vec<u8> = [0u8, 1u8].iter().copied().cycle().take(1000).collect();
        assert!((shannon_entropy(&data) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_text_moderate_entropy() {
        let e = shannon_entropy(b"The quick brown fox jumps over the lazy dog");
        assert!(e > 3.0 && e < 5.5, "text entropy should be moderate, got {}", e);
    }

    #[test]
    fn test_histogram_accumulates() {
        let mut histogram = ByteHistogram::new();
        histogram.add(b"aab");
        histogram.add(b"bc");

        assert_eq!(histogram.total(), 5);
        assert_eq!(histogram.count(b'a'), 2);
        assert_eq!(histogram.count(b'b'), 2);
        assert_eq!(histogram.count(b'c'), 1);
        assert_eq!(histogram.distinct(), 3);
        assert_eq!(histogram, ByteHistogram::from_bytes(b"aabbc"));
    }

    #[test]
    fn test_empty_histogram() {
        let histogram = ByteHistogram::default();
        assert!(histogram.is_empty());
        assert_eq!(histogram.entropy(), 0.0);
    }
}
