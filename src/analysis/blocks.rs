//! Fixed-size block segmentation.
//!
//! Splits a buffer into non-overlapping windows and measures the entropy
//! of each one. A trailing remainder shorter than one block is dropped,
//! never padded.

use super::entropy::shannon_entropy;
use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Size of a segmentation window in bytes. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BlockSize(NonZeroUsize);

impl BlockSize {
    /// The default block size of 256 bytes.
    pub const DEFAULT: Self = match NonZeroUsize::new(super::threshold::BLOCK_SIZE) {
        Some(bytes) => Self(bytes),
        None => panic!("default block size must be non-zero"),
    };

    /// Validates a block size, rejecting zero.
    pub fn new(bytes: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(bytes)
            .map(Self)
            .ok_or(ConfigError::InvalidBlockSize(bytes))
    }

    /// Returns the block size in bytes.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Number of full blocks in a buffer of `len` bytes.
    #[inline]
    pub fn blocks_in(self, len: usize) -> usize {
        len / self.get()
    }
}

impl TryFrom<usize> for BlockSize {
    type Error = ConfigError;

    fn try_from(bytes: usize) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

impl From<BlockSize> for usize {
    fn from(size: BlockSize) -> Self {
        size.get()
    }
}

impl std::fmt::Display for BlockSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bytes", self.get())
    }
}

/// Computes the entropy of every full block of `data`, in block order.
///
/// The result has `data.len() / block_size` elements and is empty when
/// `data` is shorter than one block.
pub fn block_entropies(data: &[u8], block_size: BlockSize) -> Vec<f64> {
    data.chunks_exact(block_size.get())
        .map(shannon_entropy)
        .collect()
}
