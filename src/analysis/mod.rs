//! Entropy measurement and classification.
//!
//! This module provides the byte entropy engine, block segmentation,
//! dispersion statistics and the two-stage classifier built on them.
//! Every function here is a pure function of its input.

mod blocks;
mod classifier;
mod dispersion;
mod entropy;
mod threshold;

pub use blocks::{block_entropies, BlockSize};
pub use classifier::{Classification, ClassificationResult, EntropyClassifier};
pub use dispersion::{mean, standard_deviation};
pub use entropy::{shannon_entropy, ByteHistogram, MAX_ENTROPY};
pub use threshold::{Thresholds, BLOCK_SIZE, ENTROPY_CUT_OFF, SD_CUT_OFF};
