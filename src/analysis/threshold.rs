//! Classification thresholds.
//!
//! The cut-offs are empirically calibrated policy constants. They are
//! fixed when a classifier is built and never vary per call.

use super::blocks::BlockSize;
use super::entropy::MAX_ENTROPY;
use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Entropy cut-off between normal and compressed or encrypted content,
/// in bits per byte.
pub const ENTROPY_CUT_OFF: f64 = 7.69;

/// Size of the blocks used for the dispersion measurement, in bytes.
pub const BLOCK_SIZE: usize = 256;

/// Block entropy standard deviation cut-off between compressed and
/// encrypted content.
pub const SD_CUT_OFF: f64 = 0.06;

/// Thresholds driving the two-stage classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Whole-buffer entropy above which content is high entropy.
    pub entropy_cut_off: f64,
    /// Window size for per-block entropy.
    pub block_size: BlockSize,
    /// Block entropy standard deviation above which high-entropy content
    /// is considered compressed rather than encrypted.
    pub sd_cut_off: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            entropy_cut_off: ENTROPY_CUT_OFF,
            block_size: BlockSize::DEFAULT,
            sd_cut_off: SD_CUT_OFF,
        }
    }
}

impl Thresholds {
    /// Creates validated thresholds.
    pub fn new(
        entropy_cut_off: f64,
        block_size: usize,
        sd_cut_off: f64,
    ) -> Result<Self, ConfigError> {
        let thresholds = Self {
            entropy_cut_off,
            block_size: BlockSize::new(block_size)?,
            sd_cut_off,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Validates the cut-offs.
    ///
    /// The entropy cut-off must lie within `[0.0, 8.0]` and the standard
    /// deviation cut-off must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.entropy_cut_off.is_finite()
            || !(0.0..=MAX_ENTROPY).contains(&self.entropy_cut_off)
        {
            return Err(ConfigError::InvalidEntropyCutOff(self.entropy_cut_off));
        }
        if !self.sd_cut_off.is_finite() || self.sd_cut_off < 0.0 {
            return Err(ConfigError::InvalidSdCutOff(self.sd_cut_off));
        }
        Ok(())
    }

    /// Returns true if `entropy` exceeds the primary cut-off.
    #[inline]
    pub fn is_high_entropy(&self, entropy: f64) -> bool {
        entropy > self.entropy_cut_off
    }

    /// Returns true if `standard_deviation` exceeds the secondary cut-off.
    #[inline]
    pub fn is_dispersed(&self, standard_deviation: f64) -> bool {
        standard_deviation > self.sd_cut_off
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.entropy_cut_off, 7.69);
        assert_eq!(thresholds.block_size.get(), 256);
        assert_eq!(thresholds.sd_cut_off, 0.06);
        assert!(thresholds.validate().is_ok());
    }

    #[test]
    fn test_cut_offs_are_exclusive() {
        let thresholds = Thresholds::default();
        assert!(!thresholds.is_high_entropy(ENTROPY_CUT_OFF));
        assert!(thresholds.is_high_entropy(7.70));
        assert!(!thresholds.is_dispersed(SD_CUT_OFF));
        assert!(thresholds.is_dispersed(0.061));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            Thresholds::new(7.69, 0, 0.06),
            Err(ConfigError::InvalidBlockSize(0))
        ));
        assert!(matches!(
            Thresholds::new(8.5, 256, 0.06),
            Err(ConfigError::InvalidEntropyCutOff(_))
        ));
        assert!(matches!(
            Thresholds::new(f64::NAN, 256, 0.06),
            Err(ConfigError::InvalidEntropyCutOff(_))
        ));
        assert!(matches!(
            Thresholds::new(7.69, 256, -0.1),
            Err(ConfigError::InvalidSdCutOff(_))
        ));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let thresholds: Thresholds = toml::from_str("block_size = 512").unwrap();
        assert_eq!(thresholds.block_size.get(), 512);
        assert_eq!(thresholds.entropy_cut_off, ENTROPY_CUT_OFF);
        assert_eq!(thresholds.sd_cut_off, SD_CUT_OFF);
    }
}
