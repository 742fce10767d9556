//! Two-stage entropy classification.
//!
//! Whole-buffer entropy separates normal content from high-entropy
//! content. High-entropy content is then split by how much its block
//! entropy varies: compressed formats keep low-entropy structure
//! (headers, indices, padding) between dense payload, while encrypted
//! data is uniformly dense throughout.

use super::blocks::block_entropies;
use super::dispersion::standard_deviation;
use super::entropy::shannon_entropy;
use super::threshold::Thresholds;
use crate::config::ConfigError;
use crate::source::DataSource;
use serde::{Deserialize, Serialize};

/// Content class assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Classification {
    /// Low-entropy content, or content that could not be read.
    Normal,
    /// High entropy with uneven block entropy.
    Compressed,
    /// High entropy with near-uniform block entropy.
    Encrypted,
}

impl Classification {
    /// All classes, in reporting order.
    pub const ALL: [Classification; 3] = [
        Classification::Normal,
        Classification::Compressed,
        Classification::Encrypted,
    ];

    /// Returns the upper-case label of the class.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Compressed => "COMPRESSED",
            Self::Encrypted => "ENCRYPTED",
        }
    }

    /// Returns true for the classes that passed the primary cut-off.
    pub fn is_high_entropy(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Outcome of a single classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Assigned class.
    pub classification: Classification,
    /// Whole-buffer entropy in bits per byte.
    pub entropy: f64,
    /// Standard deviation of block entropies, `0.0` when not measured.
    pub standard_deviation: f64,
}

impl ClassificationResult {
    /// Result for content with no data available.
    pub const NO_DATA: Self = Self {
        classification: Classification::Normal,
        entropy: 0.0,
        standard_deviation: 0.0,
    };

    fn normal(entropy: f64) -> Self {
        Self {
            classification: Classification::Normal,
            entropy,
            standard_deviation: 0.0,
        }
    }
}

/// Classifies content as normal, compressed or encrypted.
///
/// Holds no mutable state; one instance can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct EntropyClassifier {
    thresholds: Thresholds,
}

impl EntropyClassifier {
    /// Creates a classifier, rejecting invalid thresholds.
    pub fn new(thresholds: Thresholds) -> Result<Self, ConfigError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// Returns the thresholds in use.
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classifies the content supplied by `source`.
    ///
    /// No data available, including an empty buffer, yields
    /// [`ClassificationResult::NO_DATA`]: unreadable content is never
    /// flagged by this check.
    pub fn analyze<S: DataSource + ?Sized>(&self, source: &S) -> ClassificationResult {
        match source.content() {
            Some(data) if !data.is_empty() => self.classify_bytes(&data),
            _ => {
                tracing::trace!("No data available, classifying as normal");
                ClassificationResult::NO_DATA
            }
        }
    }

    /// Classifies an in-memory buffer.
    pub fn classify_bytes(&self, data: &[u8]) -> ClassificationResult {
        if data.is_empty() {
            return ClassificationResult::NO_DATA;
        }

        let entropy = shannon_entropy(data);
        if !self.thresholds.is_high_entropy(entropy) {
            tracing::trace!(entropy, bytes = data.len(), "Below entropy cut-off");
            return ClassificationResult::normal(entropy);
        }

        let blocks = block_entropies(data, self.thresholds.block_size);
        let sd = standard_deviation(&blocks);

        let classification = if self.thresholds.is_dispersed(sd) {
            Classification::Compressed
        } else {
            Classification::Encrypted
        };

        tracing::trace!(
            entropy,
            standard_deviation = sd,
            blocks = blocks.len(),
            class = %classification,
            "High-entropy content classified"
        );

        ClassificationResult {
            classification,
            entropy,
            standard_deviation: sd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{MemorySource, Unavailable};

    /// Deterministic byte stream with every value equally likely over
    /// each 256-byte window: every block has entropy 8.0.
    fn permuted_blocks(blocks: usize) -> Vec<u8> {
        (0..blocks)
            .flat_map(|b| (0..=255u8).map(move |i| i.wrapping_mul(167).wrapping_add(b as u8)))
            .collect()
    }

    #[test]
    fn test_constant_content_is_normal() {
        let classifier = EntropyClassifier::default();
        let result = classifier.analyze(&MemorySource::new(vec![0x20u8; 10_000]));

        assert_eq!(result.classification, Classification::Normal);
        assert_eq!(result.entropy, 0.0);
        assert_eq!(result.standard_deviation, 0.0);
    }

    #[test]
    fn test_no_data_is_normal() {
        let classifier = EntropyClassifier::default();

        assert_eq!(classifier.analyze(&Unavailable), ClassificationResult::NO_DATA);
        assert_eq!(classifier.analyze(&Vec::<u8>::new()), ClassificationResult::NO_DATA);
    }

    #[test]
    fn test_uniform_blocks_are_encrypted() {
        let classifier = EntropyClassifier::default();
        let result = classifier.classify_bytes(&permuted_blocks(8));

        assert_eq!(result.classification, Classification::Encrypted);
        assert!((result.entropy - 8.0).abs() < 1e-9);
        assert!(result.standard_deviation < 1e-9);
    }

    #[test]
    fn test_structured_blocks_are_compressed() {
        let classifier = EntropyClassifier::default();
        // 31 uniform blocks followed by one constant block.
        let mut data = permuted_blocks(31);
        data.extend(std::iter::repeat(0u8).take(256));

        let result = classifier.classify_bytes(&data);
        assert_eq!(result.classification, Classification::Compressed);
        assert!(result.entropy > 7.69);
        assert!(result.standard_deviation > 0.06);
    }

    #[test]
    fn test_short_high_entropy_buffer_is_encrypted() {
        // Fewer bytes than one block: no blocks, dispersion 0.0.
        let classifier = EntropyClassifier::default();
        let data: Vec<u8> = (0..255u8).collect();

        let result = classifier.classify_bytes(&data);
        assert_eq!(result.classification, Classification::Encrypted);
        assert_eq!(result.standard_deviation, 0.0);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = Thresholds::new(0.5, 4, 0.06).unwrap();
        let classifier = EntropyClassifier::new(thresholds).unwrap();

        let result = classifier.classify_bytes(b"aaaabbbbabababab");
        assert_eq!(result.classification, Classification::Compressed);
        assert_eq!(result.entropy, 1.0);
        assert!(result.standard_deviation > 0.06);
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let thresholds = Thresholds {
            sd_cut_off: f64::INFINITY,
            ..Default::default()
        };
        assert!(EntropyClassifier::new(thresholds).is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Classification::Encrypted.to_string(), "ENCRYPTED");
        assert!(!Classification::Normal.is_high_entropy());
        assert!(Classification::Compressed.is_high_entropy());
    }
}
