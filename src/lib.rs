//! Entropy Classifier Library
//!
//! Classifies byte content as normal, compressed or encrypted from its
//! statistical randomness alone, without parsing any file format. The
//! result is a heuristic signal for file-integrity and ransomware
//! detection: high entropy is suspicious, and compressed content is told
//! apart from encrypted content by how evenly that entropy is spread.
//!
//! # Architecture
//!
//! ```text
//! source → entropy ─┬─ ≤ cut-off ──────────────────────────→ NORMAL
//!                   └─ > cut-off → blocks → std deviation ─┬→ COMPRESSED
//!                                                          └→ ENCRYPTED
//! ```
//!
//! # Design Principles
//!
//! - **Pure analysis**: classification is a deterministic function of content
//! - **Injected input**: content comes from a [`DataSource`], never from storage directly
//! - **Conservative default**: content that cannot be read is never flagged
//! - **Fixed policy**: thresholds are set when the classifier is built
//!
//! # Example
//!
//! ```
//! use entropy_classifier::{Classification, EntropyClassifier, MemorySource, Unavailable};
//!
//! let classifier = EntropyClassifier::default();
//!
//! let text = MemorySource::new(b"hello hello hello hello".to_vec());
//! assert_eq!(classifier.analyze(&text).classification, Classification::Normal);
//!
//! let result = classifier.analyze(&Unavailable);
//! assert_eq!(result.classification, Classification::Normal);
//! assert_eq!(result.entropy, 0.0);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod metrics;
pub mod scan;
pub mod source;

// Re-export commonly used types at crate root
pub use analysis::{
    block_entropies, shannon_entropy, standard_deviation, BlockSize, ByteHistogram,
    Classification, ClassificationResult, EntropyClassifier, Thresholds,
};
pub use config::{ConfigError, FileConfig, OutputFormat};
pub use scan::{collect_files, FileReport, ScanSummary, Scanner};
pub use source::{DataSource, FileSource, MemorySource, Unavailable};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
