//! Prometheus metrics for classification runs.
//!
//! # Metrics Exposed
//!
//! - `entropy_classifier_classifications_total{class}` - Results per class
//! - `entropy_classifier_unreadable_total` - Inputs with no data available
//! - `entropy_classifier_bytes_analyzed_total` - Bytes of content analyzed
//! - `entropy_classifier_entropy_bits` - Histogram of whole-content entropy
//! - `entropy_classifier_block_entropy_sd` - Histogram of block entropy
//!   standard deviation (high-entropy content only)
//!
//! # Example
//!
//! ```no_run
//! use entropy_classifier::{metrics::MetricsRegistry, EntropyClassifier};
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//! let classifier = EntropyClassifier::default();
//!
//! let data = vec![0u8; 4096];
//! let result = classifier.classify_bytes(&data);
//! registry.observe(&result, data.len() as u64);
//!
//! println!("{}", registry.encode().unwrap());
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry};
