//! Metrics collection and registry.

use crate::analysis::{Classification, ClassificationResult, MAX_ENTROPY};
use crate::scan::FileReport;
use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Registration or encoding failed.
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// Prometheus metrics registry for classification runs.
pub struct MetricsRegistry {
    registry: Registry,

    classifications_total: IntCounterVec,
    unreadable_total: IntCounter,
    bytes_analyzed_total: IntCounter,
    entropy_bits: Histogram,
    block_entropy_sd: Histogram,
}

impl MetricsRegistry {
    /// Creates a new metrics registry with all classifier metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let classifications_total = IntCounterVec::new(
            Opts::new(
                "entropy_classifier_classifications_total",
                "Classifications performed, by assigned class",
            ),
            &["class"],
        )?;
        let unreadable_total = IntCounter::new(
            "entropy_classifier_unreadable_total",
            "Inputs with no data available",
        )?;
        let bytes_analyzed_total = IntCounter::new(
            "entropy_classifier_bytes_analyzed_total",
            "Total bytes of content analyzed",
        )?;
        let entropy_bits = Histogram::with_opts(
            HistogramOpts::new(
                "entropy_classifier_entropy_bits",
                "Whole-content Shannon entropy in bits per byte",
            )
            .buckets(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 7.5, 7.69, 7.9, MAX_ENTROPY]),
        )?;
        let block_entropy_sd = Histogram::with_opts(
            HistogramOpts::new(
                "entropy_classifier_block_entropy_sd",
                "Standard deviation of block entropy for high-entropy content",
            )
            .buckets(vec![0.01, 0.02, 0.04, 0.06, 0.1, 0.25, 0.5, 1.0, 2.0, 4.0]),
        )?;

        registry.register(Box::new(classifications_total.clone()))?;
        registry.register(Box::new(unreadable_total.clone()))?;
        registry.register(Box::new(bytes_analyzed_total.clone()))?;
        registry.register(Box::new(entropy_bits.clone()))?;
        registry.register(Box::new(block_entropy_sd.clone()))?;

        // Expose every class from the start, even before it is observed.
        for class in Classification::ALL {
            classifications_total.with_label_values(&[class.as_str()]);
        }

        Ok(Self {
            registry,
            classifications_total,
            unreadable_total,
            bytes_analyzed_total,
            entropy_bits,
            block_entropy_sd,
        })
    }

    /// Records a single classification result.
    pub fn observe(&self, result: &ClassificationResult, bytes: u64) {
        self.classifications_total
            .with_label_values(&[result.classification.as_str()])
            .inc();
        self.bytes_analyzed_total.inc_by(bytes);
        self.entropy_bits.observe(result.entropy);

        if result.classification.is_high_entropy() {
            self.block_entropy_sd.observe(result.standard_deviation);
        }
    }

    /// Records the outcome of a scanned file.
    pub fn record(&self, report: &FileReport) {
        if report.readable {
            self.observe(&report.result, report.size);
        } else {
            self.unreadable_total.inc();
            self.classifications_total
                .with_label_values(&[report.result.classification.as_str()])
                .inc();
        }
    }

    /// Returns the underlying Prometheus registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
