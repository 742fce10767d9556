//! Parallel classification of many files.

use super::{FileReport, ScanError, ScanSummary};
use crate::analysis::EntropyClassifier;
use crate::metrics::MetricsRegistry;
use crate::source::FileSource;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Classifies files in parallel, one file per worker.
///
/// Each file is read and classified independently; the classifier is
/// shared by reference since it holds no mutable state.
pub struct Scanner {
    classifier: EntropyClassifier,
    pool: Option<rayon::ThreadPool>,
    metrics: Option<Arc<MetricsRegistry>>,
    cancel: Arc<AtomicBool>,
}

impl Scanner {
    /// Creates a scanner using the global thread pool.
    pub fn new(classifier: EntropyClassifier) -> Self {
        Self {
            classifier,
            pool: None,
            metrics: None,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Uses a dedicated pool of `threads` workers (0 keeps the global pool).
    pub fn with_threads(mut self, threads: usize) -> Result<Self, ScanError> {
        if threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("entropy-scan-{}", i))
                .build()?;
            self.pool = Some(pool);
        }
        Ok(self)
    }

    /// Records every report in `metrics`.
    pub fn with_metrics(mut self, metrics: Arc<MetricsRegistry>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Uses `cancel` to stop the scan early. Files not yet started when
    /// the flag is set are skipped.
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    /// Returns the classifier in use.
    pub fn classifier(&self) -> &EntropyClassifier {
        &self.classifier
    }

    /// Reads and classifies a single file.
    pub fn scan_file(&self, path: &Path) -> FileReport {
        let source = FileSource::new(path);
        let content = match source.read() {
            Ok(data) if data.is_empty() => None,
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read file, classifying as normal");
                None
            }
        };

        let result = self.classifier.analyze(&content);
        let report = match content {
            Some(data) => FileReport::measured(path.to_path_buf(), &data, result),
            None => FileReport::unreadable(path.to_path_buf(), result),
        };

        tracing::debug!(
            path = %path.display(),
            class = %result.classification,
            entropy = result.entropy,
            standard_deviation = result.standard_deviation,
            "File classified"
        );

        if let Some(metrics) = &self.metrics {
            metrics.record(&report);
        }
        report
    }

    /// Classifies `files`, returning reports in input order.
    pub fn scan(&self, files: &[PathBuf]) -> ScanSummary {
        let run = || {
            files
                .par_iter()
                .map(|path| {
                    if self.cancel.load(Ordering::Relaxed) {
                        None
                    } else {
                        Some(self.scan_file(path))
                    }
                })
                .collect::<Vec<_>>()
        };

        let outcomes = match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        };

        let reports: Vec<FileReport> = outcomes.into_iter().flatten().collect();
        let summary = ScanSummary {
            interrupted: reports.len() < files.len(),
            reports,
        };

        tracing::info!(
            files = summary.reports.len(),
            bytes = summary.bytes(),
            unreadable = summary.unreadable(),
            interrupted = summary.interrupted,
            "Scan complete"
        );

        summary
    }
}
