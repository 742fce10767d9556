//! Per-file scan reports.

use crate::analysis::{Classification, ClassificationResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Classification outcome for one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    /// Path that was scanned.
    pub path: PathBuf,
    /// Content length in bytes (0 when unreadable).
    pub size: u64,
    /// Whether content was available for measurement.
    pub readable: bool,
    /// BLAKE3 digest of the measured content, hex encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    /// When the file was classified.
    pub scanned_at: DateTime<Utc>,
    /// Classifier output.
    #[serde(flatten)]
    pub result: ClassificationResult,
}

impl FileReport {
    /// Builds a report for measured content.
    pub fn measured(path: PathBuf, content: &[u8], result: ClassificationResult) -> Self {
        Self {
            path,
            size: content.len() as u64,
            readable: true,
            digest: Some(blake3::hash(content).to_hex().to_string()),
            scanned_at: Utc::now(),
            result,
        }
    }

    /// Builds a report for a file with no data available.
    pub fn unreadable(path: PathBuf, result: ClassificationResult) -> Self {
        Self {
            path,
            size: 0,
            readable: false,
            digest: None,
            scanned_at: Utc::now(),
            result,
        }
    }

    /// Returns the assigned class.
    #[inline]
    pub fn classification(&self) -> Classification {
        self.result.classification
    }
}

/// Results of a batch scan, in input order.
#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    /// One report per completed file.
    pub reports: Vec<FileReport>,
    /// True if the scan stopped before every file was classified.
    pub interrupted: bool,
}

impl ScanSummary {
    /// Number of files classified as `class`.
    pub fn count(&self, class: Classification) -> usize {
        self.reports
            .iter()
            .filter(|r| r.classification() == class)
            .count()
    }

    /// Number of files with no data available.
    pub fn unreadable(&self) -> usize {
        self.reports.iter().filter(|r| !r.readable).count()
    }

    /// Total bytes measured.
    pub fn bytes(&self) -> u64 {
        self.reports.iter().map(|r| r.size).sum()
    }
}
