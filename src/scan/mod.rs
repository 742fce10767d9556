//! Batch classification of files on disk.
//!
//! Expands command-line arguments into a file list and classifies each
//! file independently on a worker pool. Read failures never abort a
//! batch: the affected file is reported as unreadable.

mod report;
mod scanner;
mod walk;

pub use report::{FileReport, ScanSummary};
pub use scanner::Scanner;
pub use walk::collect_files;

use thiserror::Error;

/// Errors that can occur while preparing a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
