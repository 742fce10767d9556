//! Start-up configuration.
//!
//! Thresholds are loaded once, validated, and then fixed for the lifetime
//! of the classifier so that every file in a deployment is judged by the
//! same policy.

use crate::analysis::Thresholds;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Block size of zero.
    #[error("invalid block size {0} (must be at least 1 byte)")]
    InvalidBlockSize(usize),
    /// Entropy cut-off outside the measurable range.
    #[error("invalid entropy cut-off {0} (must be within 0.0-8.0)")]
    InvalidEntropyCutOff(f64),
    /// Negative or non-finite deviation cut-off.
    #[error("invalid standard deviation cut-off {0} (must be finite and non-negative)")]
    InvalidSdCutOff(f64),
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The config file is not valid TOML for [`FileConfig`].
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Classification cut-offs.
    #[serde(default)]
    pub thresholds: Thresholds,
    /// Batch scanning options.
    #[serde(default)]
    pub scan: ScanConfig,
    /// Report output options.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Batch scanning configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Descend into subdirectories of directory arguments.
    pub recursive: bool,
    /// Worker threads (0 lets the pool pick one per core).
    pub threads: usize,
}

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One aligned line per file.
    #[default]
    Text,
    /// One JSON report per line.
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format.
    pub format: OutputFormat,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.thresholds.validate()?;
        Ok(config)
    }
}
