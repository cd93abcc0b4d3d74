//! Error types for microbench.
//!
//! [`BenchError`] is the single error type surfaced by the library crates.
//! The workloads themselves are total and never fail; errors only come from
//! configuration and from writing the report.

use std::io;

use thiserror::Error;

use crate::ConfigFileError;

/// Top-level benchmark errors.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Invalid configuration was provided.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },

    /// The configuration file could not be loaded.
    #[error("Config file error: {0}")]
    ConfigFile(#[from] ConfigFileError),

    /// Writing the report failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl BenchError {
    /// Create a new `InvalidConfig` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns `true` if this error was caused by a bad configuration value.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. } | Self::ConfigFile(_))
    }
}
