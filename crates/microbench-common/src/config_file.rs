//! TOML configuration file for microbench.
//!
//! Only the `microbench` umbrella binary reads configuration files; the
//! standalone `fib-bench` and `count-bench` programs always use the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::BenchConfig;

/// Top-level configuration file structure.
///
/// # Example
///
/// ```toml
/// [bench.fibonacci]
/// n = 25
///
/// [bench.counting]
/// limit = 5_000_000
///
/// [bench.report]
/// label = "Rust (release)"
/// runs = 5
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    /// Benchmark settings.
    #[serde(default)]
    pub bench: BenchConfig,
}

impl ConfigFile {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigFileError::Io {
            path: path.as_ref().display().to_string(),
            source: e,
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string cannot be parsed as TOML.
    pub fn from_toml(content: &str) -> Result<Self, ConfigFileError> {
        toml::from_str(content).map_err(|e| ConfigFileError::Parse {
            message: e.to_string(),
        })
    }
}

/// Configuration file errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("Failed to parse config file: {message}")]
    Parse { message: String },
}
