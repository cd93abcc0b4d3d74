//! Common types, errors, and configuration for microbench.
//!
//! This crate provides shared functionality used across the microbench workspace:
//! - Error types using `thiserror` for type-safe error handling
//! - Configuration structures for workload inputs and report labels
//! - TOML configuration file loading

pub mod config;
pub mod config_file;
pub mod error;

pub use config::{BenchConfig, CountingConfig, FibonacciConfig, MAX_FIB_N, ReportConfig};
pub use config_file::{ConfigFile, ConfigFileError};
pub use error::BenchError;
