//! Configuration structures for microbench.
//!
//! This module defines configuration options for the benchmarks:
//! - [`BenchConfig`]: Top-level configuration containing all settings
//! - [`FibonacciConfig`]: Input for the recursive Fibonacci workload
//! - [`CountingConfig`]: Loop bound for the counting workload
//! - [`ReportConfig`]: Output label and number of timed runs
//!
//! The defaults reproduce the fixed constants of the standalone programs.

use serde::{Deserialize, Serialize};

use crate::BenchError;

/// Largest `n` whose Fibonacci number fits in a `u64`.
pub const MAX_FIB_N: u32 = 93;

/// Top-level benchmark configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BenchConfig {
    /// Fibonacci workload input.
    #[serde(default)]
    pub fibonacci: FibonacciConfig,

    /// Counting workload input.
    #[serde(default)]
    pub counting: CountingConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Fibonacci workload configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FibonacciConfig {
    /// Index of the Fibonacci number to compute.
    ///
    /// The recursion is exponential in `n`, so values much past 40 take
    /// a very long time even though anything up to [`MAX_FIB_N`] is accepted.
    #[serde(default = "defaults::fib_n")]
    pub n: u32,
}

impl Default for FibonacciConfig {
    fn default() -> Self {
        Self {
            n: defaults::fib_n(),
        }
    }
}

/// Counting workload configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CountingConfig {
    /// Number of increments performed by the loop.
    #[serde(default = "defaults::count_limit")]
    pub limit: u64,
}

impl Default for CountingConfig {
    fn default() -> Self {
        Self {
            limit: defaults::count_limit(),
        }
    }
}

/// Report configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Label printed in the report lines (e.g. "Rust counted to ...").
    #[serde(default = "defaults::label")]
    pub label: String,

    /// Number of timed runs.
    ///
    /// With a single run the output matches the standalone programs exactly.
    #[serde(default = "defaults::runs")]
    pub runs: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            label: defaults::label(),
            runs: defaults::runs(),
        }
    }
}

impl BenchConfig {
    /// Check that every value is inside the range the workloads support.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] if:
    /// - `fibonacci.n` exceeds [`MAX_FIB_N`]
    /// - `report.runs` is zero
    /// - `report.label` is blank
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.fibonacci.n > MAX_FIB_N {
            return Err(BenchError::invalid_config(format!(
                "fib n must be at most {MAX_FIB_N}, got {}",
                self.fibonacci.n
            )));
        }

        if self.report.runs == 0 {
            return Err(BenchError::invalid_config("runs must be at least 1"));
        }

        if self.report.label.trim().is_empty() {
            return Err(BenchError::invalid_config("label must not be empty"));
        }

        Ok(())
    }
}

/// Default value functions for serde.
mod defaults {
    pub const fn fib_n() -> u32 {
        20
    }

    pub const fn count_limit() -> u64 {
        1_000_000
    }

    pub fn label() -> String {
        "Rust".to_string()
    }

    pub const fn runs() -> u32 {
        1
    }
}
