//! Core benchmarking pieces for microbench.
//!
//! This crate provides the whole measurement pipeline:
//! - [`Workload`]: The pure computation being timed ([`Fibonacci`], [`Counter`])
//! - [`measure`]: Monotonic-clock harness returning a [`Measurement`]
//! - [`Reporter`]: Fixed-format text output of results and timings
//! - [`run_benchmark`]: Glue running a workload and reporting it
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │   harness    │───▶│   workload   │───▶│   harness    │
//! │ Instant::now │    │  (sync call) │    │  elapsed()   │
//! └──────────────┘    └──────────────┘    └──────┬───────┘
//!                                                │
//!                                                ▼
//!                                         ┌──────────────┐
//!                                         │   reporter   │
//!                                         │   (stdout)   │
//!                                         └──────────────┘
//! ```

pub mod harness;
pub mod report;
pub mod runner;
pub mod workload;

pub use harness::{Measurement, Summary, measure, measure_runs, round_micros};
pub use report::Reporter;
pub use runner::run_benchmark;
pub use workload::{Counter, Fibonacci, Workload, WorkloadKind, count_to, fib};
