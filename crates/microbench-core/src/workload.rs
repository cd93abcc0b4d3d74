//! The computations being timed.
//!
//! Both workloads are pure and deterministic. Their inputs and intermediate
//! values pass through [`black_box`] so the optimizer cannot fold them into
//! constants and leave nothing to measure.

use std::fmt;
use std::hint::black_box;

use microbench_common::{BenchError, MAX_FIB_N};

/// Identifies a workload and its input for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadKind {
    /// Recursive Fibonacci of `n`.
    Fibonacci {
        /// Index of the Fibonacci number.
        n: u32,
    },
    /// Counting loop up to `limit`.
    Counting {
        /// Number of increments.
        limit: u64,
    },
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkloadKind::Fibonacci { n } => write!(f, "fib({n})"),
            WorkloadKind::Counting { limit } => write!(f, "count_to({limit})"),
        }
    }
}

/// A zero-argument computation that the harness can time.
pub trait Workload {
    /// Describe this workload and its input.
    fn kind(&self) -> WorkloadKind;

    /// Run the computation once and return its result.
    fn run(&self) -> u64;
}

/// Naive doubly-recursive Fibonacci, F(0)=0, F(1)=1.
///
/// The exponential call tree is what the benchmark measures, so this must not
/// be rewritten iteratively or memoized.
pub fn fib(n: u32) -> u64 {
    if n < 2 {
        u64::from(n)
    } else {
        fib(n - 1) + fib(n - 2)
    }
}

/// Increment an accumulator from zero exactly `limit` times.
pub fn count_to(limit: u64) -> u64 {
    let mut count: u64 = 0;
    for _ in 0..limit {
        count = black_box(count + 1);
    }
    count
}

/// Fibonacci workload with a validated input.
#[derive(Debug, Clone, Copy)]
pub struct Fibonacci {
    n: u32,
}

impl Fibonacci {
    /// Create a Fibonacci workload for `n`.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] if `n` exceeds [`MAX_FIB_N`],
    /// since F(n) would overflow a `u64`.
    pub fn new(n: u32) -> Result<Self, BenchError> {
        if n > MAX_FIB_N {
            return Err(BenchError::invalid_config(format!(
                "fib n must be at most {MAX_FIB_N}, got {n}"
            )));
        }
        Ok(Self { n })
    }

    /// The Fibonacci index.
    pub fn n(&self) -> u32 {
        self.n
    }
}

impl Workload for Fibonacci {
    fn kind(&self) -> WorkloadKind {
        WorkloadKind::Fibonacci { n: self.n }
    }

    fn run(&self) -> u64 {
        fib(black_box(self.n))
    }
}

/// Counting-loop workload.
#[derive(Debug, Clone, Copy)]
pub struct Counter {
    limit: u64,
}

impl Counter {
    /// Create a counting workload that loops `limit` times.
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    /// The loop bound.
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Workload for Counter {
    fn kind(&self) -> WorkloadKind {
        WorkloadKind::Counting { limit: self.limit }
    }

    fn run(&self) -> u64 {
        count_to(black_box(self.limit))
    }
}
