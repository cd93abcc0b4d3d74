//! Times a naive recursive `fib(20)` and prints the result.

use std::io;

use anyhow::Context;
use tracing::debug;

use microbench_common::BenchConfig;
use microbench_core::{Fibonacci, run_benchmark};

fn main() -> anyhow::Result<()> {
    microbench::init_tracing();

    let config = BenchConfig::default();
    let workload = Fibonacci::new(config.fibonacci.n)?;

    debug!(n = workload.n(), "Starting fibonacci benchmark");

    run_benchmark(&workload, &config.report, io::stdout().lock())
        .context("Failed to run fibonacci benchmark")?;

    Ok(())
}
