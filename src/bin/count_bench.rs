//! Times a loop counting to one million and prints the result.

use std::io;

use anyhow::Context;
use tracing::debug;

use microbench_common::BenchConfig;
use microbench_core::{Counter, run_benchmark};

fn main() -> anyhow::Result<()> {
    microbench::init_tracing();

    let config = BenchConfig::default();
    let workload = Counter::new(config.counting.limit);

    debug!(limit = workload.limit(), "Starting counting benchmark");

    run_benchmark(&workload, &config.report, io::stdout().lock())
        .context("Failed to run counting benchmark")?;

    Ok(())
}
