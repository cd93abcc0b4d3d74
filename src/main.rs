//! microbench CLI entry point.
//!
//! Runs either workload with optional overrides from a TOML config file or
//! command-line flags. Without flags the output matches `fib-bench` and
//! `count-bench`.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use microbench_common::{BenchConfig, ConfigFile};
use microbench_core::{Counter, Fibonacci, run_benchmark};

/// Recursive Fibonacci and counting-loop micro-benchmarks.
#[derive(Debug, Parser)]
#[command(name = "microbench", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, env = "MICROBENCH_CONFIG")]
    config: Option<PathBuf>,

    /// Label printed in the report.
    #[arg(short, long)]
    label: Option<String>,

    /// Number of timed runs.
    #[arg(short, long)]
    runs: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Time a naive recursive Fibonacci.
    Fib {
        /// Index of the Fibonacci number.
        #[arg(short)]
        n: Option<u32>,
    },
    /// Time a counting loop.
    Count {
        /// Number of increments.
        #[arg(short, long)]
        limit: Option<u64>,
    },
}

impl Cli {
    /// Merge defaults, the config file, and flags, in that order.
    fn resolve_config(&self) -> anyhow::Result<BenchConfig> {
        let mut config = match &self.config {
            Some(path) => {
                ConfigFile::from_file(path)
                    .with_context(|| format!("Failed to load {}", path.display()))?
                    .bench
            }
            None => BenchConfig::default(),
        };

        if let Some(label) = &self.label {
            config.report.label.clone_from(label);
        }
        if let Some(runs) = self.runs {
            config.report.runs = runs;
        }
        match self.command {
            Command::Fib { n: Some(n) } => config.fibonacci.n = n,
            Command::Count { limit: Some(limit) } => config.counting.limit = limit,
            _ => {}
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    microbench::init_tracing();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    info!(
        label = %config.report.label,
        runs = config.report.runs,
        "Configuration loaded"
    );

    let stdout = io::stdout().lock();
    match cli.command {
        Command::Fib { .. } => {
            let workload = Fibonacci::new(config.fibonacci.n)?;
            run_benchmark(&workload, &config.report, stdout)
                .context("Failed to run fibonacci benchmark")?;
        }
        Command::Count { .. } => {
            let workload = Counter::new(config.counting.limit);
            run_benchmark(&workload, &config.report, stdout)
                .context("Failed to run counting benchmark")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["microbench", "fib"]);
        let config = cli.resolve_config().unwrap();

        assert_eq!(config, BenchConfig::default());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "microbench",
            "--label",
            "Rust (O3)",
            "--runs",
            "4",
            "count",
            "--limit",
            "42",
        ]);
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.report.label, "Rust (O3)");
        assert_eq!(config.report.runs, 4);
        assert_eq!(config.counting.limit, 42);
        assert_eq!(config.fibonacci.n, 20);
    }

    #[test]
    fn test_cli_rejects_invalid_values() {
        let cli = Cli::parse_from(["microbench", "fib", "-n", "94"]);
        assert!(cli.resolve_config().is_err());

        let cli = Cli::parse_from(["microbench", "--runs", "0", "count"]);
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn test_cli_missing_config_file() {
        let cli = Cli::parse_from(["microbench", "--config", "/nonexistent/bench.toml", "fib"]);
        let err = cli.resolve_config().unwrap_err();

        assert!(err.to_string().contains("/nonexistent/bench.toml"));
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
