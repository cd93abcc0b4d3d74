//! Run a workload and report it.
//!
//! The sequence is strictly: time the workload, then write the report.
//! Logging happens outside the measurement window.

use std::io::Write;

use tracing::{info, instrument};

use microbench_common::{BenchError, ReportConfig};

use crate::{Measurement, Reporter, Summary, Workload, measure_runs};

/// Time `workload` `report.runs` times and write the report to `out`.
///
/// Every run is reported with the standard format. When more than one run is
/// requested a summary line follows.
///
/// # Errors
///
/// Returns an error if:
/// - `report.runs` is zero
/// - Writing to `out` fails
#[instrument(skip(workload, report, out), fields(workload = %workload.kind(), runs = report.runs))]
pub fn run_benchmark<W, O>(
    workload: &W,
    report: &ReportConfig,
    out: O,
) -> Result<Vec<Measurement<u64>>, BenchError>
where
    W: Workload,
    O: Write,
{
    if report.runs == 0 {
        return Err(BenchError::invalid_config("runs must be at least 1"));
    }

    let kind = workload.kind();
    let measurements = measure_runs(workload, report.runs);

    let mut reporter = Reporter::new(out, report.label.as_str());
    for measurement in &measurements {
        reporter.report(kind, measurement)?;
    }

    if measurements.len() > 1 {
        if let Some(summary) = Summary::from_measurements(&measurements) {
            info!(
                min_us = summary.min.as_micros(),
                mean_us = summary.mean.as_micros(),
                max_us = summary.max.as_micros(),
                "Benchmark summary"
            );
            reporter.summary(kind, &summary)?;
        }
    } else {
        info!("Benchmark completed");
    }

    Ok(measurements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Counter, Fibonacci};

    #[test]
    fn test_single_run_output() {
        let mut out = Vec::new();
        let measurements =
            run_benchmark(&Counter::new(10), &ReportConfig::default(), &mut out).unwrap();

        assert_eq!(measurements.len(), 1);
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("Rust counted to 10 in "));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_multiple_runs_add_summary() {
        let report = ReportConfig {
            runs: 3,
            ..Default::default()
        };
        let mut out = Vec::new();
        run_benchmark(&Fibonacci::new(5).unwrap(), &report, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        // Two lines per fib run, plus the summary.
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Result: 5");
        assert!(lines[6].starts_with("Rust fib(5) over 3 runs: min "));
    }

    #[test]
    fn test_zero_runs_rejected() {
        let report = ReportConfig {
            runs: 0,
            ..Default::default()
        };
        let err = run_benchmark(&Counter::new(1), &report, Vec::new()).unwrap_err();

        assert!(err.is_invalid_config());
    }
}
