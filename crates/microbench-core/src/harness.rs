//! Timing harness.
//!
//! [`measure`] brackets a single call with two [`Instant`] samples. `Instant`
//! is monotonic, so the elapsed time is never negative and is unaffected by
//! wall-clock adjustments.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::Workload;

/// A workload result together with the time it took to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement<T> {
    /// Value returned by the workload.
    pub value: T,

    /// Time between the clock samples around the workload call.
    pub elapsed: Duration,
}

impl<T> Measurement<T> {
    /// Elapsed time in whole microseconds, rounded to nearest.
    pub fn micros(&self) -> u128 {
        round_micros(self.elapsed)
    }
}

/// Convert a duration to microseconds, rounding half up.
pub fn round_micros(duration: Duration) -> u128 {
    (duration.as_nanos() + 500) / 1_000
}

/// Time a single invocation of `workload`.
///
/// Nothing but the call itself happens between the two clock samples.
pub fn measure<T, F>(workload: F) -> Measurement<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = workload();
    let elapsed = start.elapsed();

    Measurement { value, elapsed }
}

/// Time `runs` consecutive invocations of `workload`.
pub fn measure_runs<W: Workload>(workload: &W, runs: u32) -> Vec<Measurement<u64>> {
    let kind = workload.kind();

    (1..=runs)
        .map(|run| {
            let measurement = measure(|| workload.run());
            debug!(
                workload = %kind,
                run,
                value = measurement.value,
                elapsed_us = measurement.micros(),
                "Run completed"
            );
            measurement
        })
        .collect()
}

/// Aggregate timings over repeated runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of runs aggregated.
    pub runs: u32,
    /// Fastest run.
    pub min: Duration,
    /// Slowest run.
    pub max: Duration,
    /// Arithmetic mean of all runs.
    pub mean: Duration,
}

impl Summary {
    /// Summarize a set of measurements.
    ///
    /// Returns `None` if `measurements` is empty.
    pub fn from_measurements<T>(measurements: &[Measurement<T>]) -> Option<Self> {
        let runs = u32::try_from(measurements.len()).ok()?;
        let min = measurements.iter().map(|m| m.elapsed).min()?;
        let max = measurements.iter().map(|m| m.elapsed).max()?;
        let total: Duration = measurements.iter().map(|m| m.elapsed).sum();

        Some(Self {
            runs,
            min,
            max,
            mean: total / runs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Counter, Fibonacci};

    fn sample(elapsed_us: u64) -> Measurement<u64> {
        Measurement {
            value: 0,
            elapsed: Duration::from_micros(elapsed_us),
        }
    }

    #[test]
    fn test_measure_returns_value() {
        let measurement = measure(|| 6 * 7);

        assert_eq!(measurement.value, 42);
    }

    #[test]
    fn test_measure_elapsed_covers_workload() {
        let measurement = measure(|| std::thread::sleep(Duration::from_millis(2)));

        assert!(measurement.elapsed >= Duration::from_millis(2));
        assert!(measurement.micros() >= 2_000);
    }

    #[test]
    fn test_round_micros() {
        assert_eq!(round_micros(Duration::ZERO), 0);
        assert_eq!(round_micros(Duration::from_nanos(499)), 0);
        assert_eq!(round_micros(Duration::from_nanos(500)), 1);
        assert_eq!(round_micros(Duration::from_nanos(1_499)), 1);
        assert_eq!(round_micros(Duration::from_nanos(1_500)), 2);
        assert_eq!(round_micros(Duration::from_millis(3)), 3_000);
    }

    #[test]
    fn test_measure_runs() {
        let workload = Fibonacci::new(10).unwrap();
        let measurements = measure_runs(&workload, 3);

        assert_eq!(measurements.len(), 3);
        assert!(measurements.iter().all(|m| m.value == 55));
    }

    #[test]
    fn test_measure_runs_counter() {
        let measurements = measure_runs(&Counter::new(1_000), 2);

        assert_eq!(measurements.len(), 2);
        assert!(measurements.iter().all(|m| m.value == 1_000));
    }

    #[test]
    fn test_summary() {
        let summary = Summary::from_measurements(&[sample(30), sample(10), sample(20)]).unwrap();

        assert_eq!(summary.runs, 3);
        assert_eq!(summary.min, Duration::from_micros(10));
        assert_eq!(summary.max, Duration::from_micros(30));
        assert_eq!(summary.mean, Duration::from_micros(20));
    }

    #[test]
    fn test_summary_empty() {
        let empty: [Measurement<u64>; 0] = [];
        assert!(Summary::from_measurements(&empty).is_none());
    }
}
