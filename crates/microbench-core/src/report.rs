//! Fixed-format text reporting.
//!
//! Output formats:
//!
//! ```text
//! Result: 6765
//! Calculating fib(20) in Rust took: 41 microseconds
//! ```
//!
//! ```text
//! Rust counted to 1000000 in 512 microseconds
//! ```

use std::io::{self, Write};

use crate::{Measurement, Summary, WorkloadKind, round_micros};

/// Writes benchmark results to any [`Write`] sink.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
    label: String,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing to `out`, naming the implementation `label`.
    pub fn new(out: W, label: impl Into<String>) -> Self {
        Self {
            out,
            label: label.into(),
        }
    }

    /// Report a single measurement of the given workload.
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing to the underlying sink.
    pub fn report(&mut self, kind: WorkloadKind, measurement: &Measurement<u64>) -> io::Result<()> {
        match kind {
            WorkloadKind::Fibonacci { n } => {
                writeln!(self.out, "Result: {}", measurement.value)?;
                writeln!(
                    self.out,
                    "Calculating fib({n}) in {} took: {} microseconds",
                    self.label,
                    measurement.micros()
                )?;
            }
            WorkloadKind::Counting { .. } => {
                writeln!(
                    self.out,
                    "{} counted to {} in {} microseconds",
                    self.label,
                    measurement.value,
                    measurement.micros()
                )?;
            }
        }
        self.out.flush()
    }

    /// Report min/mean/max over repeated runs.
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing to the underlying sink.
    pub fn summary(&mut self, kind: WorkloadKind, summary: &Summary) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {kind} over {} runs: min {} / mean {} / max {} microseconds",
            self.label,
            summary.runs,
            round_micros(summary.min),
            round_micros(summary.mean),
            round_micros(summary.max)
        )?;
        self.out.flush()
    }

    /// Consume the reporter and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
