//! The timing-and-reporting harness.
//!
//! A [`Harness`] holds an ordered list of [`Benchmark`]s and runs them one
//! after another through the same [`measure`] routine, writing one report
//! line per benchmark as soon as it finishes.

pub mod benchmark;
pub mod report;
pub mod timing;

use std::io::Write;

use log::info;

pub use benchmark::Benchmark;
pub use report::{HEADER, Reporter, format_line};
pub use timing::{Measurement, measure, time_repetitions};

use crate::error::HarnessResult;

#[derive(Debug, Default)]
pub struct Harness<'a> {
    benchmarks: Vec<Benchmark<'a>>,
}

impl<'a> Harness<'a> {
    pub fn new(benchmarks: Vec<Benchmark<'a>>) -> Self {
        Self { benchmarks }
    }

    pub fn push(&mut self, benchmark: Benchmark<'a>) {
        self.benchmarks.push(benchmark);
    }

    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }

    /// Write the header, then run every benchmark in order and report it.
    ///
    /// The first error ends the run. Lines already written stay written;
    /// nothing is written for the benchmark that failed.
    pub fn run<W: Write>(&mut self, reporter: &mut Reporter<W>) -> HarnessResult<usize> {
        reporter.header()?;
        for benchmark in self.benchmarks.iter_mut() {
            let measurement = measure(benchmark)?;
            info!(
                "{}: {} iterations in {:?}",
                measurement.name, measurement.iterations, measurement.elapsed
            );
            reporter.line(&measurement)?;
        }
        Ok(self.benchmarks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HarnessError;
    use std::cell::RefCell;

    #[test]
    fn test_runs_in_definition_order() {
        let order = RefCell::new(Vec::new());
        let mut harness = Harness::new(vec![
            Benchmark::new("first", 1, || {
                order.borrow_mut().push("first");
                Ok(())
            }),
            Benchmark::new("second", 2, || {
                order.borrow_mut().push("second");
                Ok(())
            }),
        ]);
        let mut reporter = Reporter::new(Vec::new());
        assert_eq!(harness.run(&mut reporter).unwrap(), 2);
        drop(harness);
        assert_eq!(*order.borrow(), vec!["first", "second", "second"]);

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].starts_with("first\t1\t"));
        assert!(lines[2].starts_with("second\t2\t"));
    }

    #[test]
    fn test_failure_keeps_earlier_lines_only() {
        let mut harness = Harness::new(vec![
            Benchmark::new("ok", 3, || Ok(())),
            Benchmark::new("broken", 3, || {
                Err(HarnessError::InvalidFixture("bad".to_string()))
            }),
            Benchmark::new("never", 3, || Ok(())),
        ]);
        let mut reporter = Reporter::new(Vec::new());
        let err = harness.run(&mut reporter).unwrap_err();
        assert!(matches!(err, HarnessError::Benchmark { ref name, .. } if name == "broken"));

        let text = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("ok\t3\t"));
    }

    #[test]
    fn test_pushed_benchmarks_run_after_initial_ones() {
        let mut harness = Harness::new(vec![Benchmark::new("first", 1, || Ok(()))]);
        harness.push(Benchmark::new("appended", 2, || Ok(())));
        assert_eq!(harness.len(), 2);
        assert!(!harness.is_empty());

        let mut reporter = Reporter::new(Vec::new());
        assert_eq!(harness.run(&mut reporter).unwrap(), 2);
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("appended\t2\t"));
    }

    #[test]
    fn test_empty_harness_prints_header() {
        let mut harness = Harness::default();
        assert!(harness.is_empty());
        let mut reporter = Reporter::new(Vec::new());
        assert_eq!(harness.run(&mut reporter).unwrap(), 0);
        assert_eq!(
            String::from_utf8(reporter.into_inner()).unwrap(),
            format!("{HEADER}\n")
        );
    }
}
