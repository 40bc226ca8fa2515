//! Wall-clock microbenchmarks for dense-matrix operations.
//!
//! I wanted a like-for-like number to put next to NumPy's for the handful
//! of operations a small neural net spends its time in: a 3000×3000 GEMM,
//! elementwise divide and add, a sigmoid, and a full logistic-regression
//! cost/gradient step. The numerics all come from `ndarray`; this crate
//! only times them and prints one tab-separated line per benchmark.
//!
//! ## Usage
//!
//! ```
//! use matbench::config::{HarnessConfig, Suite};
//!
//! let mut config = HarnessConfig::default();
//! config.dimension = 8;
//! config.suite = Suite::Base;
//!
//! let mut out = Vec::new();
//! matbench::run(&config, &mut out, None).unwrap();
//!
//! let report = String::from_utf8(out).unwrap();
//! assert!(report.starts_with("benchmark\titerations\taverage time\n"));
//! assert_eq!(report.lines().count(), 5);
//! ```
//!
//! ## What's inside
//!
//! - `fixture`: seeded operand matrices and the regression fixture
//! - `ops`: shape-checked add, divide, dot, sigmoid and logistic cost
//! - `harness`: the timing loop and the report writer
//! - `diagnostics`: what ndarray is running on, printed after the results

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fixture;
pub mod harness;
pub mod ops;
pub mod suite;

use std::io::Write;

use log::info;

use config::HarnessConfig;
use diagnostics::Diagnostics;
use fixture::Fixtures;
use harness::{Harness, Reporter};

pub use error::{HarnessError, HarnessResult};

/// Generate the fixtures, run the configured suite and write the report to
/// `out`. Diagnostics, if given, are appended after the last result.
///
/// Any error stops the run: fixture errors before the header is written,
/// benchmark errors after the lines of the benchmarks that already ran.
pub fn run<W: Write>(
    config: &HarnessConfig,
    out: W,
    diagnostics: Option<&dyn Diagnostics>,
) -> HarnessResult<()> {
    info!(
        "generating fixtures: {0}x{0}, seed {1:?}",
        config.dimension, config.seed
    );
    let fixtures = Fixtures::generate(config)?;

    let mut harness = Harness::new(suite::benchmarks(config, &fixtures)?);
    let mut reporter = Reporter::new(out);
    let count = harness.run(&mut reporter)?;
    info!("{count} benchmarks completed");

    if let Some(diagnostics) = diagnostics {
        reporter.diagnostics(diagnostics)?;
    }
    Ok(())
}
