//! The benchmark lists.
//!
//! Adding or removing a benchmark only touches [`benchmarks`]; timing and
//! reporting are the same for all of them.

use std::hint::black_box;

use crate::config::{HarnessConfig, Suite};
use crate::error::{HarnessError, HarnessResult};
use crate::fixture::Fixtures;
use crate::harness::Benchmark;
use crate::ops;

impl Suite {
    pub fn needs_regression(self) -> bool {
        matches!(self, Suite::Extended)
    }
}

/// Build the ordered benchmark list for `config.suite` over `fixtures`.
pub fn benchmarks<'a>(
    config: &HarnessConfig,
    fixtures: &'a Fixtures,
) -> HarnessResult<Vec<Benchmark<'a>>> {
    let iterations = config.iterations;
    let a = &fixtures.operands.a;
    let b = &fixtures.operands.b;

    let mut list = vec![
        Benchmark::new("dot(A, B)", iterations.dot, move || {
            black_box(ops::dot(a, b)?);
            Ok(())
        }),
        Benchmark::new("divide(A, B)", iterations.divide, move || {
            black_box(ops::divide(a, b)?);
            Ok(())
        }),
        Benchmark::new("add(A, B)", iterations.add, move || {
            black_box(ops::add(a, b)?);
            Ok(())
        }),
        Benchmark::new("sigmoid(A)", iterations.sigmoid, move || {
            black_box(ops::sigmoid(a));
            Ok(())
        }),
    ];

    if config.suite.needs_regression() {
        let fixture = fixtures.regression.as_ref().ok_or_else(|| {
            HarnessError::InvalidFixture(
                "extended suite needs a regression fixture".to_string(),
            )
        })?;
        list.push(Benchmark::new(
            "logistic_cost(theta, X, y, lambda)",
            iterations.logistic_cost,
            move || {
                black_box(ops::logistic_cost(
                    &fixture.theta,
                    &fixture.x,
                    &fixture.y,
                    fixture.lambda,
                )?);
                Ok(())
            },
        ));
    }

    Ok(list)
}
