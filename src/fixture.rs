//! Benchmark inputs.
//!
//! Everything here is generated once, before the first benchmark starts,
//! and only ever borrowed immutably afterwards.

use log::debug;
use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;

use crate::config::{HarnessConfig, RegressionShape};
use crate::error::{HarnessError, HarnessResult};

/// Build the random source for a run.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::from_entropy(),
    }
}

/// The two square `f32` operands shared by the primitive benchmarks.
#[derive(Debug, Clone)]
pub struct OperandMatrices {
    pub a: Array2<f32>,
    pub b: Array2<f32>,
}

impl OperandMatrices {
    /// Two `dimension × dimension` matrices, uniform in `[0, 1)`.
    pub fn random(dimension: usize, rng: &mut StdRng) -> HarnessResult<Self> {
        if dimension == 0 {
            return Err(HarnessError::InvalidFixture(
                "operand dimension must be non-zero".to_string(),
            ));
        }
        let unit = Uniform::new(0.0f32, 1.0f32);
        let a = Array2::from_shape_simple_fn((dimension, dimension), || unit.sample(rng));
        let b = Array2::from_shape_simple_fn((dimension, dimension), || unit.sample(rng));
        debug!("generated {dimension}x{dimension} operand matrices");
        Ok(Self { a, b })
    }
}

/// Inputs for the regularized logistic-regression cost function.
#[derive(Debug, Clone)]
pub struct RegressionFixture {
    pub theta: Array1<f64>,
    /// Design matrix, column 0 is the bias term.
    pub x: Array2<f64>,
    /// Labels, each 0.0 or 1.0.
    pub y: Array1<f64>,
    pub lambda: f64,
}

impl RegressionFixture {
    /// θ and X come from fixed integer sequences and do not depend on the
    /// seed. Only the labels are drawn from `rng`.
    ///
    /// Each row of X after the bias column is the row above shifted left by
    /// one place in the sequence `0.0, 0.1, .., 1.0`, so no two rows within
    /// eleven of each other are equal, whatever the feature count.
    pub fn generate(shape: &RegressionShape, rng: &mut StdRng) -> HarnessResult<Self> {
        let RegressionShape {
            samples,
            features,
            lambda,
        } = *shape;
        if samples == 0 || features < 2 {
            return Err(HarnessError::InvalidFixture(format!(
                "regression fixture needs at least one sample and two features, got {samples}x{features}"
            )));
        }

        let theta = Array1::from_shape_fn(features, |i| ((i % 7) as f64 - 3.0) * 0.01);

        let x = Array2::from_shape_fn((samples, features), |(row, col)| {
            if col == 0 {
                1.0
            } else {
                ((row + col - 1) % 11) as f64 * 0.1
            }
        });

        let coin = Uniform::new_inclusive(0u8, 1u8);
        let y = Array1::from_shape_simple_fn(samples, || f64::from(coin.sample(rng)));

        debug!("generated regression fixture: {samples} samples, {features} features");
        Ok(Self {
            theta,
            x,
            y,
            lambda,
        })
    }
}

/// All inputs for one run.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub operands: OperandMatrices,
    /// Only built when the selected suite needs it.
    pub regression: Option<RegressionFixture>,
}

impl Fixtures {
    /// The regression fixture is only built when `config.suite` needs it.
    pub fn generate(config: &HarnessConfig) -> HarnessResult<Self> {
        let mut rng = seeded_rng(config.seed);
        let operands = OperandMatrices::random(config.dimension, &mut rng)?;
        let regression = if config.suite.needs_regression() {
            Some(RegressionFixture::generate(&config.regression, &mut rng)?)
        } else {
            None
        };
        Ok(Self {
            operands,
            regression,
        })
    }
}
