//! Harness configuration.
//!
//! Every value here is a compiled-in default. The binary never reads a
//! config file, flags or environment variables; `from_json` exists so tests
//! and other tools can build a smaller configuration without touching code.

use serde::{Deserialize, Serialize};

use crate::error::HarnessResult;

/// Side length of the square operand matrices.
pub const DIMENSION: usize = 3000;

/// Seed used when none is given. Fixed so default runs are reproducible.
pub const DEFAULT_SEED: u64 = 0x5eed_2024;

/// Which benchmark list to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suite {
    /// dot, divide, add, sigmoid.
    Base,
    /// Base plus the logistic-regression cost function.
    Extended,
}

/// Shape and regularization of the logistic-regression fixture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegressionShape {
    /// Number of samples (rows of X).
    pub samples: usize,
    /// Number of parameters, bias included (columns of X).
    pub features: usize,
    pub lambda: f64,
}

impl Default for RegressionShape {
    fn default() -> Self {
        Self {
            samples: 5000,
            features: 401,
            lambda: 1.0,
        }
    }
}

/// Repetitions per benchmark, chosen so each one finishes in a few seconds
/// on a desktop machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Iterations {
    pub dot: u32,
    pub divide: u32,
    pub add: u32,
    pub sigmoid: u32,
    pub logistic_cost: u32,
}

impl Default for Iterations {
    fn default() -> Self {
        Self {
            dot: 20,
            divide: 30,
            add: 100,
            sigmoid: 50,
            logistic_cost: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub dimension: usize,
    /// `None` draws the seed from OS entropy.
    pub seed: Option<u64>,
    pub suite: Suite,
    pub regression: RegressionShape,
    pub iterations: Iterations,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            dimension: DIMENSION,
            seed: Some(DEFAULT_SEED),
            suite: Suite::Extended,
            regression: RegressionShape::default(),
            iterations: Iterations::default(),
        }
    }
}

impl HarnessConfig {
    /// Parse a configuration; missing fields take their defaults.
    pub fn from_json(text: &str) -> HarnessResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
