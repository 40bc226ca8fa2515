//! L2-regularized logistic regression cost and gradient.
//!
//! This is the one composite workload in the suite: a matrix-vector
//! product, a sigmoid, two logs, two dot products and a transposed product,
//! all over the same fixture.

use ndarray::{Array1, Array2, s};

use super::sigmoid::sigmoid;
use crate::error::{HarnessError, HarnessResult};

/// Result of [`logistic_cost`].
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticCost {
    /// Mean binary cross-entropy plus the regularization term.
    pub cost: f64,
    /// The `λ/(2m) · Σ θ[1..]²` part of `cost`.
    pub regularization: f64,
    /// One entry per parameter.
    pub gradient: Array1<f64>,
}

/// Cost and gradient of logistic regression with parameters `theta` over
/// the samples in `x` (one row per sample) with labels `y`.
///
/// The bias parameter `theta[0]` is left out of both the regularization
/// term and the regularization part of the gradient.
///
/// A prediction that saturates to exactly 0 or 1 makes one of the logs
/// -∞, and the cost comes out infinite or NaN. That is reported as is.
pub fn logistic_cost(
    theta: &Array1<f64>,
    x: &Array2<f64>,
    y: &Array1<f64>,
    lambda: f64,
) -> HarnessResult<LogisticCost> {
    let (samples, features) = x.dim();
    if theta.is_empty() || theta.len() != features {
        return Err(HarnessError::ShapeMismatch {
            op: "logistic_cost",
            left: x.shape().to_vec(),
            right: theta.shape().to_vec(),
        });
    }
    if y.len() != samples {
        return Err(HarnessError::ShapeMismatch {
            op: "logistic_cost",
            left: x.shape().to_vec(),
            right: y.shape().to_vec(),
        });
    }
    let m = samples as f64;

    let h = sigmoid(&x.dot(theta));

    let positive = y.dot(&h.mapv(f64::ln));
    let negative = y.mapv(|v| 1.0 - v).dot(&h.mapv(|v| (1.0 - v).ln()));
    let unregularized = (-positive - negative) / m;

    let tail = theta.slice(s![1..]);
    let regularization = lambda / (2.0 * m) * tail.dot(&tail);

    let mut masked = theta.clone();
    masked[0] = 0.0;
    let gradient = x.t().dot(&(&h - y)) / m + masked * (lambda / m);

    Ok(LogisticCost {
        cost: unregularized + regularization,
        regularization,
        gradient,
    })
}
