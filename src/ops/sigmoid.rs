use ndarray::{Array, ArrayBase, Data, Dimension, NdFloat};

/// Logistic function `1 / (1 + e^-x)`, elementwise.
///
/// No branching on the input: for large negative `x`, `e^-x` overflows to
/// +∞ and the result is 0; for large positive `x` it underflows to 0 and the
/// result is 1.
pub fn sigmoid<A, S, D>(x: &ArrayBase<S, D>) -> Array<A, D>
where
    A: NdFloat,
    S: Data<Elem = A>,
    D: Dimension,
{
    x.mapv(|v| A::one() / (A::one() + (-v).exp()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    #[test]
    fn test_zero_is_one_half() {
        let out = sigmoid(&array![0.0f32, -0.0]);
        assert_eq!(out, array![0.5, 0.5]);
        assert_eq!(sigmoid(&array![0.0f64])[0], 0.5);
    }

    #[test]
    fn test_saturates_at_infinities() {
        let out = sigmoid(&array![f64::INFINITY, f64::NEG_INFINITY, 800.0, -800.0]);
        assert_eq!(out[0], 1.0);
        assert_eq!(out[1], 0.0);
        assert_eq!(out[2], 1.0);
        assert_eq!(out[3], 0.0);

        let out = sigmoid(&array![100.0f32, -100.0]);
        assert_eq!(out[0], 1.0);
        assert_eq!(out[1], 0.0);
    }

    #[test]
    fn test_output_within_unit_interval() {
        let x = Array2::from_shape_fn((21, 21), |(i, j)| (i as f32 - 10.0) * (j as f32 + 1.0));
        let out = sigmoid(&x);
        assert_eq!(out.dim(), x.dim());
        assert!(out.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_monotonic() {
        let out = sigmoid(&array![-2.0f64, -1.0, 0.0, 1.0, 2.0]);
        assert!(out.iter().zip(out.iter().skip(1)).all(|(lo, hi)| lo < hi));
    }
}
