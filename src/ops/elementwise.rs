use ndarray::{Array2, NdFloat};

use crate::error::{HarnessError, HarnessResult};

fn check_same_shape<A>(op: &'static str, a: &Array2<A>, b: &Array2<A>) -> HarnessResult<()> {
    if a.shape() != b.shape() {
        return Err(HarnessError::ShapeMismatch {
            op,
            left: a.shape().to_vec(),
            right: b.shape().to_vec(),
        });
    }
    Ok(())
}

/// Elementwise `a + b`.
pub fn add<A: NdFloat>(a: &Array2<A>, b: &Array2<A>) -> HarnessResult<Array2<A>> {
    check_same_shape("add", a, b)?;
    Ok(a + b)
}

/// Elementwise `a / b`.
///
/// Division by zero follows IEEE-754: `x / 0` is ±∞ and `0 / 0` is NaN.
pub fn divide<A: NdFloat>(a: &Array2<A>, b: &Array2<A>) -> HarnessResult<Array2<A>> {
    check_same_shape("divide", a, b)?;
    Ok(a / b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_add_2x2() {
        let a = array![[1.0f32, 2.0], [3.0, 4.0]];
        let b = array![[5.0f32, 6.0], [7.0, 8.0]];
        assert_eq!(add(&a, &b).unwrap(), array![[6.0, 8.0], [10.0, 12.0]]);
    }

    #[test]
    fn test_divide_2x2_with_zero_divisor() {
        let a = array![[1.0f32, 6.0], [-3.0, 0.0]];
        let b = array![[0.0f32, 3.0], [0.0, 0.0]];
        let q = divide(&a, &b).unwrap();
        assert_eq!(q[[0, 0]], f32::INFINITY);
        assert_eq!(q[[0, 1]], 2.0);
        assert_eq!(q[[1, 0]], f32::NEG_INFINITY);
        assert!(q[[1, 1]].is_nan());
    }

    #[test]
    fn test_shape_mismatch_is_reported() {
        let a = Array2::<f64>::zeros((2, 3));
        let b = Array2::<f64>::zeros((3, 2));
        match add(&a, &b) {
            Err(HarnessError::ShapeMismatch { op, left, right }) => {
                assert_eq!(op, "add");
                assert_eq!(left, vec![2, 3]);
                assert_eq!(right, vec![3, 2]);
            }
            other => panic!("expected shape mismatch, got {:?}", other),
        }
        assert!(divide(&a, &b).is_err());
    }
}
