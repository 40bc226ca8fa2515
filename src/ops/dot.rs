use ndarray::{Array2, LinalgScalar};

use crate::error::{HarnessError, HarnessResult};

/// Matrix product `a · b`, computed by ndarray's GEMM.
///
/// `a` is m × k, `b` is k × n, the result is m × n.
pub fn dot<A: LinalgScalar>(a: &Array2<A>, b: &Array2<A>) -> HarnessResult<Array2<A>> {
    if a.ncols() != b.nrows() {
        return Err(HarnessError::ShapeMismatch {
            op: "dot",
            left: a.shape().to_vec(),
            right: b.shape().to_vec(),
        });
    }
    Ok(a.dot(b))
}
