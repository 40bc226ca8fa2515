//! The operations under test.
//!
//! These are thin wrappers over `ndarray`. Each one checks its shape
//! preconditions and reports a mismatch as an error instead of letting the
//! library panic, so a broken fixture stops the run with a readable message.

pub mod dot;
pub mod elementwise;
pub mod logistic;
pub mod sigmoid;

pub use dot::dot;
pub use elementwise::{add, divide};
pub use logistic::{LogisticCost, logistic_cost};
pub use sigmoid::sigmoid;
