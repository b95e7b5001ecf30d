//! Numeric evaluation of mathparse expression trees.
//!
//! Evaluation never fails: division by zero and out-of-domain arguments
//! produce the IEEE 754 infinities and NaNs that `f64` arithmetic gives.

pub mod evaluator;
pub mod functions;

pub use evaluator::{evaluate, Evaluator};
pub use functions::apply;
