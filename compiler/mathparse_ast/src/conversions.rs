use super::ast::{Expr, UnaryOp};
use super::functions::MathFunction;

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Constant(value)
    }
}

impl From<MathFunction> for UnaryOp {
    fn from(function: MathFunction) -> Self {
        UnaryOp::Function(function)
    }
}
