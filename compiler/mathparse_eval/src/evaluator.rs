use mathparse_ast::{BinaryOperator, Expr, UnaryOp};

use crate::functions::apply;

/// Evaluates trees with the free variable bound to a fixed value.
///
/// The value is carried by the evaluator, never by the tree, so a tree can
/// be evaluated from several threads at once with different values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Evaluator {
    x: f64,
}

impl Evaluator {
    pub fn new(x: f64) -> Self {
        Self { x }
    }

    /// The value the free variable is bound to.
    pub fn variable(&self) -> f64 {
        self.x
    }

    /// Evaluate `expr` in post-order.
    pub fn eval(&self, expr: &Expr) -> f64 {
        match expr {
            Expr::Constant(value) => *value,
            Expr::Variable => self.x,
            Expr::Binary { op, left, right } => {
                let left = self.eval(left);
                let right = self.eval(right);
                match op {
                    BinaryOperator::Add => left + right,
                    BinaryOperator::Sub => left - right,
                    BinaryOperator::Mul => left * right,
                    BinaryOperator::Div => left / right,
                    BinaryOperator::Pow => left.powf(right),
                }
            }
            Expr::Unary { op, operand } => {
                let value = self.eval(operand);
                match op {
                    UnaryOp::Negate => -value,
                    UnaryOp::Function(function) => apply(*function, value),
                }
            }
        }
    }
}

/// Evaluate `tree` with the free variable bound to `x`.
///
/// A missing tree evaluates to 0.
pub fn evaluate(tree: Option<&Expr>, x: f64) -> f64 {
    tree.map_or(0.0, |expr| Evaluator::new(x).eval(expr))
}
