// Expression tree for mathparse
// Nodes own their children; a tree is built bottom-up and never shared

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::functions::MathFunction;

/// A node of an expression tree.
///
/// Binary nodes always carry both operands and unary nodes exactly one.
/// Dropping a node drops its whole subtree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric literal
    Constant(f64),
    /// The free variable, bound to a value at evaluation time
    Variable,
    /// A negation or a named function applied to one operand
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// An arithmetic operator applied to two operands
    Binary {
        op: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOp {
    /// Unary minus
    Negate,
    /// Application of a named function
    Function(MathFunction),
}

impl BinaryOperator {
    /// The operator as written in an expression.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Pow => "^",
        }
    }
}

impl Expr {
    pub fn binary(op: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn negate(operand: Expr) -> Self {
        Expr::unary(UnaryOp::Negate, operand)
    }

    pub fn call(function: MathFunction, operand: Expr) -> Self {
        Expr::unary(UnaryOp::Function(function), operand)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Constant(_) | Expr::Variable => 1,
            Expr::Unary { operand, .. } => 1 + operand.depth(),
            Expr::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Constant(_) | Expr::Variable => 1,
            Expr::Unary { operand, .. } => 1 + operand.node_count(),
            Expr::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Whether the value of the tree depends on the free variable.
    pub fn contains_variable(&self) -> bool {
        match self {
            Expr::Constant(_) => false,
            Expr::Variable => true,
            Expr::Unary { operand, .. } => operand.contains_variable(),
            Expr::Binary { left, right, .. } => left.contains_variable() || right.contains_variable(),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Negate => f.write_str("-"),
            UnaryOp::Function(function) => write!(f, "{function}"),
        }
    }
}

/// Fully parenthesized infix form. For finite, non-negative constants (the
/// only constants the parser produces) the output parses back to an equal
/// tree, as long as its parentheses nest no deeper than the parser allows.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => write!(f, "{value}"),
            Expr::Variable => f.write_str("X"),
            Expr::Unary {
                op: UnaryOp::Negate,
                operand,
            } => write!(f, "(-{operand})"),
            Expr::Unary {
                op: UnaryOp::Function(function),
                operand,
            } => write!(f, "{function}({operand})"),
            Expr::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
