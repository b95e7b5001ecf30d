//! Operand stack used by the parser to assemble subtrees.
//!
//! Productions push leaves as they are recognized and reduce operators
//! once their operands are on the stack, so the top frames are always the
//! most recently completed subtrees.

use std::fmt;

use mathparse_ast::{BinaryOperator, Expr, UnaryOp};

use crate::error::ParseError;

#[derive(Debug)]
struct Frame {
    expr: Expr,
    /// Cached `expr.depth()`
    depth: usize,
}

/// A stack of partially built trees.
#[derive(Debug)]
pub struct OperandStack {
    frames: Vec<Frame>,
    max_depth: usize,
}

impl Default for OperandStack {
    fn default() -> Self {
        Self::new()
    }
}

impl OperandStack {
    pub fn new() -> Self {
        Self::with_depth_limit(usize::MAX)
    }

    /// A stack that refuses to build trees deeper than `max_depth`.
    pub fn with_depth_limit(max_depth: usize) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Push a finished subtree without consuming any frame.
    pub fn push_leaf(&mut self, leaf: Expr) {
        let depth = leaf.depth();
        self.frames.push(Frame { expr: leaf, depth });
    }

    /// Pop the right then the left operand and push them combined.
    pub fn reduce_binary(&mut self, op: BinaryOperator) -> Result<(), ParseError> {
        self.ensure(&op, 2)?;
        let right = self.pop(&op)?;
        let left = self.pop(&op)?;
        let depth = 1 + left.depth.max(right.depth);
        self.push_node(Expr::binary(op, left.expr, right.expr), depth)
    }

    /// Pop one operand and push it wrapped in `op`.
    pub fn reduce_unary(&mut self, op: UnaryOp) -> Result<(), ParseError> {
        self.ensure(&op, 1)?;
        let operand = self.pop(&op)?;
        let depth = 1 + operand.depth;
        self.push_node(Expr::unary(op, operand.expr), depth)
    }

    /// Take the single remaining tree.
    pub fn finish(mut self) -> Result<Expr, ParseError> {
        match self.frames.len() {
            1 => self
                .frames
                .pop()
                .map(|frame| frame.expr)
                .ok_or_else(|| ParseError::Internal("operand stack emptied during finish".into())),
            0 => Err(ParseError::underflow(&"expression", 1, 0)),
            n => Err(ParseError::Internal(format!(
                "{n} operands left after parsing"
            ))),
        }
    }

    fn ensure(&self, operator: &dyn fmt::Display, needed: usize) -> Result<(), ParseError> {
        let available = self.frames.len();
        if available < needed {
            log::debug!("'{operator}' needs {needed} operand(s), stack holds {available}");
            return Err(ParseError::underflow(operator, needed, available));
        }
        Ok(())
    }

    fn pop(&mut self, operator: &dyn fmt::Display) -> Result<Frame, ParseError> {
        self.frames
            .pop()
            .ok_or_else(|| ParseError::underflow(operator, 1, 0))
    }

    fn push_node(&mut self, expr: Expr, depth: usize) -> Result<(), ParseError> {
        if depth > self.max_depth {
            return Err(ParseError::TreeTooDeep {
                limit: self.max_depth,
            });
        }
        self.frames.push(Frame { expr, depth });
        Ok(())
    }
}
