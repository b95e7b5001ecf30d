//! Parse and evaluate arithmetic expressions over one free variable.
//!
//! ```
//! use mathparse::MathParser;
//!
//! let mut parser = MathParser::new();
//! parser.parse("x^2 + sin(0)").unwrap();
//! assert_eq!(parser.evaluate(3.0), 9.0);
//! assert_eq!(parser.evaluate(-2.0), 4.0);
//! ```

pub use mathparse_ast::{BinaryOperator, Expr, MathFunction, UnaryOp};
pub use mathparse_eval::{apply, evaluate, Evaluator};
pub use mathparse_lexer::{LexError, Location};
pub use mathparse_parser::{ErrorKind, ParseError, Parser, ParserConfig};

/// A parser holding the most recently parsed tree and the value of the
/// free variable.
///
/// One instance serves one thread. To evaluate from several threads, clone
/// the tree out with [`MathParser::tree`] and use an [`Evaluator`] per
/// thread.
#[derive(Debug, Clone, Default)]
pub struct MathParser {
    parser: Parser,
    tree: Option<Expr>,
    x: f64,
}

impl MathParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            parser: Parser::with_config(config),
            ..Self::default()
        }
    }

    /// Parse `expression`, replacing the held tree.
    ///
    /// Returns `Ok(None)` for a blank expression. After an error no tree
    /// is held.
    pub fn parse(&mut self, expression: &str) -> Result<Option<&Expr>, ParseError> {
        if self.tree.take().is_some() {
            log::debug!("discarding previous tree");
        }
        self.tree = self.parser.parse(expression)?;
        Ok(self.tree.as_ref())
    }

    /// Bind the free variable to `x` and evaluate the held tree.
    ///
    /// Evaluates to 0 when no tree is held.
    pub fn evaluate(&mut self, x: f64) -> f64 {
        self.x = x;
        evaluate(self.tree.as_ref(), self.x)
    }

    /// Parse `expression` with the free variable reset to 0, then
    /// evaluate it.
    pub fn evaluate_str(&mut self, expression: &str) -> Result<f64, ParseError> {
        self.x = 0.0;
        self.parse(expression)?;
        Ok(evaluate(self.tree.as_ref(), self.x))
    }

    /// The held tree.
    pub fn tree(&self) -> Option<&Expr> {
        self.tree.as_ref()
    }

    /// The value last bound to the free variable.
    pub fn variable(&self) -> f64 {
        self.x
    }
}

/// Parse and evaluate `expression` with the free variable bound to 0.
pub fn eval(expression: &str) -> Result<f64, ParseError> {
    MathParser::new().evaluate_str(expression)
}
