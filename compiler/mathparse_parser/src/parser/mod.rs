// Recursive-descent parser for mathparse expressions
// Productions drive an operand stack instead of returning subtrees
//
//   expression := term (('+' | '-') term)*
//   term       := exponent (('*' | '/') exponent)*
//   exponent   := signed ('^' exponent)?
//   signed     := ('+' | '-')? primary
//   primary    := FUNCTION '(' expression ')'
//               | '(' expression ')'
//               | NUMBER
//               | VARIABLE

use mathparse_ast::{BinaryOperator, Expr, MathFunction, UnaryOp};
use mathparse_lexer::{Lexer, Location, Token, TokenKind};

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::stack::OperandStack;

/// Parses expression strings into trees.
///
/// A `Parser` holds no per-expression state, so one instance can parse any
/// number of expressions.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `source` into a tree.
    ///
    /// Returns `Ok(None)` when `source` contains no tokens.
    pub fn parse(&self, source: &str) -> Result<Option<Expr>, ParseError> {
        log::debug!("=== parse {:?} ===", source);

        let mut state = ParseState::new(source, self.config)?;
        if state.current.is_none() {
            log::debug!("empty expression");
            return Ok(None);
        }

        let result = state.expression().and_then(|()| state.expect_end());
        if let Err(e) = &result {
            log::debug!("parse failed: {e}");
        }
        result?;

        let tree = state.stack.finish()?;
        log::debug!(
            "parse succeeded: {} node(s), depth {}",
            tree.node_count(),
            tree.depth()
        );
        Ok(Some(tree))
    }

    /// Like [`Parser::parse`], but an empty expression is an error.
    pub fn parse_required(&self, source: &str) -> Result<Expr, ParseError> {
        self.parse(source)?.ok_or(ParseError::EmptyExpression)
    }
}

/// Parse `source` with the default configuration.
pub fn parse(source: &str) -> Result<Option<Expr>, ParseError> {
    Parser::new().parse(source)
}

/// State of a single `parse` call: the token cursor, the lookahead token
/// and the operand stack.
struct ParseState<'a> {
    lexer: Lexer<'a>,
    current: Option<Token>,
    stack: OperandStack,
    nesting: usize,
    max_nesting: usize,
}

impl<'a> ParseState<'a> {
    fn new(source: &'a str, config: ParserConfig) -> Result<Self, ParseError> {
        let mut state = Self {
            lexer: Lexer::new(source),
            current: None,
            stack: OperandStack::with_depth_limit(config.max_tree_depth),
            nesting: 0,
            max_nesting: config.max_nesting,
        };
        state.advance()?;
        Ok(state)
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token().transpose()?;
        Ok(())
    }

    fn peek(&self) -> Option<&TokenKind> {
        self.current.as_ref().map(|token| &token.kind)
    }

    /// Location of the lookahead token if it is of kind `kind`.
    fn at(&self, kind: &TokenKind) -> Option<Location> {
        self.current
            .as_ref()
            .filter(|token| &token.kind == kind)
            .map(|token| token.location)
    }

    fn enter(&mut self, location: Location) -> Result<(), ParseError> {
        self.nesting += 1;
        if self.nesting > self.max_nesting {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_nesting,
                location,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    fn reduce_binary(&mut self, op: BinaryOperator) -> Result<(), ParseError> {
        log::trace!("reduce '{op}' over {} operand(s)", self.stack.len());
        self.stack.reduce_binary(op)
    }

    fn reduce_unary(&mut self, op: UnaryOp) -> Result<(), ParseError> {
        log::trace!("reduce '{op}' over {} operand(s)", self.stack.len());
        self.stack.reduce_unary(op)
    }

    // Add or subtract two terms.
    fn expression(&mut self) -> Result<(), ParseError> {
        self.term()?;
        loop {
            let op = match self.peek() {
                Some(TokenKind::Plus) => BinaryOperator::Add,
                Some(TokenKind::Minus) => BinaryOperator::Sub,
                _ => return Ok(()),
            };
            self.advance()?;
            self.term()?;
            self.reduce_binary(op)?;
        }
    }

    // Multiply or divide two factors.
    fn term(&mut self) -> Result<(), ParseError> {
        self.exponent()?;
        loop {
            let op = match self.peek() {
                Some(TokenKind::Star) => BinaryOperator::Mul,
                Some(TokenKind::Slash) => BinaryOperator::Div,
                _ => return Ok(()),
            };
            self.advance()?;
            self.exponent()?;
            self.reduce_binary(op)?;
        }
    }

    // Exponents group to the right: 2^3^2 is 2^(3^2).
    fn exponent(&mut self) -> Result<(), ParseError> {
        self.signed()?;
        if let Some(location) = self.at(&TokenKind::Caret) {
            self.advance()?;
            self.enter(location)?;
            self.exponent()?;
            self.leave();
            self.reduce_binary(BinaryOperator::Pow)?;
        }
        Ok(())
    }

    // Unary plus is dropped; unary minus wraps the primary.
    fn signed(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            Some(TokenKind::Plus) => {
                self.advance()?;
                self.primary()
            }
            Some(TokenKind::Minus) => {
                self.advance()?;
                self.primary()?;
                self.reduce_unary(UnaryOp::Negate)
            }
            _ => self.primary(),
        }
    }

    // A token that cannot start an operand (end of input included) pushes
    // nothing and stays current; the reduction expecting the operand then
    // reports the underflow.
    fn primary(&mut self) -> Result<(), ParseError> {
        let Some(token) = self.current.as_ref() else {
            return Ok(());
        };

        match &token.kind {
            TokenKind::Number(value) => {
                self.stack.push_leaf(Expr::Constant(*value));
                self.advance()
            }
            TokenKind::Variable(_) => {
                self.stack.push_leaf(Expr::Variable);
                self.advance()
            }
            TokenKind::Function(name) => {
                let function = MathFunction::from_name(name).ok_or_else(|| {
                    ParseError::UnknownFunction {
                        name: name.clone(),
                        location: token.location,
                    }
                })?;
                self.advance()?;
                self.group()?;
                self.reduce_unary(UnaryOp::Function(function))
            }
            TokenKind::LeftParen => self.group(),
            _ => Ok(()),
        }
    }

    // '(' expression ')'
    fn group(&mut self) -> Result<(), ParseError> {
        let open = match self.current.as_ref() {
            Some(token) if token.kind == TokenKind::LeftParen => token.location,
            Some(token) => return Err(ParseError::unexpected(token)),
            None => {
                return Err(ParseError::Internal(
                    "group parsed without an opening parenthesis".into(),
                ))
            }
        };

        self.enter(open)?;
        self.advance()?;
        self.expression()?;

        match self.current.as_ref() {
            Some(token) if token.kind == TokenKind::RightParen => {
                self.leave();
                self.advance()
            }
            Some(token) => Err(ParseError::unexpected(token)),
            None => Err(ParseError::UnmatchedParenthesis { location: open }),
        }
    }

    // Everything must be consumed by the top-level expression.
    fn expect_end(&self) -> Result<(), ParseError> {
        match self.current.as_ref() {
            None => Ok(()),
            Some(token) if token.kind == TokenKind::RightParen => {
                Err(ParseError::UnmatchedParenthesis {
                    location: token.location,
                })
            }
            Some(token) => Err(ParseError::unexpected(token)),
        }
    }
}
