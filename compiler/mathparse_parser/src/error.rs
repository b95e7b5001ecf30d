use std::fmt;

use mathparse_lexer::{LexError, Location, Token};

/// A failure to turn an expression into a tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The lexer met text that starts no token
    #[error(transparent)]
    InvalidToken(#[from] LexError),

    /// A name followed by `(` that is not in the function table
    #[error("unknown function '{name}' at {location}")]
    UnknownFunction { name: String, location: Location },

    /// A `(` never closed, or a `)` with nothing to close
    #[error("unmatched parenthesis at {location}")]
    UnmatchedParenthesis { location: Location },

    /// An operator reduced with fewer operands than it takes
    #[error("'{operator}' needs {needed} operand(s), found {available}")]
    StackUnderflow {
        operator: String,
        needed: usize,
        available: usize,
    },

    /// A token the grammar has no use for at this position
    #[error("unexpected '{lexeme}' at {location}")]
    UnexpectedToken { lexeme: String, location: Location },

    /// Groups nested beyond the configured limit
    #[error("expression nested deeper than {limit} levels at {location}")]
    NestingTooDeep { limit: usize, location: Location },

    /// The finished tree would exceed the configured depth
    #[error("expression tree deeper than {limit} levels")]
    TreeTooDeep { limit: usize },

    /// The expression holds no tokens
    #[error("empty expression")]
    EmptyExpression,

    #[error("internal parser error: {0}")]
    Internal(String),
}

/// The kind of a [`ParseError`], without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidToken,
    UnknownFunction,
    UnmatchedParenthesis,
    StackUnderflow,
    UnexpectedToken,
    NestingTooDeep,
    TreeTooDeep,
    EmptyExpression,
    Internal,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::InvalidToken(_) => ErrorKind::InvalidToken,
            ParseError::UnknownFunction { .. } => ErrorKind::UnknownFunction,
            ParseError::UnmatchedParenthesis { .. } => ErrorKind::UnmatchedParenthesis,
            ParseError::StackUnderflow { .. } => ErrorKind::StackUnderflow,
            ParseError::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            ParseError::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
            ParseError::TreeTooDeep { .. } => ErrorKind::TreeTooDeep,
            ParseError::EmptyExpression => ErrorKind::EmptyExpression,
            ParseError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Where in the source the error was detected, when known.
    pub fn location(&self) -> Option<Location> {
        match self {
            ParseError::InvalidToken(err) => Some(err.location()),
            ParseError::UnknownFunction { location, .. }
            | ParseError::UnmatchedParenthesis { location }
            | ParseError::UnexpectedToken { location, .. }
            | ParseError::NestingTooDeep { location, .. } => Some(*location),
            ParseError::StackUnderflow { .. }
            | ParseError::TreeTooDeep { .. }
            | ParseError::EmptyExpression
            | ParseError::Internal(_) => None,
        }
    }

    pub(crate) fn unexpected(token: &Token) -> Self {
        ParseError::UnexpectedToken {
            lexeme: token.lexeme.clone(),
            location: token.location,
        }
    }

    pub(crate) fn underflow(operator: &dyn fmt::Display, needed: usize, available: usize) -> Self {
        ParseError::StackUnderflow {
            operator: operator.to_string(),
            needed,
            available,
        }
    }
}
