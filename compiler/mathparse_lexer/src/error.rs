//! Errors produced while scanning an expression.

use crate::token::Location;

/// An error raised by the [`Lexer`](crate::Lexer).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character (or character run) that starts no known token.
    #[error("invalid token '{lexeme}' at {location}")]
    InvalidToken {
        /// The offending source text
        lexeme: String,
        /// Where the offending text starts
        location: Location,
    },
}

impl LexError {
    /// The location the error refers to.
    pub fn location(&self) -> Location {
        match self {
            LexError::InvalidToken { location, .. } => *location,
        }
    }
}
