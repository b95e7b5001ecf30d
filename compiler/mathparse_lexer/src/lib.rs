//! Lexical analysis for mathparse expressions
//!
//! This crate turns an expression string such as `2 * sin(x) + 1` into a
//! stream of classified tokens for the parser.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use error::LexError;
pub use lexer::Lexer;
pub use logos_token::LogosToken;
pub use token::{Location, Token, TokenClass, TokenKind};
