//! Lexer implementation for mathparse expressions
//! Converts expression text into a stream of tokens for the parser

use logos::Logos;

use crate::error::LexError;
use crate::token::{Location, Token, TokenKind};
use crate::LogosToken;

/// Characters skipped between tokens. Must agree with the `Whitespace`
/// pattern of [`LogosToken`].
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c')
}

/// The main lexer struct that holds the state of the lexing process
pub struct Lexer<'a> {
    /// The expression being lexed
    source: &'a str,
    /// The current line number (1-based)
    line: usize,
    /// The current column number (1-based)
    column: usize,
    /// The byte offset that `line` and `column` describe
    offset: usize,
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given expression
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line: 1,
            column: 1,
            offset: 0,
            inner: LogosToken::lexer(source),
        }
    }

    /// The expression this lexer reads from
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Advance line and column tracking up to the byte offset `target`.
    /// Columns count characters, not bytes.
    fn sync_position_to(&mut self, target: usize) {
        let text = &self.source[self.offset..target];

        let mut iter = text.chars().peekable();
        while let Some(c) = iter.next() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else if c == '\r' {
                // \r\n counts as a single line break
                if iter.peek() == Some(&'\n') {
                    iter.next();
                }
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.offset = target;
    }

    fn location_at(&mut self, offset: usize) -> Location {
        self.sync_position_to(offset);
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// An identifier names a function when the next non-blank character is
    /// `(`; otherwise it refers to the free variable.
    fn classify_identifier(&self, lexeme: &str) -> TokenKind {
        let name = lexeme.to_uppercase();
        let rest = self.inner.remainder().trim_start_matches(is_separator);
        if rest.starts_with('(') {
            TokenKind::Function(name)
        } else {
            TokenKind::Variable(name)
        }
    }

    /// Convert a LogosToken to our semantic TokenKind
    fn convert_token(&self, logos_token: LogosToken, lexeme: &str) -> TokenKind {
        match logos_token {
            // Operators
            LogosToken::Plus => TokenKind::Plus,
            LogosToken::Minus => TokenKind::Minus,
            LogosToken::Star => TokenKind::Star,
            LogosToken::Slash => TokenKind::Slash,
            LogosToken::Caret => TokenKind::Caret,
            LogosToken::Percent => TokenKind::Percent,
            LogosToken::Equal => TokenKind::Equal,

            // Delimiters
            LogosToken::LeftParen => TokenKind::LeftParen,
            LogosToken::RightParen => TokenKind::RightParen,

            // Literals and identifiers
            LogosToken::Number(value) => TokenKind::Number(value),
            LogosToken::Identifier => self.classify_identifier(lexeme),

            // Skipped by logos, never produced
            LogosToken::Whitespace => unreachable!("whitespace is skipped by the logos lexer"),
        }
    }
}

impl Lexer<'_> {
    /// Get the next token from the expression.
    ///
    /// Returns `None` once the input is exhausted, and `Some(Err(_))` for
    /// text that starts no token.
    pub fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        let result = self.inner.next()?;
        let span = self.inner.span();
        let source = self.source;
        let lexeme = &source[span.clone()];
        let location = self.location_at(span.start);

        let token = match result {
            Ok(logos_token) => {
                let kind = self.convert_token(logos_token, lexeme);
                Token::new(kind, lexeme, location)
            }
            Err(()) => {
                #[cfg(feature = "logging")]
                log::debug!("invalid token '{}' at {}", lexeme, location);
                return Some(Err(LexError::InvalidToken {
                    lexeme: lexeme.to_string(),
                    location,
                }));
            }
        };

        #[cfg(feature = "logging")]
        log::trace!("token {}", token);
        Some(Ok(token))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Lex a whole expression, stopping at the first invalid token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}

// Include the test module
#[cfg(test)]
mod tests;
