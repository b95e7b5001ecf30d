use std::fmt;

/// Represents a token's location in the expression text.
///
/// Line and column are 1-based and counted in characters; the offset is the
/// 0-based byte offset from the start of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based line number
    pub line: usize,
    /// The 1-based column number
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

impl Location {
    /// The location of the first character of a source.
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

/// The classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// A single-character operator or parenthesis
    Delimiter,
    /// A numeric literal
    Number,
    /// An identifier referring to the free variable
    Variable,
    /// An identifier immediately followed by `(`
    Function,
}

/// The kind of a token, together with its payload.
///
/// Identifier payloads are already upper-cased, so `sin`, `Sin` and `SIN`
/// produce equal kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Percent,
    Equal,

    // Delimiters
    LeftParen,
    RightParen,

    // Literals and identifiers
    Number(f64),
    Variable(String),
    Function(String),
}

impl TokenKind {
    /// Returns the classification of this kind.
    pub fn class(&self) -> TokenClass {
        match self {
            TokenKind::Number(_) => TokenClass::Number,
            TokenKind::Variable(_) => TokenClass::Variable,
            TokenKind::Function(_) => TokenClass::Function,
            _ => TokenClass::Delimiter,
        }
    }

    /// Returns true if this kind is a delimiter.
    pub fn is_delimiter(&self) -> bool {
        self.class() == TokenClass::Delimiter
    }
}

/// A token in the expression text, including its kind, lexeme, and location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of the token
    pub kind: TokenKind,
    /// The original source text of the token, not case-folded
    pub lexeme: String,
    /// The location of the token in the source
    pub location: Location,
}

impl Token {
    /// Creates a new token.
    pub fn new<S: Into<String>>(kind: TokenKind, lexeme: S, location: Location) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// Returns the classification of this token.
    pub fn class(&self) -> TokenClass {
        self.kind.class()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.kind, self.location)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let location = Location::start();
        let token = Token::new(TokenKind::Plus, "+", location);
        assert_eq!(token.kind, TokenKind::Plus);
        assert_eq!(token.lexeme, "+");
        assert_eq!(token.location, location);
    }

    #[test]
    fn test_token_classes() {
        let location = Location::default();
        let cases = [
            (TokenKind::Caret, TokenClass::Delimiter),
            (TokenKind::RightParen, TokenClass::Delimiter),
            (TokenKind::Number(1.5), TokenClass::Number),
            (TokenKind::Variable("X".into()), TokenClass::Variable),
            (TokenKind::Function("SIN".into()), TokenClass::Function),
        ];

        for (kind, class) in cases {
            let token = Token::new(kind, "", location);
            assert_eq!(token.class(), class);
        }
        assert!(TokenKind::Equal.is_delimiter());
        assert!(!TokenKind::Number(0.0).is_delimiter());
    }

    #[test]
    fn test_location_display() {
        let location = Location {
            line: 2,
            column: 7,
            offset: 12,
        };
        assert_eq!(location.to_string(), "2:7");
    }
}
