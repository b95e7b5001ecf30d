use logos::Logos;

/// Raw token type recognized by the logos state machine.
///
/// Identifiers are not yet split into functions and variables here; that
/// needs a look at the text following the identifier and is done by
/// [`Lexer`](crate::Lexer).
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum LogosToken {
    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("%")]
    Percent,
    #[token("=")]
    Equal,

    // Delimiters
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    // Decimal literals with optional fraction and exponent:
    // 3, 3., 3.25, .5, 1e10, 2.5E-3
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?|\.[0-9]+([eE][+-]?[0-9]+)?", |lex| {
        lex.slice().parse::<f64>().ok()
    })]
    Number(f64),

    // First character: any Unicode letter
    // Following characters: letters, digits, or underscore
    #[regex(r"\p{L}[\p{L}0-9_]*")]
    Identifier,

    // Whitespace (skipped)
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    Whitespace,
}
