use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_lexer_basic() {
    let input = "2 + 3 * 4";
    let tokens = tokenize(input).unwrap();

    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0].kind, TokenKind::Number(2.0));
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[2].kind, TokenKind::Number(3.0));
    assert_eq!(tokens[3].kind, TokenKind::Star);
    assert_eq!(tokens[4].kind, TokenKind::Number(4.0));
}

#[test]
fn test_lexer_delimiters() {
    assert_eq!(
        kinds("+-*/^()=%"),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Caret,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::Equal,
            TokenKind::Percent,
        ]
    );
}

#[test]
fn test_numeric_literals() {
    let valid_cases = [
        ("42", 42.0),
        ("3.14159", 3.14159),
        ("3.", 3.0),
        (".5", 0.5),
        ("1e10", 1e10),
        ("2.5E-3", 2.5e-3),
        ("1.0e+2", 100.0),
    ];

    for (input, expected) in valid_cases {
        assert_eq!(
            kinds(input),
            vec![TokenKind::Number(expected)],
            "Mismatch for input: {input}"
        );
    }
}

#[test]
fn test_number_runs_split_on_second_point() {
    assert_eq!(
        kinds("1.2.3"),
        vec![TokenKind::Number(1.2), TokenKind::Number(0.3)]
    );
}

#[test]
fn test_whitespace_is_dropped() {
    assert_eq!(tokenize("").unwrap(), vec![]);
    assert_eq!(tokenize(" \t\r\n ").unwrap(), vec![]);
    assert_eq!(
        kinds("\t1\n+\r\n2 "),
        vec![TokenKind::Number(1.0), TokenKind::Plus, TokenKind::Number(2.0)]
    );
}

#[test]
fn test_locations() {
    let tokens = tokenize("1 +\n  sin(x)").unwrap();
    let locations: Vec<(usize, usize, usize)> = tokens
        .iter()
        .map(|t| (t.location.line, t.location.column, t.location.offset))
        .collect();

    assert_eq!(
        locations,
        vec![(1, 1, 0), (1, 3, 2), (2, 3, 6), (2, 6, 9), (2, 7, 10), (2, 8, 11)]
    );
}

#[test]
fn test_lexemes_keep_source_case() {
    let tokens = tokenize("Sin(x)").unwrap();
    assert_eq!(tokens[0].lexeme, "Sin");
    assert_eq!(tokens[0].kind, TokenKind::Function("SIN".to_string()));
    assert_eq!(tokens[2].lexeme, "x");
}
