use super::*;

#[test]
fn test_invalid_characters() {
    let test_cases = [("#", "#", 0), ("2 $ 3", "$", 2), ("1 + .", ".", 4), ("x & y", "&", 2)];

    for (input, lexeme, offset) in test_cases {
        match tokenize(input) {
            Err(LexError::InvalidToken {
                lexeme: found,
                location,
            }) => {
                assert_eq!(found, lexeme, "Mismatch for input: {input}");
                assert_eq!(location.offset, offset, "Mismatch for input: {input}");
            }
            other => panic!("Expected InvalidToken for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_valid_prefix_is_yielded_before_error() {
    let mut lexer = Lexer::new("1 + #");
    assert_eq!(lexer.next_token().unwrap().unwrap().kind, TokenKind::Number(1.0));
    assert_eq!(lexer.next_token().unwrap().unwrap().kind, TokenKind::Plus);
    let err = lexer.next_token().unwrap().unwrap_err();
    assert_eq!(err.location().column, 5);
}

#[test]
fn test_end_of_input_is_none() {
    let mut lexer = Lexer::new("7");
    assert!(lexer.next_token().is_some());
    assert!(lexer.next_token().is_none());
    assert!(lexer.next_token().is_none());
}
