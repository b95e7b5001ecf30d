use super::*;

mod basic;
mod errors;

/// Lex `input`, panicking on the first error.
fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .unwrap_or_else(|e| panic!("failed to lex {input:?}: {e}"))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}
