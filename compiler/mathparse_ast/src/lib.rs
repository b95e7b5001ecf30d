//! Expression tree for mathparse.
//!
//! This crate defines the tree produced by the parser and walked by the
//! evaluator, the catalogue of named functions, and (with the default
//! `serde` feature) JSON helpers for storing trees.

pub mod ast;
pub mod conversions;
pub mod functions;

// Re-export commonly used types
pub use ast::{BinaryOperator, Expr, UnaryOp};
pub use functions::MathFunction;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An error raised while converting a tree to or from JSON.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum AstError {
    #[error("invalid tree JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A result type for AST operations.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, AstError>;

/// Serializes a tree to a JSON string.
///
/// # Example
///
/// ```
/// use mathparse_ast::{to_json, BinaryOperator, Expr};
///
/// let expr = Expr::binary(BinaryOperator::Add, Expr::Constant(1.0), Expr::Variable);
/// let json = to_json(&expr).unwrap();
/// assert!(json.contains("Add"));
/// assert!(json.contains("Variable"));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes a tree from a JSON string.
///
/// # Example
///
/// ```
/// use mathparse_ast::{from_json, Expr};
///
/// let expr: Expr = from_json(r#"{"Constant":42.0}"#).unwrap();
/// assert_eq!(expr, Expr::Constant(42.0));
/// ```
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() -> Result<()> {
        let expr = Expr::binary(
            BinaryOperator::Mul,
            Expr::call(MathFunction::Sqrt, Expr::Variable),
            Expr::negate(Expr::Constant(2.5)),
        );

        let json = to_json(&expr)?;
        let deserialized: Expr = from_json(&json)?;
        assert_eq!(expr, deserialized);
        Ok(())
    }

    #[test]
    fn test_function_names_in_json() -> Result<()> {
        let json = to_json(&Expr::call(MathFunction::Gamma, Expr::Variable))?;
        assert!(json.contains("\"GAMMA\""), "unexpected JSON: {json}");
        Ok(())
    }

    #[test]
    fn test_malformed_json() {
        let err = from_json::<Expr>(r#"{"Unary":{"op":"Negate"}}"#).unwrap_err();
        assert!(matches!(err, AstError::Json(_)));
    }
}
