//! The catalogue of named unary functions.
//!
//! Names are matched exactly against the upper-cased identifier produced by
//! the lexer. The lookup table is built once, on first use, and never
//! mutated afterwards.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named unary math function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum MathFunction {
    // Trigonometric
    Sin,
    Cos,
    Tan,
    Cot,
    // Inverse trigonometric
    Asin,
    Acos,
    Atan,
    Acot,
    // Hyperbolic
    Sinh,
    Cosh,
    Tanh,
    Coth,
    // Inverse hyperbolic
    Asinh,
    Acosh,
    Atanh,
    Acoth,
    // Statistical
    Pdf,
    Erf,
    Erfc,
    Gamma,
    // Logarithms and powers
    Ln,
    Log,
    Exp,
    Sqrt,
    Cbrt,
    // Rounding
    Round,
    Floor,
    Ceil,
}

/// Extra spellings accepted besides each function's canonical name.
const ALIASES: &[(&str, MathFunction)] = &[("LG", MathFunction::Log)];

lazy_static! {
    static ref FUNCTION_TABLE: HashMap<&'static str, MathFunction> = {
        let mut table: HashMap<&'static str, MathFunction> =
            MathFunction::ALL.iter().map(|f| (f.name(), *f)).collect();
        table.extend(ALIASES.iter().copied());
        table
    };
}

impl MathFunction {
    /// Every function, in catalogue order.
    pub const ALL: [MathFunction; 28] = [
        MathFunction::Sin,
        MathFunction::Cos,
        MathFunction::Tan,
        MathFunction::Cot,
        MathFunction::Asin,
        MathFunction::Acos,
        MathFunction::Atan,
        MathFunction::Acot,
        MathFunction::Sinh,
        MathFunction::Cosh,
        MathFunction::Tanh,
        MathFunction::Coth,
        MathFunction::Asinh,
        MathFunction::Acosh,
        MathFunction::Atanh,
        MathFunction::Acoth,
        MathFunction::Pdf,
        MathFunction::Erf,
        MathFunction::Erfc,
        MathFunction::Gamma,
        MathFunction::Ln,
        MathFunction::Log,
        MathFunction::Exp,
        MathFunction::Sqrt,
        MathFunction::Cbrt,
        MathFunction::Round,
        MathFunction::Floor,
        MathFunction::Ceil,
    ];

    /// Look up a function by its upper-case name.
    ///
    /// `LG` is accepted as an alias of `LOG`.
    pub fn from_name(name: &str) -> Option<MathFunction> {
        FUNCTION_TABLE.get(name).copied()
    }

    /// The canonical upper-case name.
    pub fn name(self) -> &'static str {
        match self {
            MathFunction::Sin => "SIN",
            MathFunction::Cos => "COS",
            MathFunction::Tan => "TAN",
            MathFunction::Cot => "COT",
            MathFunction::Asin => "ASIN",
            MathFunction::Acos => "ACOS",
            MathFunction::Atan => "ATAN",
            MathFunction::Acot => "ACOT",
            MathFunction::Sinh => "SINH",
            MathFunction::Cosh => "COSH",
            MathFunction::Tanh => "TANH",
            MathFunction::Coth => "COTH",
            MathFunction::Asinh => "ASINH",
            MathFunction::Acosh => "ACOSH",
            MathFunction::Atanh => "ATANH",
            MathFunction::Acoth => "ACOTH",
            MathFunction::Pdf => "PDF",
            MathFunction::Erf => "ERF",
            MathFunction::Erfc => "ERFC",
            MathFunction::Gamma => "GAMMA",
            MathFunction::Ln => "LN",
            MathFunction::Log => "LOG",
            MathFunction::Exp => "EXP",
            MathFunction::Sqrt => "SQRT",
            MathFunction::Cbrt => "CBRT",
            MathFunction::Round => "ROUND",
            MathFunction::Floor => "FLOOR",
            MathFunction::Ceil => "CEIL",
        }
    }

    /// Every accepted spelling, aliases included, sorted.
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = FUNCTION_TABLE.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Display for MathFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
