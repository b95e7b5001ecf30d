use std::f64::consts::{FRAC_PI_2, PI};

use mathparse_ast::MathFunction;
use statrs::function::{erf, gamma};

/// Apply `function` to `x`.
pub fn apply(function: MathFunction, x: f64) -> f64 {
    match function {
        MathFunction::Sin => x.sin(),
        MathFunction::Cos => x.cos(),
        MathFunction::Tan => x.tan(),
        MathFunction::Cot => -(x + FRAC_PI_2).tan(),
        MathFunction::Asin => x.asin(),
        MathFunction::Acos => x.acos(),
        MathFunction::Atan => x.atan(),
        MathFunction::Acot => -x.atan() + FRAC_PI_2,
        MathFunction::Sinh => x.sinh(),
        MathFunction::Cosh => x.cosh(),
        MathFunction::Tanh => x.tanh(),
        MathFunction::Coth => 1.0 / x.tanh(),
        MathFunction::Asinh => x.asinh(),
        MathFunction::Acosh => x.acosh(),
        MathFunction::Atanh => x.atanh(),
        MathFunction::Acoth => (1.0 / x).atanh(),
        MathFunction::Pdf => (-(x * x) / 2.0).exp() / (2.0 * PI).sqrt(),
        MathFunction::Erf => erf::erf(x),
        MathFunction::Erfc => erf::erfc(x),
        MathFunction::Gamma => gamma_ieee(x),
        MathFunction::Ln => x.ln(),
        MathFunction::Log => x.log10(),
        MathFunction::Exp => x.exp(),
        MathFunction::Sqrt => x.sqrt(),
        MathFunction::Cbrt => x.cbrt(),
        // f64::round rounds half away from zero
        MathFunction::Round => x.round(),
        MathFunction::Floor => x.floor(),
        MathFunction::Ceil => x.ceil(),
    }
}

/// `gamma` with the poles mapped to IEEE values: ±inf at ±0, NaN at the
/// negative integers and at -inf.
fn gamma_ieee(x: f64) -> f64 {
    if x == 0.0 {
        return f64::INFINITY.copysign(x);
    }
    if x < 0.0 && x == x.trunc() {
        return f64::NAN;
    }
    gamma::gamma(x)
}
