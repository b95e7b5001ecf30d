//! Shared helpers for the workspace integration tests.

use mathparse::MathParser;

/// Initialize logging once per test binary.
pub fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

/// Parse and evaluate `expression` with the free variable at 0.
pub fn eval(expression: &str) -> f64 {
    init_test_logger();
    MathParser::new()
        .evaluate_str(expression)
        .unwrap_or_else(|e| panic!("failed to evaluate {expression:?}: {e}"))
}

/// Parse `expression` and evaluate it with the free variable at `x`.
pub fn eval_at(expression: &str, x: f64) -> f64 {
    init_test_logger();
    let mut parser = MathParser::new();
    parser
        .parse(expression)
        .unwrap_or_else(|e| panic!("failed to parse {expression:?}: {e}"));
    parser.evaluate(x)
}

/// Assert two results agree to a relative tolerance of 1e-9.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "got {actual}, expected {expected}"
    );
}
