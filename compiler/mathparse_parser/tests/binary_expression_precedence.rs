use mathparse_ast::{BinaryOperator, Expr, MathFunction};
use mathparse_parser::{parse, Parser};
use pretty_assertions::assert_eq;

fn tree(input: &str) -> Expr {
    parse(input).unwrap().unwrap()
}

#[test]
fn test_mixed_precedence_levels() {
    // 1 + ((2 * (3 ^ 2)) / 4) - 5
    let expected = Expr::binary(
        BinaryOperator::Sub,
        Expr::binary(
            BinaryOperator::Add,
            Expr::Constant(1.0),
            Expr::binary(
                BinaryOperator::Div,
                Expr::binary(
                    BinaryOperator::Mul,
                    Expr::Constant(2.0),
                    Expr::binary(BinaryOperator::Pow, Expr::Constant(3.0), Expr::Constant(2.0)),
                ),
                Expr::Constant(4.0),
            ),
        ),
        Expr::Constant(5.0),
    );
    assert_eq!(tree("1 + 2 * 3 ^ 2 / 4 - 5"), expected);
}

#[test]
fn test_nested_functions() {
    let expected = Expr::call(
        MathFunction::Ln,
        Expr::call(
            MathFunction::Exp,
            Expr::binary(BinaryOperator::Mul, Expr::Constant(2.0), Expr::Variable),
        ),
    );
    assert_eq!(tree("ln(exp(2*x))"), expected);
}

#[test]
fn test_negated_group() {
    assert_eq!(
        tree("-(x - 1)"),
        Expr::negate(Expr::binary(
            BinaryOperator::Sub,
            Expr::Variable,
            Expr::Constant(1.0)
        ))
    );
}

#[test]
fn test_display_output_reparses_to_same_tree() {
    let inputs = [
        "1 + 2 * 3 ^ 2 / 4 - 5",
        "-sin(x)^2 + cos(x)^2",
        "2^3^2",
        "sqrt(x*x + 1) / (x - .5)",
        "-(-x)",
    ];
    for input in inputs {
        let expr = tree(input);
        let printed = expr.to_string();
        assert_eq!(tree(&printed), expr, "{input} printed as {printed}");
    }
}

#[test]
fn test_negative_literals_print_as_negation() {
    let expr = tree("-2.5 * -x");
    assert_eq!(expr.to_string(), "((-2.5) * (-X))");
    assert_eq!(tree(&expr.to_string()), expr);

    // A hand-built negative constant has no literal spelling
    let built = Expr::negate(Expr::Constant(-2.5));
    assert_eq!(built.to_string(), "(--2.5)");
    assert!(parse(&built.to_string()).is_err());
}

#[test]
fn test_parsing_is_repeatable() {
    let parser = Parser::new();
    let first = parser.parse("cot(x) * 3 - acoth(2)").unwrap();
    let second = parser.parse("cot(x) * 3 - acoth(2)").unwrap();
    assert_eq!(first, second);
}
