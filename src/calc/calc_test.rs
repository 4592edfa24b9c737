// ABOUTME: Tests for the arithmetic engine - precedence, number handling,
// ABOUTME: and the error cases surfaced to calculator users.

use super::*;

fn eval_str(expr: &str) -> String {
    evaluate(expr).unwrap().to_string()
}

#[test]
fn test_simple_addition() {
    assert_eq!(evaluate("2 + 2"), Ok(Number::Int(4)));
}

#[test]
fn test_precedence_and_parentheses() {
    assert_eq!(eval_str("2 + 3 * 4"), "14");
    assert_eq!(eval_str("(2 + 3) * 4"), "20");
    assert_eq!(eval_str("10 - 4 - 3"), "3");
    assert_eq!(eval_str("((1))"), "1");
}

#[test]
fn test_division_yields_float() {
    assert_eq!(eval_str("4 / 2"), "2.0");
    assert_eq!(eval_str("7 / 2"), "3.5");
    assert_eq!(eval_str("1 / 3"), "0.3333333333333333");
}

#[test]
fn test_floor_division() {
    assert_eq!(eval_str("7 // 2"), "3");
    assert_eq!(eval_str("-7 // 2"), "-4");
    assert_eq!(eval_str("7.5 // 2"), "3.0");
}

#[test]
fn test_power_binds_tighter_than_unary_minus() {
    assert_eq!(eval_str("-2 ** 2"), "-4");
    assert_eq!(eval_str("(-2) ** 2"), "4");
    assert_eq!(eval_str("2 ** 3 ** 2"), "512");
    assert_eq!(eval_str("2 ** -1"), "0.5");
}

#[test]
fn test_unary_signs() {
    assert_eq!(eval_str("-3 + +5"), "2");
    assert_eq!(eval_str("- - 1"), "1");
}

#[test]
fn test_mixed_int_float() {
    assert_eq!(eval_str("1.5 * 2"), "3.0");
    assert_eq!(eval_str("0.1 + 0.2"), "0.30000000000000004");
    assert_eq!(eval_str(".5 + 5."), "5.5");
}

#[test]
fn test_incomplete_expression() {
    assert_eq!(evaluate("2 +"), Err(CalcError::UnexpectedEnd));
    assert_eq!(evaluate("(1 + 2"), Err(CalcError::UnexpectedEnd));
}

#[test]
fn test_empty_expression() {
    assert_eq!(evaluate(""), Err(CalcError::Empty));
    assert_eq!(evaluate("   "), Err(CalcError::Empty));
}

#[test]
fn test_unexpected_tokens() {
    assert_eq!(
        evaluate("1, 2"),
        Err(CalcError::UnexpectedToken {
            token: ",".into(),
            pos: 1
        })
    );
    assert_eq!(
        evaluate("(1 + 2))"),
        Err(CalcError::UnexpectedToken {
            token: ")".into(),
            pos: 7
        })
    );
    assert!(matches!(
        evaluate("1.2.3"),
        Err(CalcError::UnexpectedToken { .. })
    ));
    assert!(matches!(
        evaluate("* 3"),
        Err(CalcError::UnexpectedToken { .. })
    ));
}

#[test]
fn test_syntax_errors_win_over_evaluation_errors() {
    assert_eq!(evaluate("1 / 0 +"), Err(CalcError::UnexpectedEnd));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(evaluate("1 / 0"), Err(CalcError::DivisionByZero));
    assert_eq!(evaluate("1 // 0"), Err(CalcError::DivisionByZero));
    assert_eq!(evaluate("1 / (2 - 2.0)"), Err(CalcError::DivisionByZero));
}

#[test]
fn test_overflow_is_reported() {
    assert_eq!(evaluate("9 ** 99"), Err(CalcError::Overflow));
    assert_eq!(
        evaluate("9223372036854775807 + 1"),
        Err(CalcError::Overflow)
    );
    assert_eq!(evaluate("10.0 ** 400"), Err(CalcError::NotFinite));
}

#[test]
fn test_nesting_limit_is_inclusive() {
    let parens = format!("{}1{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    assert_eq!(evaluate(&parens), Ok(Number::Int(1)));

    let signs = format!("{}1", "-".repeat(MAX_DEPTH));
    assert_eq!(evaluate(&signs), Ok(Number::Int(1)));

    let too_many_signs = format!("{}1", "-".repeat(MAX_DEPTH + 1));
    assert_eq!(
        evaluate(&too_many_signs),
        Err(CalcError::TooDeep(MAX_DEPTH))
    );
}

#[test]
fn test_fractional_power_of_negative_is_not_real() {
    assert_eq!(evaluate("(0 - 8) ** (1 / 3)"), Err(CalcError::NotReal));
    assert_eq!(
        evaluate("-8 ** 0.5"),
        Ok(Number::Float(-(8.0_f64.powf(0.5))))
    );
}

#[test]
fn test_nesting_is_bounded() {
    let deep = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
    assert_eq!(evaluate(&deep), Err(CalcError::TooDeep(MAX_DEPTH)));

    let ok = format!("{}1{}", "(".repeat(10), ")".repeat(10));
    assert_eq!(evaluate(&ok), Ok(Number::Int(1)));
}

#[test]
fn test_long_flat_expressions_are_fine() {
    let long = vec!["1"; 10_000].join(" + ");
    assert_eq!(evaluate(&long), Ok(Number::Int(10_000)));
}

#[test]
fn test_parse_produces_postfix() {
    let program = parse("1 + 2 * 3").unwrap();
    assert_eq!(
        program.ops(),
        &[
            Op::Push(Number::Int(1)),
            Op::Push(Number::Int(2)),
            Op::Push(Number::Int(3)),
            Op::Binary(BinOp::Mul),
            Op::Binary(BinOp::Add),
        ]
    );
}
