//! Tests for infix operator implementations.

use crate::operators::evaluate_infix;
use monkey_ir::InfixOp;
use monkey_value::{EvalErrorKind, Value};
use pretty_assertions::assert_eq;

fn error_message(value: &Value) -> Option<&str> {
    value.as_error().map(|e| e.message.as_str())
}

#[test]
fn test_int_arithmetic() {
    let cases = [
        (2, InfixOp::Add, 3, 5),
        (5, InfixOp::Sub, 3, 2),
        (2, InfixOp::Mul, 3, 6),
        (7, InfixOp::Div, 2, 3),
        (-7, InfixOp::Div, 2, -3),
        (7, InfixOp::Div, -2, -3),
        (-50, InfixOp::Add, 100, 50),
    ];
    for (a, op, b, expected) in cases {
        assert_eq!(
            evaluate_infix(&Value::int(a), op, &Value::int(b)),
            Value::int(expected),
            "{a} {} {b}",
            op.as_symbol()
        );
    }
}

#[test]
fn test_int_comparisons() {
    let cases = [
        (1, InfixOp::Lt, 2, true),
        (1, InfixOp::Gt, 2, false),
        (1, InfixOp::Lt, 1, false),
        (1, InfixOp::Gt, 1, false),
        (1, InfixOp::Eq, 1, true),
        (1, InfixOp::NotEq, 1, false),
        (1, InfixOp::Eq, 2, false),
        (1, InfixOp::NotEq, 2, true),
    ];
    for (a, op, b, expected) in cases {
        assert_eq!(
            evaluate_infix(&Value::int(a), op, &Value::int(b)),
            Value::from_bool(expected),
            "{a} {} {b}",
            op.as_symbol()
        );
    }
}

#[test]
fn test_boolean_equality() {
    assert_eq!(
        evaluate_infix(&Value::TRUE, InfixOp::Eq, &Value::TRUE),
        Value::TRUE
    );
    assert_eq!(
        evaluate_infix(&Value::FALSE, InfixOp::Eq, &Value::FALSE),
        Value::TRUE
    );
    assert_eq!(
        evaluate_infix(&Value::TRUE, InfixOp::Eq, &Value::FALSE),
        Value::FALSE
    );
    assert_eq!(
        evaluate_infix(&Value::TRUE, InfixOp::NotEq, &Value::FALSE),
        Value::TRUE
    );
}

#[test]
fn test_null_equality() {
    assert_eq!(
        evaluate_infix(&Value::NULL, InfixOp::Eq, &Value::NULL),
        Value::TRUE
    );
    assert_eq!(
        evaluate_infix(&Value::NULL, InfixOp::NotEq, &Value::NULL),
        Value::FALSE
    );
}

#[test]
fn test_division_by_zero() {
    let result = evaluate_infix(&Value::int(1), InfixOp::Div, &Value::int(0));
    assert_eq!(
        result.as_error().map(|e| &e.kind),
        Some(&EvalErrorKind::DivisionByZero)
    );
}

#[test]
fn test_overflow_is_an_error_value() {
    let cases = [
        (i64::MAX, InfixOp::Add, 1, "integer overflow in addition"),
        (i64::MIN, InfixOp::Sub, 1, "integer overflow in subtraction"),
        (i64::MAX, InfixOp::Mul, 2, "integer overflow in multiplication"),
        (i64::MIN, InfixOp::Div, -1, "integer overflow in division"),
    ];
    for (a, op, b, message) in cases {
        let result = evaluate_infix(&Value::int(a), op, &Value::int(b));
        assert_eq!(error_message(&result), Some(message));
    }
}

#[test]
fn test_type_mismatch() {
    let result = evaluate_infix(&Value::TRUE, InfixOp::Add, &Value::int(1));
    assert_eq!(
        error_message(&result),
        Some("type mismatch: BOOLEAN + INTEGER")
    );

    let result = evaluate_infix(&Value::int(5), InfixOp::Eq, &Value::TRUE);
    assert_eq!(
        error_message(&result),
        Some("type mismatch: INTEGER == BOOLEAN")
    );
}

#[test]
fn test_unknown_operator_on_booleans() {
    for op in [InfixOp::Add, InfixOp::Sub, InfixOp::Mul, InfixOp::Div, InfixOp::Lt, InfixOp::Gt] {
        let result = evaluate_infix(&Value::TRUE, op, &Value::FALSE);
        assert_eq!(
            error_message(&result),
            Some(format!("unknown operator: BOOLEAN {} BOOLEAN", op.as_symbol()).as_str())
        );
    }
}

#[test]
fn test_unknown_operator_on_nulls() {
    let result = evaluate_infix(&Value::NULL, InfixOp::Add, &Value::NULL);
    assert_eq!(error_message(&result), Some("unknown operator: NULL + NULL"));
}
