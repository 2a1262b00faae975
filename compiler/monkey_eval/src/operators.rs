//! Infix operator implementations for the evaluator.
//!
//! Provides direct enum-based dispatch for infix operations. The type set
//! is closed, so pattern matching is preferred over trait objects.
//!
//! Callers must hand in settled operands: error and return values are
//! propagated before an operator ever sees them.

use monkey_ir::InfixOp;
use monkey_value::errors::{
    division_by_zero, integer_overflow, type_mismatch, unknown_infix_operator,
};
use monkey_value::{ScalarInt, Value};

/// Checked arithmetic result with overflow reported as an error value.
#[inline]
fn checked_arith(result: Option<ScalarInt>, op_name: &'static str) -> Value {
    result.map_or_else(|| integer_overflow(op_name).into_value(), Value::Int)
}

/// Evaluate an infix operation.
///
/// Operands of different types are a type mismatch. Two integers use integer
/// arithmetic and comparison. Any other equal-typed pair only supports
/// `==` and `!=`.
pub fn evaluate_infix(left: &Value, op: InfixOp, right: &Value) -> Value {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_infix(*a, op, *b),
        _ if left.type_name() != right.type_name() => {
            type_mismatch(left, op, right).into_value()
        }
        _ => match op {
            InfixOp::Eq => Value::from_bool(left == right),
            InfixOp::NotEq => Value::from_bool(left != right),
            _ => unknown_infix_operator(left, op, right).into_value(),
        },
    }
}

/// Infix operations on integers.
///
/// Division truncates toward zero. A zero divisor or a result outside the
/// 64-bit range becomes an error value.
fn eval_int_infix(a: ScalarInt, op: InfixOp, b: ScalarInt) -> Value {
    match op {
        InfixOp::Add => checked_arith(a.checked_add(b), "addition"),
        InfixOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        InfixOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        InfixOp::Div if b.is_zero() => division_by_zero().into_value(),
        InfixOp::Div => checked_arith(a.checked_div(b), "division"),
        InfixOp::Lt => Value::from_bool(a < b),
        InfixOp::Gt => Value::from_bool(a > b),
        InfixOp::Eq => Value::from_bool(a == b),
        InfixOp::NotEq => Value::from_bool(a != b),
    }
}
