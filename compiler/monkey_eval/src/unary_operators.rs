//! Prefix operator implementations for the evaluator.

use monkey_ir::PrefixOp;
use monkey_value::errors::{integer_overflow, unknown_prefix_operator};
use monkey_value::Value;

/// Evaluate a prefix operation on a settled operand.
pub fn evaluate_prefix(op: PrefixOp, operand: &Value) -> Value {
    match (op, operand) {
        // Logical not goes through truthiness, so `!0` is false
        (PrefixOp::Not, value) => Value::from_bool(!value.is_truthy()),

        (PrefixOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map_or_else(|| integer_overflow("negation").into_value(), Value::Int),
        (PrefixOp::Neg, _) => unknown_prefix_operator(op, operand).into_value(),
    }
}
