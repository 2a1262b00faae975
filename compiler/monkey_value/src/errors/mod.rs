//! Evaluation error values.
//!
//! The tree-walking evaluator reports failures as `Value::Error` rather than
//! through a host-level `Result`. This module defines the payload of that
//! variant and the constructors every call site goes through, so message
//! wording lives in exactly one place.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` carries typed data for each failure. Constructor
//! functions (e.g. `division_by_zero()`) populate both `kind` and `message`;
//! the `Display` impl of the kind produces the message.

use std::fmt;

use monkey_ir::{InfixOp, PrefixOp};

use crate::Value;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Infix operands of different runtime types: `true + 1`.
    TypeMismatch {
        left: &'static str,
        op: InfixOp,
        right: &'static str,
    },
    /// Prefix operator not defined for the operand type: `-true`.
    UnknownPrefixOperator { op: PrefixOp, operand: &'static str },
    /// Infix operator not defined for equal-typed operands: `true + false`.
    UnknownInfixOperator {
        left: &'static str,
        op: InfixOp,
        right: &'static str,
    },
    /// Identifier with no binding in scope.
    IdentifierNotFound { name: String },
    /// Integer division with a zero divisor.
    DivisionByZero,
    /// Integer result outside the 64-bit range.
    IntegerOverflow { operation: &'static str },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { left, op, right } => {
                write!(f, "type mismatch: {left} {} {right}", op.as_symbol())
            }
            Self::UnknownPrefixOperator { op, operand } => {
                write!(f, "unknown operator: {}{operand}", op.as_symbol())
            }
            Self::UnknownInfixOperator { left, op, right } => {
                write!(f, "unknown operator: {left} {} {right}", op.as_symbol())
            }
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
        }
    }
}

/// Payload of `Value::Error`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message, equal to `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    /// Build an error from its kind, rendering the message once.
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        tracing::trace!(%message, "evaluation error");
        EvalError { kind, message }
    }

    /// Wrap this error as a runtime value.
    #[inline]
    pub fn into_value(self) -> Value {
        Value::error(self)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Operator errors

/// Infix operands of different types.
#[cold]
pub fn type_mismatch(left: &Value, op: InfixOp, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        left: left.type_name(),
        op,
        right: right.type_name(),
    })
}

/// Prefix operator applied to an unsupported operand.
#[cold]
pub fn unknown_prefix_operator(op: PrefixOp, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownPrefixOperator {
        op,
        operand: operand.type_name(),
    })
}

/// Infix operator applied to equal-typed operands that do not support it.
#[cold]
pub fn unknown_infix_operator(left: &Value, op: InfixOp, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownInfixOperator {
        left: left.type_name(),
        op,
        right: right.type_name(),
    })
}

// Arithmetic errors

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Integer overflow error.
#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

// Binding errors

/// Lookup of an unbound identifier.
#[cold]
pub fn identifier_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IdentifierNotFound {
        name: name.to_string(),
    })
}
