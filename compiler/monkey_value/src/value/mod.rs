//! Runtime values for the Monkey engines.
//!
//! # Heap Enforcement
//!
//! Variants with a payload behind a pointer (`Error`, `Return`) hold a
//! [`Heap<T>`], whose constructor is crate-private. External code builds
//! them through `Value::error` and `Value::return_value`.
//!
//! # Canonical Constants
//!
//! `Value::TRUE`, `Value::FALSE` and `Value::NULL` are the only boolean and
//! null values the engines produce; `Value::from_bool` maps a host `bool`
//! onto one of them. A boolean carries nothing beyond its payload, so two
//! booleans compare equal exactly when they are the same constant.

mod heap;
mod scalar_int;

use std::fmt;

pub use heap::Heap;
pub use scalar_int::ScalarInt;

use crate::EvalError;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    /// Integer value (uses `ScalarInt` to prevent unchecked arithmetic).
    Int(ScalarInt),
    /// Boolean value. Only ever `Value::TRUE` or `Value::FALSE`.
    Bool(bool),
    /// The null value.
    Null,
    /// Evaluation error carried as a first-class value.
    Error(Heap<EvalError>),
    /// Result of a `return` statement, unwound to the program boundary.
    Return(Heap<Value>),
}

impl Value {
    /// The `true` constant.
    pub const TRUE: Value = Value::Bool(true);

    /// The `false` constant.
    pub const FALSE: Value = Value::Bool(false);

    /// The null constant.
    pub const NULL: Value = Value::Null;

    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(ScalarInt::new(n))
    }

    /// Map a host boolean onto the canonical constants.
    #[inline]
    pub const fn from_bool(b: bool) -> Self {
        if b {
            Value::TRUE
        } else {
            Value::FALSE
        }
    }

    /// Create an error value.
    #[inline]
    pub fn error(err: EvalError) -> Self {
        Value::Error(Heap::new(err))
    }

    /// Wrap a value as the result of a `return` statement.
    #[inline]
    pub fn return_value(inner: Value) -> Self {
        Value::Return(Heap::new(inner))
    }

    /// Truthiness: only `null` and `false` are falsy; every integer,
    /// including zero, is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Bool(false))
    }

    /// Check if this is an error value.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Check if this is a return signal.
    #[inline]
    pub fn is_return(&self) -> bool {
        matches!(self, Value::Return(_))
    }

    /// Check if this value must be propagated rather than operated on
    /// (an error or a return signal).
    #[inline]
    pub fn is_abrupt(&self) -> bool {
        matches!(self, Value::Error(_) | Value::Return(_))
    }

    /// Try to extract an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(n.raw()),
            _ => None,
        }
    }

    /// Try to extract a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to borrow the error payload.
    pub fn as_error(&self) -> Option<&EvalError> {
        match self {
            Value::Error(err) => Some(&**err),
            _ => None,
        }
    }

    /// Strip one `Return` wrapper; other values pass through.
    pub fn unwrap_return(self) -> Value {
        match self {
            Value::Return(inner) => (*inner).clone(),
            other => other,
        }
    }

    /// Type discriminator used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "INTEGER",
            Value::Bool(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::Error(_) => "ERROR",
            Value::Return(_) => "RETURN_VALUE",
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::from_bool(b)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Return(a), Value::Return(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Null => write!(f, "Null"),
            Value::Error(err) => write!(f, "Error({:?})", err.message),
            Value::Return(inner) => write!(f, "Return({:?})", &**inner),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => write!(f, "null"),
            Value::Error(err) => write!(f, "ERROR: {}", err.message),
            Value::Return(inner) => write!(f, "{}", &**inner),
        }
    }
}
