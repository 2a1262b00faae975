#![deny(clippy::arithmetic_side_effects)]
//! Monkey Value - runtime values shared by both execution engines.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `ScalarInt`, `Heap`)
//! - Evaluation error values (`EvalError`, `EvalErrorKind`) and the
//!   constructors that build them
//!
//! # Value Types
//!
//! `Value` is a closed sum type. Errors and return signals are ordinary
//! variants, so the tree-walking evaluator passes them through its normal
//! result channel instead of unwinding.

pub mod errors;
mod value;

pub use errors::{EvalError, EvalErrorKind};
pub use value::{Heap, ScalarInt, Value};
