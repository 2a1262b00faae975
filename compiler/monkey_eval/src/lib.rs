#![deny(clippy::arithmetic_side_effects)]
//! Monkey Eval - tree-walking evaluator.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: name bindings on a scope stack
//! - `Interpreter`: recursive node dispatch over an `ExprArena`
//! - `evaluate_infix`: direct enum-based infix operator dispatch
//! - `evaluate_prefix`: direct enum-based prefix operator dispatch
//! - `Value` types from `monkey_value`

mod environment;
mod interpreter;
mod operators;
mod stack;
mod unary_operators;

#[cfg(test)]
mod tests;

pub use monkey_value::{EvalError, EvalErrorKind, Value};

pub use environment::{Environment, LocalScope, Scope};
pub use interpreter::Interpreter;
pub use operators::evaluate_infix;
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_prefix;
