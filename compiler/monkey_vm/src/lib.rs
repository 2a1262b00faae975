#![deny(clippy::arithmetic_side_effects)]
//! Monkey VM - executes [`Bytecode`] on a fixed-capacity operand stack.
//!
//! Faults are reported out of band as [`VmError`]; the operand stack only
//! ever holds [`Value`]s.

mod errors;
mod stack;
mod vm;

pub use monkey_bytecode::Bytecode;
pub use monkey_value::Value;

pub use errors::{VmError, VmResult};
pub use stack::Stack;
pub use vm::{Vm, DEFAULT_STACK_SIZE};
