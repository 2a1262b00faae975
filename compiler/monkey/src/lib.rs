//! Monkey execution core.
//!
//! Two engines share one value model:
//!
//! - [`Interpreter`] walks an [`ExprArena`] directly, reporting failures as
//!   [`Value::Error`] through its normal result channel.
//! - [`Vm`] executes compiled [`Bytecode`] on a bounded operand stack,
//!   reporting faults as [`VmError`].
//!
//! The member crates are re-exported whole under [`ir`], [`value`], [`eval`],
//! [`bytecode`] and [`vm`] for callers that need more than the common types
//! below.

use std::sync::Once;

pub use monkey_bytecode as bytecode;
pub use monkey_eval as eval;
pub use monkey_ir as ir;
pub use monkey_value as value;
pub use monkey_vm as vm;

pub use monkey_bytecode::{make, Bytecode, Instructions, OpCode};
pub use monkey_eval::{Environment, Interpreter};
pub use monkey_ir::{ExprArena, Name, Program, StringInterner};
pub use monkey_value::{EvalError, EvalErrorKind, Value};
pub use monkey_vm::{Vm, VmError, VmResult, DEFAULT_STACK_SIZE};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Set `RUST_LOG=monkey_eval=debug` or `RUST_LOG=monkey_vm=debug` to see
/// evaluator and VM traces. Calling this more than once is harmless.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
            tracing::debug!("tracing initialized");
        }
    });
}
