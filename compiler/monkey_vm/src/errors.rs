use thiserror::Error;

/// Execution fault raised by the VM.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VmError {
    #[error("stack overflow (capacity {capacity})")]
    StackOverflow { capacity: usize },

    #[error("stack underflow")]
    StackUnderflow,

    #[error("constant index {index} out of range (pool has {len})")]
    ConstantOutOfRange { index: usize, len: usize },

    #[error("unknown opcode {opcode:#04x} at offset {offset}")]
    UnknownOpcode { opcode: u8, offset: usize },

    #[error("truncated instruction at offset {offset}")]
    TruncatedInstruction { offset: usize },

    #[error("unsupported operand types for {op}: {left} and {right}")]
    UnsupportedOperands {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("integer overflow")]
    IntegerOverflow,
}

pub type VmResult<T> = Result<T, VmError>;
