use thiserror::Error;

/// Failure to encode or decode an instruction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BytecodeError {
    #[error("opcode {0} undefined")]
    UnknownOpcode(u8),

    #[error("operand len {got} does not match defined {expected} for {op}")]
    OperandCountMismatch {
        op: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("operand {operand} does not fit in {width} bytes for {op}")]
    OperandTooWide {
        op: &'static str,
        operand: usize,
        width: usize,
    },

    /// Operand slice handed to `read_operands` is shorter than the
    /// definition's operand widths.
    #[error("{op} needs {needed} operand bytes, found {available}")]
    MissingOperandBytes {
        op: &'static str,
        needed: usize,
        available: usize,
    },

    /// Instruction starting at `offset` runs past the end of the stream.
    #[error("instruction truncated at offset {offset}")]
    Truncated { offset: usize },
}
