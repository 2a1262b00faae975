//! Monkey Bytecode - instruction encoding shared by the compiler and the VM.
//!
//! An instruction is one opcode byte followed by its operands, each written
//! big-endian with the width its [`Definition`] declares.
//!
//! | Opcode | Byte | Operands |
//! |--------|------|----------|
//! | `OpConstant` | `0x00` | constant pool index (2 bytes) |
//! | `OpAdd` | `0x01` | none |

mod errors;
mod instructions;
mod opcode;

use monkey_value::Value;

pub use errors::BytecodeError;
pub use instructions::{make, read_operands, read_u16, try_make, Instructions};
pub use opcode::{lookup, Definition, OpCode};

/// Compiled program: an instruction stream plus the constant pool its
/// `OpConstant` operands index into.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bytecode {
    pub instructions: Instructions,
    pub constants: Vec<Value>,
}

impl Bytecode {
    pub fn new(instructions: Instructions, constants: Vec<Value>) -> Self {
        Bytecode {
            instructions,
            constants,
        }
    }
}
