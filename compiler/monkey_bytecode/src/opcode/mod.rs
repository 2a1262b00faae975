//! Opcodes and their operand layouts.

use std::fmt;

use crate::BytecodeError;

/// One-byte operation code.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpCode {
    /// Push `constants[operand]`.
    Constant = 0x00,
    /// Pop two integers, push their sum.
    Add = 0x01,
}

impl OpCode {
    /// Decode a raw byte. Bytes with no opcode yield `None`.
    #[inline]
    pub const fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(OpCode::Constant),
            0x01 => Some(OpCode::Add),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn definition(self) -> &'static Definition {
        match self {
            OpCode::Constant => &CONSTANT,
            OpCode::Add => &ADD,
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.definition().name)
    }
}

/// Human-readable name and operand byte widths of an opcode.
#[derive(Debug, PartialEq, Eq)]
pub struct Definition {
    pub name: &'static str,
    pub operand_widths: &'static [usize],
}

impl Definition {
    /// Encoded size of one instruction, opcode byte included.
    pub fn instruction_len(&self) -> usize {
        self.operand_widths.iter().fold(1, |len, width| len + width)
    }
}

static CONSTANT: Definition = Definition {
    name: "OpConstant",
    operand_widths: &[2],
};

static ADD: Definition = Definition {
    name: "OpAdd",
    operand_widths: &[],
};

/// Find the definition for a raw opcode byte.
pub fn lookup(byte: u8) -> Result<&'static Definition, BytecodeError> {
    OpCode::from_u8(byte)
        .map(OpCode::definition)
        .ok_or(BytecodeError::UnknownOpcode(byte))
}
