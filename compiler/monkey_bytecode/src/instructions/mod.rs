//! Instruction streams: encoding, operand decoding, and disassembly.

use std::fmt;

use crate::{lookup, BytecodeError, Definition, OpCode};

/// A flat, encoded instruction stream.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Instructions(Vec<u8>);

impl Instructions {
    pub fn new() -> Self {
        Instructions(Vec::new())
    }

    /// Join several streams end to end.
    pub fn concat(parts: impl IntoIterator<Item = Instructions>) -> Self {
        let mut out = Instructions::new();
        for part in parts {
            out.append(&part);
        }
        out
    }

    /// Append another stream, returning the offset it now starts at.
    pub fn append(&mut self, other: &Instructions) -> usize {
        let offset = self.0.len();
        self.0.extend_from_slice(&other.0);
        offset
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Write one decoded instruction, or an `ERROR:` line when it cannot be
    /// decoded. Returns the number of bytes to advance by.
    fn fmt_instruction_at(&self, f: &mut fmt::Formatter<'_>, offset: usize) -> Result<usize, fmt::Error> {
        let Some(rest) = self.0.get(offset..) else {
            return Ok(1);
        };
        let Some(&byte) = rest.first() else {
            return Ok(1);
        };
        let def = match lookup(byte) {
            Ok(def) => def,
            Err(err) => {
                writeln!(f, "{offset:04} ERROR: {err}")?;
                return Ok(1);
            }
        };
        match read_operands(def, rest.get(1..).unwrap_or_default()) {
            Ok((operands, read)) => {
                write!(f, "{offset:04} {}", def.name)?;
                for operand in &operands {
                    write!(f, " {operand}")?;
                }
                writeln!(f)?;
                Ok(read + 1)
            }
            Err(_) => {
                // Report against the instruction, not the operand slice.
                let err = BytecodeError::Truncated { offset };
                writeln!(f, "{offset:04} ERROR: {err}")?;
                Ok(rest.len())
            }
        }
    }
}

impl From<Vec<u8>> for Instructions {
    fn from(bytes: Vec<u8>) -> Self {
        Instructions(bytes)
    }
}

impl FromIterator<Instructions> for Instructions {
    fn from_iter<I: IntoIterator<Item = Instructions>>(iter: I) -> Self {
        Instructions::concat(iter)
    }
}

/// Disassembly, one instruction per line: `0000 OpConstant 1`.
impl fmt::Display for Instructions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut offset = 0;
        while offset < self.0.len() {
            offset += self.fmt_instruction_at(f, offset)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Instructions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Instructions").field(&self.0).finish()
    }
}

/// Encode one instruction.
///
/// Operands beyond the definition's count are ignored and missing ones are
/// encoded as zero; operands wider than their slot keep their low bytes.
/// Use [`try_make`] when operands are not known to be well-formed.
pub fn make(op: OpCode, operands: &[usize]) -> Instructions {
    let def = op.definition();
    let mut bytes = Vec::with_capacity(def.instruction_len());
    bytes.push(op.as_u8());
    for (i, &width) in def.operand_widths.iter().enumerate() {
        write_operand(&mut bytes, width, operands.get(i).copied().unwrap_or(0));
    }
    Instructions(bytes)
}

/// Encode one instruction, rejecting a wrong operand count or an operand
/// that does not fit its slot.
pub fn try_make(op: OpCode, operands: &[usize]) -> Result<Instructions, BytecodeError> {
    let def = op.definition();
    if def.operand_widths.len() != operands.len() {
        return Err(BytecodeError::OperandCountMismatch {
            op: def.name,
            expected: def.operand_widths.len(),
            got: operands.len(),
        });
    }
    for (&width, &operand) in def.operand_widths.iter().zip(operands) {
        if !fits(operand, width) {
            return Err(BytecodeError::OperandTooWide {
                op: def.name,
                operand,
                width,
            });
        }
    }
    Ok(make(op, operands))
}

/// Decode the operands following an opcode byte.
///
/// `bytes` starts just after the opcode. Returns the operands and the number
/// of bytes they occupied.
pub fn read_operands(def: &Definition, bytes: &[u8]) -> Result<(Vec<usize>, usize), BytecodeError> {
    let needed = def.instruction_len() - 1;
    if bytes.len() < needed {
        return Err(BytecodeError::MissingOperandBytes {
            op: def.name,
            needed,
            available: bytes.len(),
        });
    }
    let mut operands = Vec::with_capacity(def.operand_widths.len());
    let mut rest = bytes;
    for &width in def.operand_widths {
        let (slot, tail) = rest.split_at(width);
        operands.push(read_be(slot));
        rest = tail;
    }
    Ok((operands, needed))
}

/// Read a big-endian `u16` from the front of `bytes`.
#[inline]
pub fn read_u16(bytes: &[u8]) -> Option<u16> {
    let pair: [u8; 2] = bytes.get(..2)?.try_into().ok()?;
    Some(u16::from_be_bytes(pair))
}

fn read_be(slot: &[u8]) -> usize {
    slot.iter().fold(0, |acc, &b| (acc << 8) | usize::from(b))
}

fn write_operand(bytes: &mut Vec<u8>, width: usize, operand: usize) {
    let be = (operand as u64).to_be_bytes();
    bytes.extend_from_slice(&be[be.len() - width..]);
}

fn fits(operand: usize, width: usize) -> bool {
    width >= 8 || (operand as u64) >> (width * 8) == 0
}

#[cfg(test)]
mod tests;
