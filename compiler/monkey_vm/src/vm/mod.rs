//! Fetch/decode/execute loop.

use monkey_bytecode::{read_u16, Bytecode, OpCode};
use monkey_value::Value;

use crate::{Stack, VmError, VmResult};

/// Operand stack capacity used by [`Vm::new`].
pub const DEFAULT_STACK_SIZE: usize = 2048;

/// Stack machine over one borrowed [`Bytecode`].
#[derive(Debug)]
pub struct Vm<'a> {
    bytecode: &'a Bytecode,
    stack: Stack,
}

impl<'a> Vm<'a> {
    pub fn new(bytecode: &'a Bytecode) -> Self {
        Self::with_stack_capacity(bytecode, DEFAULT_STACK_SIZE)
    }

    pub fn with_stack_capacity(bytecode: &'a Bytecode, capacity: usize) -> Self {
        Vm {
            bytecode,
            stack: Stack::new(capacity),
        }
    }

    /// Execute from the first instruction until the end of the stream.
    ///
    /// Stops at the first fault, leaving the stack as it was at that point.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(bytes = self.bytecode.instructions.len(), constants = self.bytecode.constants.len())
    )]
    pub fn run(&mut self) -> VmResult<()> {
        self.execute().inspect_err(|err| {
            tracing::debug!(error = %err, sp = self.stack.len(), "vm fault");
        })
    }

    fn execute(&mut self) -> VmResult<()> {
        let code = self.bytecode.instructions.as_bytes();
        let mut ip = 0usize;
        while let Some(&byte) = code.get(ip) {
            let op = OpCode::from_u8(byte).ok_or(VmError::UnknownOpcode {
                opcode: byte,
                offset: ip,
            })?;
            let operands = code.get(ip.saturating_add(1)..).unwrap_or_default();
            match op {
                OpCode::Constant => {
                    let index = read_u16(operands)
                        .ok_or(VmError::TruncatedInstruction { offset: ip })?;
                    self.push_constant(usize::from(index))?;
                }
                OpCode::Add => self.add()?,
            }
            ip = ip.saturating_add(op.definition().instruction_len());
        }
        Ok(())
    }

    fn push_constant(&mut self, index: usize) -> VmResult<()> {
        let constants = &self.bytecode.constants;
        let value = constants
            .get(index)
            .cloned()
            .ok_or(VmError::ConstantOutOfRange {
                index,
                len: constants.len(),
            })?;
        self.stack.push(value)
    }

    fn add(&mut self) -> VmResult<()> {
        let right = self.stack.pop()?;
        let left = self.stack.pop()?;
        let sum = match (&left, &right) {
            (Value::Int(a), Value::Int(b)) => a.checked_add(*b).ok_or(VmError::IntegerOverflow)?,
            _ => {
                return Err(VmError::UnsupportedOperands {
                    op: OpCode::Add.definition().name,
                    left: left.type_name(),
                    right: right.type_name(),
                })
            }
        };
        self.stack.push(Value::Int(sum))
    }

    /// Value on top of the stack, if any.
    pub fn stack_top(&self) -> Option<&Value> {
        self.stack.peek()
    }

    /// Stack pointer: the next free slot.
    pub fn sp(&self) -> usize {
        self.stack.len()
    }

    pub fn stack_capacity(&self) -> usize {
        self.stack.capacity()
    }
}
