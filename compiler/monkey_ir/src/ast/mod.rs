//! AST node definitions.
//!
//! Every child reference is an arena index (`ExprId`, `StmtId`, `StmtRange`),
//! resolved through the [`ExprArena`](crate::ExprArena) that allocated it.

mod operators;

pub use operators::{InfixOp, PrefixOp};

use crate::{ExprId, Name, StmtId, StmtRange};

/// Expression node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal: `42`
    Int(i64),
    /// Boolean literal: `true`, `false`
    Bool(bool),
    /// Identifier reference: `x`
    Ident(Name),
    /// Prefix expression: `!x`, `-x`
    Prefix { op: PrefixOp, operand: ExprId },
    /// Infix expression: `a + b`, `a < b`
    Infix {
        op: InfixOp,
        left: ExprId,
        right: ExprId,
    },
    /// Conditional: `if (cond) { ... } else { ... }`
    If {
        condition: ExprId,
        consequence: StmtRange,
        alternative: Option<StmtRange>,
    },
}

/// Statement node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    /// Expression in statement position: `x + 1;`
    Expression(ExprId),
    /// Binding: `let x = 5;`
    Let { name: Name, value: ExprId },
    /// Early exit: `return x;`
    Return(ExprId),
    /// Braced statement list: `{ ... }`
    Block(StmtRange),
}

/// Root of a parsed source unit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: StmtRange,
}

/// Any evaluable node: the root, a statement, or an expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Program(Program),
    Stmt(StmtId),
    Expr(ExprId),
}

impl From<Program> for Node {
    fn from(program: Program) -> Self {
        Node::Program(program)
    }
}

impl From<StmtId> for Node {
    fn from(id: StmtId) -> Self {
        Node::Stmt(id)
    }
}

impl From<ExprId> for Node {
    fn from(id: ExprId) -> Self {
        Node::Expr(id)
    }
}
