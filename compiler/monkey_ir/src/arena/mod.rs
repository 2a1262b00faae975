//! Flat storage for AST nodes.
//!
//! Nodes refer to each other by index rather than by `Box`, so a whole
//! program lives in three contiguous vectors and every child reference is a
//! 4-byte copyable handle.

use std::fmt;

use crate::ast::{Expr, InfixOp, PrefixOp, Program, Stmt};
use crate::Name;

/// Index into the expression table of an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Index into the statement table of an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct StmtId(u32);

impl StmtId {
    /// Create a new `StmtId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        StmtId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StmtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StmtId({})", self.0)
    }
}

/// Range of statements in the flattened statement-list table.
///
/// Used for block bodies and the top level of a program.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StmtRange {
    pub start: u32,
    pub len: u32,
}

impl StmtRange {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        StmtRange { start, len }
    }

    /// Check if the range is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the number of statements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

/// Arena owning every expression and statement of one program.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    stmt_lists: Vec<StmtId>,
}

/// Convert a table length into a 32-bit handle.
#[inline]
fn next_index(len: usize, table: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{table} table exceeded u32::MAX entries"))
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression, returning its id.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(next_index(self.exprs.len(), "expression"));
        self.exprs.push(expr);
        id
    }

    /// Allocate a statement, returning its id.
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(next_index(self.stmts.len(), "statement"));
        self.stmts.push(stmt);
        id
    }

    /// Allocate a contiguous statement list, returning its range.
    pub fn alloc_stmt_list(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = next_index(self.stmt_lists.len(), "statement list");
        self.stmt_lists.extend(stmts);
        let end = next_index(self.stmt_lists.len(), "statement list");
        StmtRange::new(start, end.saturating_sub(start))
    }

    /// Build a program from its top-level statements.
    pub fn program(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> Program {
        Program {
            statements: self.alloc_stmt_list(stmts),
        }
    }

    /// Get an expression by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get a statement by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    /// Get the statements of a range.
    ///
    /// A range that does not lie inside this arena reads as empty.
    #[inline]
    pub fn get_stmt_list(&self, range: StmtRange) -> &[StmtId] {
        let start = range.start as usize;
        start
            .checked_add(range.len())
            .and_then(|end| self.stmt_lists.get(start..end))
            .unwrap_or(&[])
    }

    /// Number of allocated expressions.
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Number of allocated statements.
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    // Node constructors for parsers and hand-built trees.

    /// `42`
    pub fn int(&mut self, value: i64) -> ExprId {
        self.alloc_expr(Expr::Int(value))
    }

    /// `true` / `false`
    pub fn bool(&mut self, value: bool) -> ExprId {
        self.alloc_expr(Expr::Bool(value))
    }

    /// `x`
    pub fn ident(&mut self, name: Name) -> ExprId {
        self.alloc_expr(Expr::Ident(name))
    }

    /// `!x`, `-x`
    pub fn prefix(&mut self, op: PrefixOp, operand: ExprId) -> ExprId {
        self.alloc_expr(Expr::Prefix { op, operand })
    }

    /// `a + b`
    pub fn infix(&mut self, op: InfixOp, left: ExprId, right: ExprId) -> ExprId {
        self.alloc_expr(Expr::Infix { op, left, right })
    }

    /// `if (condition) { consequence } else { alternative }`
    pub fn if_expr(
        &mut self,
        condition: ExprId,
        consequence: StmtRange,
        alternative: Option<StmtRange>,
    ) -> ExprId {
        self.alloc_expr(Expr::If {
            condition,
            consequence,
            alternative,
        })
    }

    /// `expr;`
    pub fn expr_stmt(&mut self, expr: ExprId) -> StmtId {
        self.alloc_stmt(Stmt::Expression(expr))
    }

    /// `let name = value;`
    pub fn let_stmt(&mut self, name: Name, value: ExprId) -> StmtId {
        self.alloc_stmt(Stmt::Let { name, value })
    }

    /// `return value;`
    pub fn return_stmt(&mut self, value: ExprId) -> StmtId {
        self.alloc_stmt(Stmt::Return(value))
    }

    /// `{ stmts }` as a statement of its own.
    pub fn block_stmt(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtId {
        let range = self.alloc_stmt_list(stmts);
        self.alloc_stmt(Stmt::Block(range))
    }
}
