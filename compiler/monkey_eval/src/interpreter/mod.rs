//! Tree-walking interpreter.
//!
//! Walks an [`ExprArena`] directly, producing a [`Value`] for every node.
//!
//! # Result Channel
//!
//! Failures are `Value::Error` and early exits are `Value::Return`; both
//! travel through the ordinary return value. Every composition point checks
//! its sub-results with [`Value::is_abrupt`] and hands an abrupt value
//! straight back, so neither is ever fed to an operator.
//!
//! A `Return` stays wrapped while it climbs out of nested blocks and is only
//! unwrapped by [`Interpreter::eval_program`].
//!
//! Statements that produce nothing observable (a bare `let`, an empty block)
//! evaluate to `None`. In expression position such a block reads as `null`.

use monkey_ir::{Expr, ExprArena, ExprId, Node, Program, Stmt, StmtId, StmtRange, StringLookup};
use monkey_value::errors::identifier_not_found;
use monkey_value::Value;

use crate::operators::evaluate_infix;
use crate::stack::ensure_sufficient_stack;
use crate::unary_operators::evaluate_prefix;
use crate::Environment;

/// Return early from an expression evaluator if `$value` is abrupt.
macro_rules! propagate {
    ($value:expr) => {{
        let value = $value;
        if value.is_abrupt() {
            return value;
        }
        value
    }};
}

/// Tree-walking interpreter over one arena.
///
/// Holds only shared borrows: the tree is never mutated, and the binding
/// store is passed to each call so the caller decides how long a session
/// lives.
#[derive(Clone, Copy)]
pub struct Interpreter<'a> {
    arena: &'a ExprArena,
    names: &'a dyn StringLookup,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter for nodes allocated in `arena`. Identifier
    /// names are resolved through `names` when reporting errors.
    pub fn new(arena: &'a ExprArena, names: &'a dyn StringLookup) -> Self {
        Interpreter { arena, names }
    }

    /// Evaluate any node.
    pub fn eval(&self, node: impl Into<Node>, env: &mut Environment) -> Option<Value> {
        match node.into() {
            Node::Program(program) => self.eval_program(program, env),
            Node::Stmt(id) => self.eval_stmt(id, env),
            Node::Expr(id) => Some(self.eval_expr(id, env)),
        }
    }

    /// Evaluate a whole program.
    ///
    /// Stops at the first error or return; a return is unwrapped to the
    /// value it carries. Otherwise yields the last statement's result.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&self, program: Program, env: &mut Environment) -> Option<Value> {
        let mut result = None;
        for &stmt in self.arena.get_stmt_list(program.statements) {
            match self.eval_stmt(stmt, env) {
                Some(Value::Return(inner)) => return Some((*inner).clone()),
                Some(err @ Value::Error(_)) => {
                    tracing::debug!(error = %err, "program stopped on error");
                    return Some(err);
                }
                other => result = other,
            }
        }
        result
    }

    /// Evaluate a block's statements.
    ///
    /// Stops at the first error or return, passing a return up still
    /// wrapped so an enclosing construct can see the block exited early.
    pub fn eval_block(&self, range: StmtRange, env: &mut Environment) -> Option<Value> {
        ensure_sufficient_stack(|| {
            let mut result = None;
            for &stmt in self.arena.get_stmt_list(range) {
                result = self.eval_stmt(stmt, env);
                if result.as_ref().is_some_and(Value::is_abrupt) {
                    return result;
                }
            }
            result
        })
    }

    /// Evaluate one statement.
    pub fn eval_stmt(&self, id: StmtId, env: &mut Environment) -> Option<Value> {
        match self.arena.get_stmt(id) {
            Stmt::Expression(expr) => Some(self.eval_expr(*expr, env)),
            Stmt::Block(range) => self.eval_block(*range, env),
            Stmt::Return(expr) => {
                let value = self.eval_expr(*expr, env);
                if value.is_abrupt() {
                    return Some(value);
                }
                Some(Value::return_value(value))
            }
            Stmt::Let { name, value } => {
                let value = self.eval_expr(*value, env);
                if value.is_abrupt() {
                    return Some(value);
                }
                env.set(*name, value);
                None
            }
        }
    }

    /// Evaluate one expression.
    pub fn eval_expr(&self, id: ExprId, env: &mut Environment) -> Value {
        ensure_sufficient_stack(|| self.eval_expr_inner(id, env))
    }

    fn eval_expr_inner(&self, id: ExprId, env: &mut Environment) -> Value {
        match self.arena.get_expr(id) {
            Expr::Int(n) => Value::int(*n),
            Expr::Bool(b) => Value::from_bool(*b),
            Expr::Ident(name) => env.get(*name).unwrap_or_else(|| {
                identifier_not_found(self.names.lookup(*name)).into_value()
            }),
            Expr::Prefix { op, operand } => {
                let operand = propagate!(self.eval_expr(*operand, env));
                evaluate_prefix(*op, &operand)
            }
            Expr::Infix { op, left, right } => {
                let left = propagate!(self.eval_expr(*left, env));
                let right = propagate!(self.eval_expr(*right, env));
                evaluate_infix(&left, *op, &right)
            }
            Expr::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = propagate!(self.eval_expr(*condition, env));
                let branch = if condition.is_truthy() {
                    Some(*consequence)
                } else {
                    *alternative
                };
                branch
                    .and_then(|block| self.eval_block(block, env))
                    .unwrap_or(Value::NULL)
            }
        }
    }
}
