//! Monkey IR - syntax tree types consumed by the execution engines.
//!
//! This crate contains:
//! - Names for interned identifiers (`Name`, `StringInterner`)
//! - Prefix and infix operators
//! - AST nodes (`Expr`, `Stmt`, `Program`)
//! - A flat arena that owns every node (`ExprArena`)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers become `Name(u32)`, so environment
//!   lookups hash a single integer.
//! - **Flatten Everything**: no `Box<Expr>`; children are `ExprId`/`StmtId`
//!   indices into the arena and statement lists are `StmtRange` slices.
//!
//! The parser that fills an arena lives outside this workspace. Nodes are
//! immutable once allocated; evaluators only ever read them.

mod arena;
pub mod ast;
mod interner;
mod name;

pub use arena::{ExprArena, ExprId, StmtId, StmtRange};
pub use ast::{Expr, InfixOp, Node, PrefixOp, Program, Stmt};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
