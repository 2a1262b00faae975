//! Property-based tests for the evaluator and VM.
//!
//! These tests use proptest to generate operands and verify:
//! 1. Integer infix law: `a op b` matches native integer semantics
//! 2. Boolean identity: comparisons yield the canonical booleans
//! 3. Truthiness: `!!x` is `from_bool(truthy(x))`
//! 4. Idempotence: evaluating a program twice gives equal results
//! 5. The VM and the evaluator agree on addition

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use monkey::ir::{ExprId, InfixOp, PrefixOp};
use monkey::{
    make, Bytecode, Environment, ExprArena, Instructions, Interpreter, OpCode, StringInterner,
    Value, Vm,
};
use proptest::prelude::*;

// -- Strategies --

/// Operands small enough that `+ - *` never overflow.
fn operand() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..=1_000_000_000
}

fn infix_op() -> impl Strategy<Value = InfixOp> {
    prop_oneof![
        Just(InfixOp::Add),
        Just(InfixOp::Sub),
        Just(InfixOp::Mul),
        Just(InfixOp::Div),
        Just(InfixOp::Lt),
        Just(InfixOp::Gt),
        Just(InfixOp::Eq),
        Just(InfixOp::NotEq),
    ]
}

fn comparison_op() -> impl Strategy<Value = InfixOp> {
    prop_oneof![
        Just(InfixOp::Lt),
        Just(InfixOp::Gt),
        Just(InfixOp::Eq),
        Just(InfixOp::NotEq),
    ]
}

// -- Helpers --

fn expected(a: i64, op: InfixOp, b: i64) -> Value {
    match op {
        InfixOp::Add => Value::int(a + b),
        InfixOp::Sub => Value::int(a - b),
        InfixOp::Mul => Value::int(a * b),
        InfixOp::Div => Value::int(a / b),
        InfixOp::Lt => Value::from_bool(a < b),
        InfixOp::Gt => Value::from_bool(a > b),
        InfixOp::Eq => Value::from_bool(a == b),
        InfixOp::NotEq => Value::from_bool(a != b),
    }
}

fn eval_one(arena: &ExprArena, expr: ExprId) -> Value {
    let interner = StringInterner::new();
    let mut env = Environment::new();
    Interpreter::new(arena, &interner).eval_expr(expr, &mut env)
}

fn eval_infix(a: i64, op: InfixOp, b: i64) -> Value {
    let mut arena = ExprArena::new();
    let left = arena.int(a);
    let right = arena.int(b);
    let expr = arena.infix(op, left, right);
    eval_one(&arena, expr)
}

// -- Properties --

proptest! {
    #[test]
    fn integer_infix_law(a in operand(), op in infix_op(), b in operand()) {
        prop_assume!(op != InfixOp::Div || b != 0);
        prop_assert_eq!(eval_infix(a, op, b), expected(a, op, b));
    }

    #[test]
    fn division_by_zero_is_an_error(a in any::<i64>()) {
        let result = eval_infix(a, InfixOp::Div, 0);
        prop_assert_eq!(
            result.as_error().map(|e| e.message.as_str()),
            Some("division by zero")
        );
    }

    #[test]
    fn comparisons_yield_canonical_booleans(a in operand(), op in comparison_op(), b in operand()) {
        let result = eval_infix(a, op, b);
        prop_assert!(result == Value::TRUE || result == Value::FALSE);
        prop_assert_eq!(result.as_bool().map(Value::from_bool), Some(result));
    }

    #[test]
    fn double_bang_is_truthiness(n in any::<i64>(), b in any::<bool>()) {
        let mut arena = ExprArena::new();

        let int = arena.int(n);
        let not = arena.prefix(PrefixOp::Not, int);
        let not_not = arena.prefix(PrefixOp::Not, not);
        prop_assert_eq!(eval_one(&arena, not_not), Value::TRUE);

        let boolean = arena.bool(b);
        let not = arena.prefix(PrefixOp::Not, boolean);
        let not_not = arena.prefix(PrefixOp::Not, not);
        prop_assert_eq!(eval_one(&arena, not_not), Value::from_bool(b));
    }

    #[test]
    fn evaluation_is_idempotent(a in operand(), op in infix_op(), b in operand()) {
        let interner = StringInterner::new();
        let mut arena = ExprArena::new();
        let x = interner.intern("x");

        // let x = a; x op b;
        let value = arena.int(a);
        let bind = arena.let_stmt(x, value);
        let x_ref = arena.ident(x);
        let right = arena.int(b);
        let expr = arena.infix(op, x_ref, right);
        let use_x = arena.expr_stmt(expr);
        let program = arena.program([bind, use_x]);

        let interp = Interpreter::new(&arena, &interner);
        let mut env = Environment::new();
        let first = interp.eval_program(program, &mut env);
        let second = interp.eval_program(program, &mut env);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn vm_addition_matches_evaluator(a in any::<i64>(), b in any::<i64>()) {
        let bytecode = Bytecode::new(
            Instructions::concat([
                make(OpCode::Constant, &[0]),
                make(OpCode::Constant, &[1]),
                make(OpCode::Add, &[]),
            ]),
            vec![Value::int(a), Value::int(b)],
        );
        let mut vm = Vm::new(&bytecode);
        let evaluated = eval_infix(a, InfixOp::Add, b);

        match vm.run() {
            Ok(()) => prop_assert_eq!(vm.stack_top(), Some(&evaluated)),
            Err(_) => prop_assert!(evaluated.is_error()),
        }
    }
}
