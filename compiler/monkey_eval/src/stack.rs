//! Native stack growth for deeply nested syntax trees.
//!
//! The evaluator recurses once per nested expression or block. A parser can
//! hand it arbitrarily deep trees (`!!!!...x`, `((((1 + 1) + 1) + 1)...)`),
//! so every recursive entry point runs under [`ensure_sufficient_stack`].

/// Run `f`, first growing the native stack if less than the red zone
/// remains.
///
/// On WASM targets the closure runs directly.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Grow once less than this much stack is left (100KB).
    const RED_ZONE: usize = 100 * 1024;

    /// Size of each new stack segment (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
