//! Stack growth for deep recursion.
//!
//! The parser descends once per nesting level and the tree walks recurse
//! once per node depth, so `((((x))))` nested a few thousand deep would
//! overflow a thread's stack. Wrapping each recursive step in
//! [`ensure_sufficient_stack`] moves the rest of the recursion onto a freshly
//! allocated segment whenever the current one runs low.
//!
//! On `wasm32` the wrapper calls straight through.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first moving to a new stack segment if the current one is
/// nearly used up.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
