//! Stack growth for recursion over nested data.
//!
//! Matcher evaluation, structural equivalence and value ordering all recurse
//! once per level of container nesting. A list nested a few hundred thousand
//! levels deep is legal input, so every recursive entry point wraps its body
//! in [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate allocates a fresh segment when the
//! remaining stack drops below [`RED_ZONE`]. On WASM the call is a plain
//! passthrough.

/// Remaining stack below which a new segment is allocated (100KB).
pub const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
pub const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] remains.
///
/// ```text
/// fn depth(v: &Value) -> usize {
///     ensure_sufficient_stack(|| match v.as_list() {
///         Some(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
///         None => 0,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
