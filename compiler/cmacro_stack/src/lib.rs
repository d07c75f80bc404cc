//! Stack growth for the recursive parts of macro evaluation.
//!
//! The parser descends once per nesting level of parentheses and unary
//! operators, and the evaluator folds the resulting tree recursively. A
//! header can contain `((((...))))` nested deeper than the native stack
//! allows, so both wrap their recursive entry points in
//! [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate switches to a freshly allocated
//! segment when less than [`RED_ZONE`] bytes remain. On `wasm32` the call is a
//! passthrough.

/// Remaining stack below which a new segment is allocated.
pub const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment.
pub const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] remains.
///
/// ```text
/// fn parse_unary(&mut self) -> Result<Expr, ParseError> {
///     ensure_sufficient_stack(|| self.parse_unary_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
