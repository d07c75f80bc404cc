//! Failure reporting for macro constant evaluation.
//!
//! Every evaluation that does not produce a constant produces exactly one
//! [`FailureRecord`]: a [`FailureKind`] from a closed set, the span of the
//! offending text, and a human-readable message. The lexer, parser and
//! evaluator each have their own structured error type and convert into
//! `FailureRecord` at the crate boundary.

mod failure;
mod failure_kind;

pub use failure::FailureRecord;
pub use failure_kind::FailureKind;
