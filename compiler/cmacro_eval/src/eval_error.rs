//! Error types for expression evaluation.
//!
//! `EvalErrorKind` carries structured data for each failure; the factory
//! functions are the way errors are built. Every kind maps onto exactly one
//! public [`FailureKind`].

use cmacro_diagnostic::{FailureKind, FailureRecord};
use cmacro_ir::{Encoding, Span};
use thiserror::Error;

/// Typed evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum EvalErrorKind {
    // References
    #[error("`{name}` is not defined")]
    UnresolvedIdentifier { name: String },
    #[error("`{name}` is a function-like macro and has no constant value")]
    NonConstantReference { name: String },
    #[error("`{name}` refers to itself through {}", .chain.join(" -> "))]
    CyclicReference { name: String, chain: Vec<String> },
    #[error("resolving `{name}` exceeds the reference depth limit of {limit}")]
    ReferenceTooDeep { name: String, limit: usize },
    #[error("in expansion of `{name}`: {}", .record.message)]
    InExpansion {
        name: String,
        record: Box<FailureRecord>,
    },

    // Types
    #[error("operator `{op}` cannot be applied to {left} and {right} operands")]
    BinaryTypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("operator `{op}` cannot be applied to a {operand} operand")]
    UnaryTypeMismatch {
        op: &'static str,
        operand: &'static str,
    },
    #[error("cannot concatenate a {found} operand with strings")]
    ConcatNonString { found: &'static str },
    #[error("juxtaposed operands contain no string")]
    ConcatWithoutString,

    // Encodings
    #[error("cannot concatenate {} and {} strings", .first.describe(), .second.describe())]
    EncodingConflict { first: Encoding, second: Encoding },

    // Arithmetic
    #[error("integer {op} by zero")]
    DivisionByZero { op: &'static str },
}

impl EvalErrorKind {
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            EvalErrorKind::UnresolvedIdentifier { .. } => FailureKind::UnresolvedIdentifier,
            EvalErrorKind::NonConstantReference { .. } => FailureKind::NonConstantReference,
            EvalErrorKind::CyclicReference { .. } | EvalErrorKind::ReferenceTooDeep { .. } => {
                FailureKind::CyclicReference
            }
            EvalErrorKind::InExpansion { record, .. } => record.kind,
            EvalErrorKind::BinaryTypeMismatch { .. }
            | EvalErrorKind::UnaryTypeMismatch { .. }
            | EvalErrorKind::ConcatNonString { .. }
            | EvalErrorKind::ConcatWithoutString => FailureKind::TypeMismatch,
            EvalErrorKind::EncodingConflict { .. } => FailureKind::ConcatenationEncodingConflict,
            EvalErrorKind::DivisionByZero { .. } => FailureKind::DivisionByZero,
        }
    }
}

/// Evaluation error with the span of the offending node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, span: Span) -> Self {
        EvalError { kind, span }
    }
}

impl From<EvalError> for FailureRecord {
    fn from(err: EvalError) -> Self {
        FailureRecord::new(err.kind.failure_kind(), err.span, err.kind.to_string())
    }
}

// Factories

#[cold]
pub fn unresolved_identifier(name: &str, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::UnresolvedIdentifier {
            name: name.to_owned(),
        },
        span,
    )
}

#[cold]
pub fn non_constant_reference(name: &str, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::NonConstantReference {
            name: name.to_owned(),
        },
        span,
    )
}

/// `name` is already on the resolution stack `chain`.
#[cold]
pub fn cyclic_reference(name: &str, chain: &[String], span: Span) -> EvalError {
    let mut chain = chain.to_vec();
    chain.push(name.to_owned());
    EvalError::new(
        EvalErrorKind::CyclicReference {
            name: name.to_owned(),
            chain,
        },
        span,
    )
}

#[cold]
pub fn reference_too_deep(name: &str, limit: usize, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::ReferenceTooDeep {
            name: name.to_owned(),
            limit,
        },
        span,
    )
}

/// A deferred definition failed; report it at the referencing site.
#[cold]
pub fn in_expansion(name: &str, record: FailureRecord, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::InExpansion {
            name: name.to_owned(),
            record: Box::new(record),
        },
        span,
    )
}

#[cold]
pub fn binary_type_mismatch(
    op: &'static str,
    left: &'static str,
    right: &'static str,
    span: Span,
) -> EvalError {
    EvalError::new(EvalErrorKind::BinaryTypeMismatch { op, left, right }, span)
}

#[cold]
pub fn unary_type_mismatch(op: &'static str, operand: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::UnaryTypeMismatch { op, operand }, span)
}

#[cold]
pub fn concat_non_string(found: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::ConcatNonString { found }, span)
}

#[cold]
pub fn concat_without_string(span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::ConcatWithoutString, span)
}

#[cold]
pub fn encoding_conflict(first: Encoding, second: Encoding, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::EncodingConflict { first, second }, span)
}

#[cold]
pub fn division_by_zero(op: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero { op }, span)
}

#[cfg(test)]
mod tests;
