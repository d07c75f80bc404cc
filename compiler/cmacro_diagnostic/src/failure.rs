use cmacro_ir::Span;
use thiserror::Error;

use crate::FailureKind;

/// The single failure reported for a macro.
///
/// Terminal for that macro. `span` locates the offending text inside the
/// macro's own replacement text; failures decided before tokenizing carry
/// the span of the whole text.
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
#[error("[{}] {kind} at {span}: {message}", .kind.code())]
pub struct FailureRecord {
    pub kind: FailureKind,
    pub span: Span,
    pub message: String,
}

impl FailureRecord {
    pub fn new(kind: FailureKind, span: Span, message: impl Into<String>) -> Self {
        FailureRecord {
            kind,
            span,
            message: message.into(),
        }
    }

    #[cold]
    pub fn function_like(span: Span) -> Self {
        FailureRecord::new(
            FailureKind::FunctionLikeMacro,
            span,
            "macro takes parameters and has no constant value",
        )
    }

    #[cold]
    pub fn empty_definition(span: Span) -> Self {
        FailureRecord::new(
            FailureKind::EmptyDefinition,
            span,
            "replacement text is empty",
        )
    }

    /// Attach the offending text to the message.
    #[must_use]
    pub fn with_context(mut self, context: &str) -> Self {
        self.message = format!("{} (in `{context}`)", self.message);
        self
    }
}
