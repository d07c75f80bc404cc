//! Parse error types.
//!
//! Every parse failure is a `SyntaxError` at the classifier level; the
//! variants here only shape the message and the span.

use std::fmt;

use cmacro_diagnostic::{FailureKind, FailureRecord};
use cmacro_ir::Span;

/// What went wrong while parsing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A token that cannot appear here, e.g. `*` at the start of an operand.
    UnexpectedToken {
        found: String,
        expected: &'static str,
    },
    /// The text ended where an operand or `)` was required.
    UnexpectedEnd { expected: &'static str },
    /// `(` without a matching `)`.
    UnclosedParen { open: Span },
    /// A complete expression followed by more tokens.
    TrailingTokens { found: String },
    /// A C punctuator with no meaning in a constant expression (`&&`, `?`, `,`).
    UnsupportedPunctuator { punct: String },
    /// A numeric literal juxtaposed with another operand (`1 2`, `(int)3`).
    NumberJuxtaposition,
}

/// A parse error with its location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    #[cold]
    pub fn unexpected(span: Span, found: String, expected: &'static str) -> Self {
        ParseError::new(ParseErrorKind::UnexpectedToken { found, expected }, span)
    }

    #[cold]
    pub fn unexpected_end(span: Span, expected: &'static str) -> Self {
        ParseError::new(ParseErrorKind::UnexpectedEnd { expected }, span)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnexpectedToken { found, expected } => {
                write!(f, "expected {expected}, found {found}")
            }
            ParseErrorKind::UnexpectedEnd { expected } => {
                write!(f, "expected {expected}, found end of text")
            }
            ParseErrorKind::UnclosedParen { open } => {
                write!(f, "unclosed `(` opened at {open}")
            }
            ParseErrorKind::TrailingTokens { found } => {
                write!(f, "unexpected {found} after a complete expression")
            }
            ParseErrorKind::UnsupportedPunctuator { punct } => {
                write!(f, "`{punct}` is not allowed in a constant expression")
            }
            ParseErrorKind::NumberJuxtaposition => {
                f.write_str("numeric operand is adjacent to another operand with no operator")
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for FailureRecord {
    fn from(err: ParseError) -> Self {
        FailureRecord::new(FailureKind::SyntaxError, err.span, err.to_string())
    }
}

#[cfg(test)]
mod tests;
