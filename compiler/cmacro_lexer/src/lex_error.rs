//! Lexer error types.
//!
//! Errors carry:
//! - WHERE: `span` locating the error in the replacement text
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` naming what the lexer was scanning
//! - HOW: an optional `suggestion`

use std::fmt;

use cmacro_diagnostic::{FailureKind, FailureRecord};
use cmacro_ir::Span;

/// A lexer error with enough context for a diagnostic.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
    pub context: LexErrorContext,
    pub suggestion: Option<String>,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    // === Character & String Errors ===
    /// Missing closing `"`.
    UnterminatedString,
    /// Missing closing `'`.
    UnterminatedChar,
    /// `''`
    EmptyCharLiteral,
    /// `'ab'`
    MultiCharLiteral,
    /// Prefix not allowed on this literal kind (`u8'a'`).
    InvalidPrefix { prefix: String },
    /// Unknown escape (`\q`).
    InvalidEscape { escape_char: char },
    /// `\x` with no hex digits.
    MissingHexDigits,
    /// `\u` / `\U` with fewer than 4 / 8 hex digits.
    IncompleteUniversalChar { expected: u8 },
    /// Universal character name naming a surrogate or a value past U+10FFFF.
    InvalidUniversalChar { value: u32 },
    /// Numeric escape larger than one code unit of the literal's encoding.
    EscapeOutOfRange { max: u32 },
    /// `u'...'` whose character needs a surrogate pair.
    CharTooWide { ch: char },

    // === Numeric Errors ===
    /// Digit outside the radix alphabet (`0b2`, `08`, `0xg`).
    InvalidDigitForRadix { digit: char, radix: u8 },
    /// Radix prefix with no digits (`0x`, `0b`).
    MissingDigits { radix: u8 },
    /// Integer magnitude above `u64::MAX`.
    IntOverflow,
    /// Suffix outside the accepted integer suffix list.
    InvalidIntSuffix { suffix: String },
    /// Suffix other than `f`, `F`, `l`, `L` on a floating literal.
    InvalidFloatSuffix { suffix: String },
    /// Exponent marker without digits (`1e`, `1e+`).
    EmptyExponent,
    /// Hexadecimal floating literal without its `p` exponent.
    MissingBinaryExponent,

    // === Source Errors ===
    /// Byte that begins no C token.
    InvalidCharacter { ch: char },
    /// `/*` without `*/`.
    UnterminatedComment,
    /// NUL byte in the text.
    InvalidNullByte,
    /// Text longer than `u32::MAX` bytes.
    TextTooLong,
}

impl LexErrorKind {
    /// The failure this error is reported as.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            LexErrorKind::InvalidCharacter { .. }
            | LexErrorKind::UnterminatedComment
            | LexErrorKind::InvalidNullByte
            | LexErrorKind::TextTooLong => FailureKind::SyntaxError,
            _ => FailureKind::MalformedLiteral,
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnterminatedString => f.write_str("unterminated string literal"),
            LexErrorKind::UnterminatedChar => f.write_str("unterminated character literal"),
            LexErrorKind::EmptyCharLiteral => f.write_str("empty character literal"),
            LexErrorKind::MultiCharLiteral => {
                f.write_str("character literal contains more than one character")
            }
            LexErrorKind::InvalidPrefix { prefix } => {
                write!(f, "prefix `{prefix}` is not allowed on a character literal")
            }
            LexErrorKind::InvalidEscape { escape_char } => {
                write!(f, "unknown escape sequence `\\{}`", escape_char.escape_debug())
            }
            LexErrorKind::MissingHexDigits => f.write_str("`\\x` used with no following hex digits"),
            LexErrorKind::IncompleteUniversalChar { expected } => {
                write!(f, "universal character name needs exactly {expected} hex digits")
            }
            LexErrorKind::InvalidUniversalChar { value } => {
                write!(f, "universal character name U+{value:04X} is not a Unicode scalar value")
            }
            LexErrorKind::EscapeOutOfRange { max } => {
                write!(f, "escape sequence out of range (code unit maximum is {max:#x})")
            }
            LexErrorKind::CharTooWide { ch } => write!(
                f,
                "character U+{:04X} does not fit in a single UTF-16 code unit",
                u32::from(*ch)
            ),
            LexErrorKind::InvalidDigitForRadix { digit, radix } => {
                write!(f, "invalid digit `{digit}` in base-{radix} literal")
            }
            LexErrorKind::MissingDigits { radix } => {
                write!(f, "base-{radix} literal has no digits")
            }
            LexErrorKind::IntOverflow => f.write_str("integer literal is too large"),
            LexErrorKind::InvalidIntSuffix { suffix } => {
                write!(f, "invalid suffix `{suffix}` on integer literal")
            }
            LexErrorKind::InvalidFloatSuffix { suffix } => {
                write!(f, "invalid suffix `{suffix}` on floating literal")
            }
            LexErrorKind::EmptyExponent => f.write_str("exponent has no digits"),
            LexErrorKind::MissingBinaryExponent => {
                f.write_str("hexadecimal floating literal requires a `p` exponent")
            }
            LexErrorKind::InvalidCharacter { ch } => {
                write!(f, "character `{}` cannot start a token", ch.escape_debug())
            }
            LexErrorKind::UnterminatedComment => f.write_str("unterminated block comment"),
            LexErrorKind::InvalidNullByte => f.write_str("null byte in replacement text"),
            LexErrorKind::TextTooLong => f.write_str("replacement text is too long"),
        }
    }
}

/// What the lexer was scanning when the error occurred.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    #[default]
    TopLevel,
    NumberLiteral,
    CharLiteral,
    StringLiteral,
}

impl LexError {
    fn new(span: Span, kind: LexErrorKind, context: LexErrorContext) -> Self {
        LexError {
            span,
            kind,
            context,
            suggestion: None,
        }
    }

    /// A malformed number; `kind` says how.
    #[cold]
    pub fn number(span: Span, kind: LexErrorKind) -> Self {
        LexError::new(span, kind, LexErrorContext::NumberLiteral)
    }

    /// A malformed character literal.
    #[cold]
    pub fn char_literal(span: Span, kind: LexErrorKind) -> Self {
        LexError::new(span, kind, LexErrorContext::CharLiteral)
    }

    /// A malformed string literal.
    #[cold]
    pub fn string_literal(span: Span, kind: LexErrorKind) -> Self {
        LexError::new(span, kind, LexErrorContext::StringLiteral)
    }

    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        LexError::string_literal(span, LexErrorKind::UnterminatedString)
            .with_suggestion("add closing `\"`")
    }

    #[cold]
    pub fn unterminated_char(span: Span) -> Self {
        LexError::char_literal(span, LexErrorKind::UnterminatedChar)
            .with_suggestion("add closing `'`")
    }

    #[cold]
    pub fn invalid_int_suffix(span: Span, suffix: &str) -> Self {
        LexError::number(
            span,
            LexErrorKind::InvalidIntSuffix {
                suffix: suffix.to_owned(),
            },
        )
        .with_suggestion("valid suffixes are combinations of one `u` and one `l` or `ll`")
    }

    #[cold]
    pub fn invalid_character(span: Span, ch: char) -> Self {
        LexError::new(span, LexErrorKind::InvalidCharacter { ch }, LexErrorContext::TopLevel)
    }

    #[cold]
    pub fn unterminated_comment(span: Span) -> Self {
        LexError::new(span, LexErrorKind::UnterminatedComment, LexErrorContext::TopLevel)
            .with_suggestion("add closing `*/`")
    }

    #[cold]
    pub fn invalid_null_byte(span: Span) -> Self {
        LexError::new(span, LexErrorKind::InvalidNullByte, LexErrorContext::TopLevel)
    }

    #[cold]
    pub fn text_too_long(len: usize) -> Self {
        let end = u32::try_from(len).unwrap_or(u32::MAX);
        LexError::new(Span::new(0, end), LexErrorKind::TextTooLong, LexErrorContext::TopLevel)
    }

    /// Shift the span by `offset` bytes, for errors found inside a literal
    /// whose text was recognized on its own.
    #[must_use]
    pub fn offset_by(mut self, offset: u32) -> Self {
        self.span = Span::new(self.span.start + offset, self.span.end + offset);
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, "; {suggestion}")?;
        }
        Ok(())
    }
}

impl std::error::Error for LexError {}

impl From<LexError> for FailureRecord {
    fn from(err: LexError) -> Self {
        FailureRecord::new(err.kind.failure_kind(), err.span, err.to_string())
    }
}
