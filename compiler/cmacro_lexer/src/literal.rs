//! Literal recognizer.
//!
//! Classifies one maximal literal substring (a preprocessing number, or a
//! character or string literal with its prefix) and decodes it into a typed
//! token payload. Error spans are relative to the start of `text`.

mod number;
mod quoted;

use cmacro_ir::{Span, TokenKind};

use crate::lex_error::{LexError, LexErrorKind};

/// Recognize and decode a single literal.
///
/// `text` must be the whole literal: `0x1fu`, `.5e3f`, `L'\0'`, `u8"a\n"`.
/// Returns a literal `TokenKind` or a `MalformedLiteral`-class error.
pub fn recognize(text: &str) -> Result<TokenKind, LexError> {
    match text.as_bytes() {
        [b'0'..=b'9', ..] | [b'.', b'0'..=b'9', ..] => number::recognize_number(text),
        [b'"' | b'\'', ..] | [b'L' | b'u' | b'U', ..] => quoted::recognize_quoted(text),
        _ => Err(LexError::number(
            whole(text),
            LexErrorKind::MissingDigits { radix: 10 },
        )),
    }
}

/// Span covering all of `text`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "literal text comes from a replacement text bounded by u32::MAX bytes"
)]
fn whole(text: &str) -> Span {
    Span::new(0, text.len() as u32)
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "literal text comes from a replacement text bounded by u32::MAX bytes"
)]
fn span(start: usize, end: usize) -> Span {
    Span::new(start as u32, end as u32)
}
