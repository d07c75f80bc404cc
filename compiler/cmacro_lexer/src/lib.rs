//! Tokenizer for C macro replacement text.
//!
//! Two layers:
//! - `cmacro_lexer_core` scans bytes into `(RawTag, len)` pairs
//! - this crate cooks them into [`Token`]s, decoding every literal through
//!   the literal recognizer ([`recognize`])
//!
//! Lexing stops at the first error. Malformed literals report
//! `MalformedLiteral`; bytes that begin no C token, unterminated comments and
//! interior NULs report `SyntaxError` (see [`LexErrorKind::failure_kind`]).

mod cooker;
mod escape;
mod lex_error;
mod literal;
mod parse_helpers;

use cmacro_ir::{Span, Token};
use cmacro_lexer_core::{RawScanner, RawTag, SourceBuffer};

use crate::cooker::TokenCooker;

pub use lex_error::{LexError, LexErrorContext, LexErrorKind};
pub use literal::recognize;

/// Lex a replacement text into tokens.
///
/// Whitespace, line continuations and comments are dropped. Token spans are
/// byte offsets into `source`.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    if u32::try_from(source.len()).is_err() {
        return Err(LexError::text_too_long(source.len()));
    }

    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let cooker = TokenCooker::new(source);
    let mut tokens = Vec::new();
    let mut offset = 0u32;

    loop {
        let raw = scanner.next_token();
        if raw.tag == RawTag::Eof {
            break;
        }
        if let Some(kind) = cooker.cook(raw.tag, offset, raw.len)? {
            tokens.push(Token::new(kind, Span::new(offset, offset + raw.len)));
        }
        offset += raw.len;
    }
    Ok(tokens)
}

/// Whether `source` holds nothing but whitespace and comments.
///
/// An unterminated comment is not blank.
pub fn is_blank(source: &str) -> bool {
    cmacro_lexer_core::tokenize(source)
        .iter()
        .all(|raw| raw.tag.is_trivia())
}

#[cfg(test)]
mod tests;
