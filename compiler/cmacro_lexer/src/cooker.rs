//! Token cooking layer.
//!
//! Transforms `(RawTag, len)` pairs from the raw scanner into `TokenKind`
//! values:
//!
//! ```text
//! text → RawScanner → (RawTag, len) → TokenCooker → TokenKind
//! ```
//!
//! - **Operators/parentheses**: direct 1:1 mapping
//! - **Other punctuators**: kept verbatim as `Punct::Other`
//! - **Identifiers**: copied out, not resolved
//! - **Numbers, characters, strings**: handed to the literal recognizer
//! - **Trivia**: dropped
//! - **Error tags**: turned into a `LexError`; the first one stops lexing

use cmacro_ir::{Operator, Punct, Span, TokenKind};
use cmacro_lexer_core::RawTag;

use crate::lex_error::LexError;
use crate::literal;

/// Cooks raw tokens of one replacement text.
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        TokenCooker { source }
    }

    /// Cook a single raw token.
    ///
    /// `offset` is the byte position of the token, `len` its byte length.
    /// Returns `Ok(None)` for trivia.
    pub(crate) fn cook(
        &self,
        tag: RawTag,
        offset: u32,
        len: u32,
    ) -> Result<Option<TokenKind>, LexError> {
        let kind = match tag {
            RawTag::Plus => TokenKind::Operator(Operator::Plus),
            RawTag::Minus => TokenKind::Operator(Operator::Minus),
            RawTag::Star => TokenKind::Operator(Operator::Star),
            RawTag::Slash => TokenKind::Operator(Operator::Slash),
            RawTag::Percent => TokenKind::Operator(Operator::Percent),
            RawTag::Amp => TokenKind::Operator(Operator::Amp),
            RawTag::Pipe => TokenKind::Operator(Operator::Pipe),
            RawTag::Caret => TokenKind::Operator(Operator::Caret),
            RawTag::Shl => TokenKind::Operator(Operator::Shl),
            RawTag::Shr => TokenKind::Operator(Operator::Shr),
            RawTag::Tilde => TokenKind::Operator(Operator::Tilde),
            RawTag::Bang => TokenKind::Operator(Operator::Bang),

            RawTag::LeftParen => TokenKind::LEFT_PAREN,
            RawTag::RightParen => TokenKind::RIGHT_PAREN,
            RawTag::OtherPunct => {
                TokenKind::Punctuation(Punct::Other(self.text(offset, len).to_owned()))
            }

            RawTag::Ident => TokenKind::Identifier(self.text(offset, len).to_owned()),
            RawTag::Number | RawTag::Char | RawTag::String => {
                literal::recognize(self.text(offset, len))
                    .map_err(|err| err.offset_by(offset))?
            }

            RawTag::Whitespace
            | RawTag::Newline
            | RawTag::LineComment
            | RawTag::BlockComment => return Ok(None),

            RawTag::InvalidByte => {
                let ch = self.text(offset, len).chars().next().unwrap_or('\u{fffd}');
                return Err(LexError::invalid_character(span(offset, len), ch));
            }
            RawTag::UnterminatedString => {
                return Err(LexError::unterminated_string(span(offset, len)))
            }
            RawTag::UnterminatedChar => {
                return Err(LexError::unterminated_char(span(offset, len)))
            }
            RawTag::UnterminatedComment => {
                return Err(LexError::unterminated_comment(span(offset, len)))
            }
            RawTag::InteriorNull => return Err(LexError::invalid_null_byte(span(offset, len))),

            // The driver loop stops before cooking `Eof`.
            RawTag::Eof => return Ok(None),
        };
        Ok(Some(kind))
    }

    fn text(&self, offset: u32, len: u32) -> &'src str {
        let start = offset as usize;
        let end = start + len as usize;
        self.source.get(start..end).unwrap_or("")
    }
}

#[inline]
fn span(offset: u32, len: u32) -> Span {
    Span::new(offset, offset + len)
}
