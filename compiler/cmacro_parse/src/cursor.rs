//! Token cursor for navigating the token stream.
//!
//! The token list has no end-of-input token; "at end" is `pos == len`, and
//! [`Cursor::end_span`] gives the zero-width location just past the last
//! token for errors raised there.

use cmacro_ir::{Span, Token, TokenKind};
use tracing::trace;

/// Position in a token slice, with lookahead and consumption helpers.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current position, for progress tracking in tests.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The current token, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> Option<&'a TokenKind> {
        self.current().map(|t| &t.kind)
    }

    /// Span of the current token, or [`Cursor::end_span`] at end of input.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().map_or_else(|| self.end_span(), |t| t.span)
    }

    /// Zero-width span just past the last token.
    pub fn end_span(&self) -> Span {
        Span::point(self.tokens.last().map_or(0, |t| t.span.end))
    }

    /// Span of the most recently consumed token.
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span,
            None => Span::DUMMY,
        }
    }

    /// Whether the current token is exactly `kind`.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Consume the current token. At end of input this is a no-op that
    /// returns `None`.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        trace!(
            pos = self.pos,
            kind = %token.kind.describe(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        self.pos += 1;
        Some(token)
    }
}
