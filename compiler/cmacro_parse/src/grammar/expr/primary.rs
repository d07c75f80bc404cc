//! Primary expressions: literals, identifiers, parenthesized expressions.

use cmacro_ir::{Expr, ExprKind, Literal, Punct, TokenKind};
use tracing::debug;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let span = self.cursor.current_span();
        debug!(
            pos = self.cursor.position(),
            span_start = span.start,
            span_end = span.end,
            "parse_primary"
        );

        let Some(kind) = self.cursor.current_kind() else {
            return Err(ParseError::unexpected_end(span, "an operand"));
        };

        let kind = match kind {
            TokenKind::IntLiteral(lit) => ExprKind::Literal(Literal::Int(*lit)),
            TokenKind::FloatLiteral(value) => ExprKind::Literal(Literal::Float(*value)),
            TokenKind::CharLiteral(value) => ExprKind::Literal(Literal::Char(*value)),
            TokenKind::StringLiteral(value) => ExprKind::Literal(Literal::Str(value.clone())),
            TokenKind::Identifier(name) => ExprKind::Reference(name.clone()),
            TokenKind::Punctuation(Punct::LeftParen) => return self.parse_paren(),
            _ => return Err(self.unexpected_here("an operand")),
        };
        self.cursor.advance();
        Ok(Expr::new(kind, span))
    }

    /// `( expr )`
    fn parse_paren(&mut self) -> Result<Expr, ParseError> {
        let open = self.cursor.current_span();
        self.cursor.advance();
        let inner = self.parse_expr()?;

        if self.cursor.is_at_end() {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedParen { open },
                self.cursor.end_span(),
            ));
        }
        if !self.cursor.check(&TokenKind::RIGHT_PAREN) {
            return Err(self.unexpected_here("`)`"));
        }
        let close = self.cursor.current_span();
        self.cursor.advance();
        Ok(Expr::new(ExprKind::Paren(Box::new(inner)), open.merge(close)))
    }

    /// Error for the token at the cursor when `expected` was required.
    #[cold]
    fn unexpected_here(&self, expected: &'static str) -> ParseError {
        let span = self.cursor.current_span();
        match self.cursor.current_kind() {
            None => ParseError::unexpected_end(span, expected),
            Some(TokenKind::Punctuation(Punct::Other(punct))) => ParseError::new(
                ParseErrorKind::UnsupportedPunctuator {
                    punct: punct.clone(),
                },
                span,
            ),
            Some(kind) => ParseError::unexpected(span, kind.describe(), expected),
        }
    }
}
