//! Recursive descent parser for macro constant expressions.
//!
//! Produces an owned [`Expr`] tree. Precedence, lowest first:
//!
//! ```text
//! |   ^   &   << >>   + -   * / %   unary - + ! ~   juxtaposition   primary
//! ```
//!
//! All binary tiers are left-associative. Juxtaposed operands
//! (`"a" NAME ("b")`) form a `Concat` node whose operands must turn out to be
//! strings during evaluation; a numeric literal in such a chain is rejected
//! here.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use cmacro_ir::{Expr, Punct, Token, TokenKind};

/// Parser state over one token list.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse the whole token list as a single expression.
    pub fn parse_expression(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        match self.cursor.current() {
            None => Ok(expr),
            Some(token) => Err(match &token.kind {
                TokenKind::Punctuation(Punct::Other(punct)) => ParseError::new(
                    ParseErrorKind::UnsupportedPunctuator {
                        punct: punct.clone(),
                    },
                    token.span,
                ),
                kind => ParseError::new(
                    ParseErrorKind::TrailingTokens {
                        found: kind.describe(),
                    },
                    token.span,
                ),
            }),
        }
    }
}

/// Parse `tokens` as one constant expression.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse_expression()
}
