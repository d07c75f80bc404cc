//! Operator matching helpers.

use cmacro_ir::{BinaryOp, TokenKind, UnaryOp};

use crate::Parser;

impl Parser<'_> {
    /// The binary operator at the cursor, if it belongs to precedence `tier`.
    pub(crate) fn match_binary_op(&self, tier: u8) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            Some(TokenKind::Operator(op)) => {
                BinaryOp::from_operator(*op).filter(|bin| bin.precedence() == tier)
            }
            _ => None,
        }
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.cursor.current_kind() {
            Some(TokenKind::Operator(op)) => UnaryOp::from_operator(*op),
            _ => None,
        }
    }

    /// Whether the cursor is at a token that can begin a primary operand.
    pub(crate) fn at_operand_start(&self) -> bool {
        matches!(
            self.cursor.current_kind(),
            Some(
                TokenKind::IntLiteral(_)
                    | TokenKind::FloatLiteral(_)
                    | TokenKind::CharLiteral(_)
                    | TokenKind::StringLiteral(_)
                    | TokenKind::Identifier(_)
            )
        ) || self.cursor.check(&TokenKind::LEFT_PAREN)
    }
}
