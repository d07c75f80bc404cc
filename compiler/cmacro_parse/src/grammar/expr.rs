//! Expression parsing.
//!
//! - `expr.rs`: entry point (`parse_expr`), binary precedence chain, unary
//!   operators and juxtaposition
//! - `operators.rs`: operator matching helpers
//! - `primary.rs`: literals, identifiers, parenthesized expressions

mod operators;
mod primary;

use cmacro_ir::{BinaryOp, Expr, ExprKind, Literal};
use cmacro_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser};

const TIER_BITWISE_OR: u8 = BinaryOp::BitOr.precedence();
const TIER_BITWISE_XOR: u8 = BinaryOp::BitXor.precedence();
const TIER_BITWISE_AND: u8 = BinaryOp::BitAnd.precedence();
const TIER_SHIFT: u8 = BinaryOp::Shl.precedence();
const TIER_ADDITIVE: u8 = BinaryOp::Add.precedence();
const TIER_MULTIPLICATIVE: u8 = BinaryOp::Mul.precedence();

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Re-entered once per parenthesis level, so it grows the stack when
    /// needed.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_bitwise_or())
    }

    /// Parse `|` (lowest precedence binary).
    fn parse_bitwise_or(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(TIER_BITWISE_OR, Self::parse_bitwise_xor)
    }

    /// Parse `^`.
    fn parse_bitwise_xor(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(TIER_BITWISE_XOR, Self::parse_bitwise_and)
    }

    /// Parse `&`.
    fn parse_bitwise_and(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(TIER_BITWISE_AND, Self::parse_shift)
    }

    /// Parse `<<` and `>>`.
    fn parse_shift(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(TIER_SHIFT, Self::parse_additive)
    }

    /// Parse `+` and `-`.
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(TIER_ADDITIVE, Self::parse_multiplicative)
    }

    /// Parse `*`, `/` and `%`.
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        self.parse_left_assoc(TIER_MULTIPLICATIVE, Self::parse_unary)
    }

    /// One left-associative tier: `next (op next)*`.
    fn parse_left_assoc(
        &mut self,
        tier: u8,
        next: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut left = next(self)?;

        while let Some(op) = self.match_binary_op(tier) {
            self.cursor.advance();
            let right = next(self)?;

            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    /// Parse prefix `-`, `+`, `!`, `~`.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_unary_inner())
    }

    fn parse_unary_inner(&mut self) -> Result<Expr, ParseError> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_juxtaposition();
        };
        let start = self.cursor.current_span();
        self.cursor.advance();
        let operand = self.parse_unary()?;

        let span = start.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// Parse one primary operand, or a chain of juxtaposed operands.
    fn parse_juxtaposition(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_primary()?;
        if !self.at_operand_start() {
            return Ok(first);
        }

        let mut operands = vec![first];
        while self.at_operand_start() {
            operands.push(self.parse_primary()?);
        }

        let span = match (operands.first(), operands.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => self.cursor.previous_span(),
        };
        // With a quoted literal present this is a concatenation, and a number
        // in it is an operand type error for the evaluator.
        if operands.iter().any(is_numeric_literal) && !operands.iter().any(is_quoted_literal) {
            return Err(ParseError::new(ParseErrorKind::NumberJuxtaposition, span));
        }
        Ok(Expr::new(ExprKind::Concat(operands), span))
    }
}

fn is_numeric_literal(expr: &Expr) -> bool {
    matches!(
        expr.kind,
        ExprKind::Literal(Literal::Int(_) | Literal::Float(_))
    )
}

fn is_quoted_literal(expr: &Expr) -> bool {
    matches!(
        expr.kind,
        ExprKind::Literal(Literal::Str(_) | Literal::Char(_))
    )
}
