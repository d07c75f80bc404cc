//! Tokens of a macro replacement text.
//!
//! Literal tokens carry their decoded payload together with the descriptor
//! (radix and suffix, float width, encoding prefix) the literal was written
//! with. The payload is always consistent with the descriptor.

use std::fmt;

use bitflags::bitflags;

use crate::{CharValue, DataModel, FloatValue, IntRank, IntType, IntValue, Span, StrValue};

/// Base of an integer literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub const fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Prefix as written in source (`0b`, `0`, ``, `0x`).
    pub const fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0",
            Radix::Decimal => "",
            Radix::Hexadecimal => "0x",
        }
    }
}

bitflags! {
    /// Integer literal suffix flags.
    ///
    /// `LONG` and `LONG_LONG` are mutually exclusive.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct IntSuffix: u8 {
        /// `u` / `U`
        const UNSIGNED = 1 << 0;
        /// `l` / `L`
        const LONG = 1 << 1;
        /// `ll` / `LL`
        const LONG_LONG = 1 << 2;
    }
}

impl IntSuffix {
    /// Lowest rank the suffix allows.
    pub fn min_rank(self) -> IntRank {
        if self.contains(IntSuffix::LONG_LONG) {
            IntRank::LongLong
        } else if self.contains(IntSuffix::LONG) {
            IntRank::Long
        } else {
            IntRank::Int
        }
    }
}

/// Decoded integer literal: magnitude plus how it was written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntLiteral {
    pub magnitude: u64,
    pub radix: Radix,
    pub suffix: IntSuffix,
}

impl IntLiteral {
    pub const fn new(magnitude: u64, radix: Radix, suffix: IntSuffix) -> Self {
        IntLiteral {
            magnitude,
            radix,
            suffix,
        }
    }

    /// Type the literal takes under `model`.
    ///
    /// Walks the candidate list for its radix and suffix and picks the first
    /// type that can hold the magnitude. Decimal literals only consider
    /// unsigned types when suffixed with `u`; one that fits no signed
    /// candidate becomes `unsigned long long`.
    pub fn ty(&self, model: DataModel) -> IntType {
        let min_rank = self.suffix.min_rank();
        let unsigned_only = self.suffix.contains(IntSuffix::UNSIGNED);
        let signed_only = self.radix == Radix::Decimal && !unsigned_only;
        let value = i128::from(self.magnitude);

        for rank in [IntRank::Int, IntRank::Long, IntRank::LongLong] {
            if rank < min_rank {
                continue;
            }
            if !unsigned_only {
                let ty = IntType::new(rank, true);
                if ty.can_represent(value, model) {
                    return ty;
                }
            }
            if !signed_only {
                let ty = IntType::new(rank, false);
                if ty.can_represent(value, model) {
                    return ty;
                }
            }
        }
        IntType::ULLONG
    }

    /// The literal as a typed integer constant.
    pub fn to_value(&self, model: DataModel) -> IntValue {
        IntValue::new(i128::from(self.magnitude), self.ty(model), model)
    }
}

/// Operators recognized by the tokenizer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    Pipe,
    Caret,
    Shl,
    Shr,
    Tilde,
    Bang,
}

impl Operator {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Percent => "%",
            Operator::Amp => "&",
            Operator::Pipe => "|",
            Operator::Caret => "^",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
            Operator::Tilde => "~",
            Operator::Bang => "!",
        }
    }
}

/// Punctuation. Parentheses are the only punctuators a constant expression
/// may contain; everything else is kept verbatim and rejected by the parser.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Punct {
    LeftParen,
    RightParen,
    Other(String),
}

impl Punct {
    pub fn as_str(&self) -> &str {
        match self {
            Punct::LeftParen => "(",
            Punct::RightParen => ")",
            Punct::Other(text) => text,
        }
    }
}

/// A token with its span in the replacement text.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a dummy token for tests.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    IntLiteral(IntLiteral),
    FloatLiteral(FloatValue),
    CharLiteral(CharValue),
    StringLiteral(StrValue),
    Identifier(String),
    Operator(Operator),
    Punctuation(Punct),
}

impl TokenKind {
    pub const LEFT_PAREN: TokenKind = TokenKind::Punctuation(Punct::LeftParen);
    pub const RIGHT_PAREN: TokenKind = TokenKind::Punctuation(Punct::RightParen);

    /// Short description for diagnostics ("integer literal", "`<<`").
    pub fn describe(&self) -> String {
        match self {
            TokenKind::IntLiteral(_) => "integer literal".to_owned(),
            TokenKind::FloatLiteral(_) => "floating literal".to_owned(),
            TokenKind::CharLiteral(_) => "character literal".to_owned(),
            TokenKind::StringLiteral(_) => "string literal".to_owned(),
            TokenKind::Identifier(name) => format!("identifier `{name}`"),
            TokenKind::Operator(op) => format!("`{}`", op.as_symbol()),
            TokenKind::Punctuation(p) => format!("`{}`", p.as_str()),
        }
    }

    /// Whether this token is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral(_)
                | TokenKind::FloatLiteral(_)
                | TokenKind::CharLiteral(_)
                | TokenKind::StringLiteral(_)
        )
    }
}

#[cfg(test)]
mod tests;
