//! Expression tree for a macro replacement text.
//!
//! Built by the parser and consumed once by the evaluator. Every node owns
//! its children; there is no sharing between trees.

use crate::{CharValue, ConstantValue, DataModel, FloatValue, IntLiteral, Operator, Span, StrValue};

/// Binary operators, lowest precedence first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    BitOr,
    BitXor,
    BitAnd,
    Shl,
    Shr,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::BitAnd => "&",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
        }
    }

    /// Binding power; higher binds tighter. All tiers are left-associative.
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::BitOr => 1,
            BinaryOp::BitXor => 2,
            BinaryOp::BitAnd => 3,
            BinaryOp::Shl | BinaryOp::Shr => 4,
            BinaryOp::Add | BinaryOp::Sub => 5,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 6,
        }
    }

    /// Operators that only accept integer operands.
    pub const fn is_integer_only(self) -> bool {
        matches!(
            self,
            BinaryOp::BitOr
                | BinaryOp::BitXor
                | BinaryOp::BitAnd
                | BinaryOp::Shl
                | BinaryOp::Shr
                | BinaryOp::Mod
        )
    }

    /// The binary operator spelled by `op`, if any.
    pub const fn from_operator(op: Operator) -> Option<Self> {
        Some(match op {
            Operator::Pipe => BinaryOp::BitOr,
            Operator::Caret => BinaryOp::BitXor,
            Operator::Amp => BinaryOp::BitAnd,
            Operator::Shl => BinaryOp::Shl,
            Operator::Shr => BinaryOp::Shr,
            Operator::Plus => BinaryOp::Add,
            Operator::Minus => BinaryOp::Sub,
            Operator::Star => BinaryOp::Mul,
            Operator::Slash => BinaryOp::Div,
            Operator::Percent => BinaryOp::Mod,
            Operator::Tilde | Operator::Bang => return None,
        })
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `+x`
    Plus,
    /// `!x`
    Not,
    /// `~x`
    BitNot,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Plus => "+",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
        }
    }

    pub const fn from_operator(op: Operator) -> Option<Self> {
        match op {
            Operator::Minus => Some(UnaryOp::Neg),
            Operator::Plus => Some(UnaryOp::Plus),
            Operator::Bang => Some(UnaryOp::Not),
            Operator::Tilde => Some(UnaryOp::BitNot),
            _ => None,
        }
    }
}

/// A literal operand. Integers keep their descriptor so the type can be
/// chosen under the evaluator's data model.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Literal {
    Int(IntLiteral),
    Float(FloatValue),
    Char(CharValue),
    Str(StrValue),
}

impl Literal {
    pub fn to_value(&self, model: DataModel) -> ConstantValue {
        match self {
            Literal::Int(lit) => ConstantValue::Int(lit.to_value(model)),
            Literal::Float(f) => ConstantValue::Float(*f),
            Literal::Char(c) => ConstantValue::Char(*c),
            Literal::Str(s) => ConstantValue::Str(s.clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Literal(Literal),
    /// Reference to another macro by name.
    Reference(String),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Paren(Box<Expr>),
    /// Juxtaposed operands (`"a" NAME ("b")`), at least two.
    Concat(Vec<Expr>),
}

impl ExprKind {
    /// Node name for trace output.
    pub const fn name(&self) -> &'static str {
        match self {
            ExprKind::Literal(_) => "literal",
            ExprKind::Reference(_) => "reference",
            ExprKind::Unary { .. } => "unary",
            ExprKind::Binary { .. } => "binary",
            ExprKind::Paren(_) => "paren",
            ExprKind::Concat(_) => "concat",
        }
    }
}
