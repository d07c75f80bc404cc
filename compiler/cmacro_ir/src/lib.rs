//! cmacro IR - shared data types for C macro constant evaluation
//!
//! This crate contains the data structures every other `cmacro_*` crate
//! speaks in:
//! - Spans for locations inside a macro's replacement text
//! - Tokens with decoded literal payloads and suffix/encoding descriptors
//! - `ConstantValue`, the only successful evaluation output
//! - The transient expression tree built by the parser
//!
//! # Design Philosophy
//!
//! - **Decode once**: literal tokens carry their decoded payload, so later
//!   stages never look at literal text again.
//! - **Encode late**: strings keep their decoded characters and produce code
//!   units on demand, so concatenation can change the encoding of an
//!   unprefixed operand without losing information.
//!
//! Types that contain floats store them as u64 bits for `Eq`/`Hash`
//! compatibility; evaluating the same input twice compares bit-identical.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;
mod value;

pub use ast::{BinaryOp, Expr, ExprKind, Literal, UnaryOp};
pub use span::{Span, SpanError};
pub use token::{IntLiteral, IntSuffix, Operator, Punct, Radix, Token, TokenKind};
pub use value::{
    CharCode, CharValue, ConstantValue, DataModel, Encoding, FloatValue, FloatWidth, IntRank,
    IntType, IntValue, StrValue, ValueKind,
};
