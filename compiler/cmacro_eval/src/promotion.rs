//! Operand promotion.
//!
//! The implicit C conversions, written out as functions: [`promote`] picks
//! the kind a binary operation is carried out in, [`common_int_type`] and
//! [`common_float_width`] pick the exact type within that kind.

use cmacro_ir::{DataModel, FloatWidth, IntType, ValueKind};

/// Kind a binary arithmetic operation on `left` and `right` produces.
///
/// `None` when the pair has no arithmetic meaning (any character or string
/// operand).
pub const fn promote(left: ValueKind, right: ValueKind) -> Option<ValueKind> {
    match (left, right) {
        (ValueKind::Int, ValueKind::Int) => Some(ValueKind::Int),
        (ValueKind::Int | ValueKind::Float, ValueKind::Int | ValueKind::Float) => {
            Some(ValueKind::Float)
        }
        _ => None,
    }
}

/// The usual arithmetic conversions for two integer types.
///
/// Every type here already has at least `int` rank, so integer promotion
/// leaves them unchanged.
pub fn common_int_type(a: IntType, b: IntType, model: DataModel) -> IntType {
    if a.signed == b.signed {
        return if a.rank >= b.rank { a } else { b };
    }
    let (signed, unsigned) = if a.signed { (a, b) } else { (b, a) };

    if unsigned.rank >= signed.rank {
        unsigned
    } else if signed.bits(model) > unsigned.bits(model) {
        signed
    } else {
        signed.to_unsigned()
    }
}

/// Width of a mixed float operation: the wider of the two.
#[inline]
pub fn common_float_width(a: FloatWidth, b: FloatWidth) -> FloatWidth {
    a.max(b)
}
