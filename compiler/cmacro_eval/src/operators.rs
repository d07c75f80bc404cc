//! Binary and unary operator implementations.
//!
//! Direct enum dispatch over the operand kinds. Operands are promoted first
//! (see [`crate::promotion`]); integer results wrap into the result type.

use cmacro_ir::{
    BinaryOp, ConstantValue, DataModel, FloatValue, FloatWidth, IntValue, Span, UnaryOp,
};

use crate::eval_error::{binary_type_mismatch, division_by_zero, unary_type_mismatch, EvalError};
use crate::promotion::{common_float_width, common_int_type, promote};

/// Evaluate `left op right`.
pub fn evaluate_binary(
    op: BinaryOp,
    left: &ConstantValue,
    right: &ConstantValue,
    span: Span,
    model: DataModel,
) -> Result<ConstantValue, EvalError> {
    let mismatch = || {
        binary_type_mismatch(
            op.as_symbol(),
            left.kind().name(),
            right.kind().name(),
            span,
        )
    };

    match (left, right) {
        (ConstantValue::Int(a), ConstantValue::Int(b)) => {
            eval_int_binary(op, *a, *b, span, model).map(ConstantValue::Int)
        }
        _ if promote(left.kind(), right.kind()).is_some() => {
            let (Some(x), Some(y)) = (float_operand(left), float_operand(right)) else {
                return Err(mismatch());
            };
            eval_float_binary(op, x, y)
                .map(ConstantValue::Float)
                .ok_or_else(mismatch)
        }
        _ => Err(mismatch()),
    }
}

/// Integer operation in the common type; shifts keep the left type.
fn eval_int_binary(
    op: BinaryOp,
    a: IntValue,
    b: IntValue,
    span: Span,
    model: DataModel,
) -> Result<IntValue, EvalError> {
    let ty = match op {
        BinaryOp::Shl | BinaryOp::Shr => a.ty(),
        _ => common_int_type(a.ty(), b.ty(), model),
    };
    let x = ty.wrap(a.value(), model);
    let y = ty.wrap(b.value(), model);

    let value = match op {
        BinaryOp::Add => x.wrapping_add(y),
        BinaryOp::Sub => x.wrapping_sub(y),
        BinaryOp::Mul => x.wrapping_mul(y),
        BinaryOp::Div if y == 0 => return Err(division_by_zero("division", span)),
        BinaryOp::Div => x / y,
        BinaryOp::Mod if y == 0 => return Err(division_by_zero("remainder", span)),
        BinaryOp::Mod => x % y,
        BinaryOp::BitAnd => x & y,
        BinaryOp::BitOr => x | y,
        BinaryOp::BitXor => x ^ y,
        BinaryOp::Shl => x << shift_count(b.value(), ty.bits(model)),
        BinaryOp::Shr => x >> shift_count(b.value(), ty.bits(model)),
    };
    Ok(IntValue::new(value, ty, model))
}

/// Shift count reduced modulo the width of the shifted type.
fn shift_count(count: i128, bits: u32) -> u32 {
    let reduced = count.rem_euclid(i128::from(bits));
    u32::try_from(reduced).unwrap_or(0)
}

/// A float operand and its width. Integer operands carry no width.
#[allow(
    clippy::cast_precision_loss,
    reason = "converting an integer operand to floating point is the C conversion"
)]
fn float_operand(value: &ConstantValue) -> Option<(f64, Option<FloatWidth>)> {
    match value {
        ConstantValue::Int(i) => Some((i.value() as f64, None)),
        ConstantValue::Float(f) => Some((f.value(), Some(f.width()))),
        ConstantValue::Char(_) | ConstantValue::Str(_) => None,
    }
}

/// Floating operation; `None` for operators that need integers.
fn eval_float_binary(
    op: BinaryOp,
    (x, x_width): (f64, Option<FloatWidth>),
    (y, y_width): (f64, Option<FloatWidth>),
) -> Option<FloatValue> {
    let width = match (x_width, y_width) {
        (Some(a), Some(b)) => common_float_width(a, b),
        (Some(w), None) | (None, Some(w)) => w,
        (None, None) => FloatWidth::Double,
    };
    let value = match op {
        BinaryOp::Add => x + y,
        BinaryOp::Sub => x - y,
        BinaryOp::Mul => x * y,
        BinaryOp::Div => x / y,
        BinaryOp::Mod
        | BinaryOp::BitAnd
        | BinaryOp::BitOr
        | BinaryOp::BitXor
        | BinaryOp::Shl
        | BinaryOp::Shr => return None,
    };
    Some(FloatValue::new(value, width))
}

/// Evaluate `op operand`.
pub fn evaluate_unary(
    op: UnaryOp,
    operand: &ConstantValue,
    span: Span,
    model: DataModel,
) -> Result<ConstantValue, EvalError> {
    let mismatch = || unary_type_mismatch(op.as_symbol(), operand.kind().name(), span);

    match operand {
        ConstantValue::Int(i) => Ok(ConstantValue::Int(eval_int_unary(op, *i, model))),
        ConstantValue::Float(f) => match op {
            UnaryOp::Neg => Ok(ConstantValue::Float(FloatValue::new(-f.value(), f.width()))),
            UnaryOp::Plus => Ok(ConstantValue::Float(*f)),
            UnaryOp::Not => Ok(ConstantValue::Int(IntValue::int(i32::from(
                f.value() == 0.0,
            )))),
            UnaryOp::BitNot => Err(mismatch()),
        },
        ConstantValue::Char(_) | ConstantValue::Str(_) => Err(mismatch()),
    }
}

fn eval_int_unary(op: UnaryOp, operand: IntValue, model: DataModel) -> IntValue {
    let ty = operand.ty();
    match op {
        UnaryOp::Neg => IntValue::new(-operand.value(), ty, model),
        UnaryOp::Plus => operand,
        UnaryOp::Not => IntValue::int(i32::from(operand.is_zero())),
        UnaryOp::BitNot => IntValue::new(!operand.value(), ty, model),
    }
}
