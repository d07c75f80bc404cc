//! Integer and floating literals.

use cmacro_ir::{FloatValue, FloatWidth, IntLiteral, Radix, TokenKind};

use super::whole;
use crate::lex_error::{LexError, LexErrorKind};
use crate::parse_helpers::{
    hex_float_value, parse_digits, parse_int_suffix, split_while, DigitError,
};

pub(super) fn recognize_number(text: &str) -> Result<TokenKind, LexError> {
    match text.as_bytes() {
        [b'0', b'x' | b'X', ..] => hexadecimal(text),
        [b'0', b'b' | b'B', ..] => binary(text),
        _ => decimal_or_octal(text),
    }
}

fn decimal_or_octal(text: &str) -> Result<TokenKind, LexError> {
    let (int_digits, rest) = split_while(text, |b| b.is_ascii_digit());

    if int_digits.is_empty() || rest.starts_with(|c| matches!(c, '.' | 'e' | 'E')) {
        return decimal_float(text);
    }
    // `1f` is a float literal, not an integer with an `f` suffix.
    if matches!(rest, "f" | "F") {
        let value = FloatValue::new(parse_float(text, int_digits)?, FloatWidth::Float);
        return Ok(TokenKind::FloatLiteral(value));
    }

    let (radix, digits) = if int_digits.len() > 1 && int_digits.starts_with('0') {
        (Radix::Octal, &int_digits[1..])
    } else {
        (Radix::Decimal, int_digits)
    };
    integer(text, digits, radix, rest)
}

fn hexadecimal(text: &str) -> Result<TokenKind, LexError> {
    let after = &text[2..];
    let (digits, rest) = split_while(after, |b| b.is_ascii_hexdigit());

    if rest.starts_with(|c| matches!(c, '.' | 'p' | 'P')) {
        return hex_float(text, digits, rest);
    }
    if digits.is_empty() {
        return Err(missing_digits(text, rest, 16));
    }
    integer(text, digits, Radix::Hexadecimal, rest)
}

fn binary(text: &str) -> Result<TokenKind, LexError> {
    let after = &text[2..];
    let (digits, rest) = split_while(after, |b| b.is_ascii_digit());
    if digits.is_empty() {
        return Err(missing_digits(text, rest, 2));
    }
    integer(text, digits, Radix::Binary, rest)
}

/// Error for a radix prefix with no digits: `0x` alone, or `0xg`.
fn missing_digits(text: &str, rest: &str, radix: u8) -> LexError {
    let kind = match rest.chars().next() {
        Some(digit) if digit.is_ascii_alphanumeric() => {
            LexErrorKind::InvalidDigitForRadix { digit, radix }
        }
        _ => LexErrorKind::MissingDigits { radix },
    };
    LexError::number(whole(text), kind)
}

fn integer(text: &str, digits: &str, radix: Radix, suffix: &str) -> Result<TokenKind, LexError> {
    let magnitude = parse_digits(digits, radix.value()).map_err(|err| {
        let kind = match err {
            DigitError::Invalid(digit) => LexErrorKind::InvalidDigitForRadix {
                digit,
                radix: u8::try_from(radix.value()).unwrap_or(u8::MAX),
            },
            DigitError::Overflow => LexErrorKind::IntOverflow,
        };
        LexError::number(whole(text), kind)
    })?;
    let suffix = parse_int_suffix(suffix)
        .ok_or_else(|| LexError::invalid_int_suffix(whole(text), suffix))?;
    Ok(TokenKind::IntLiteral(IntLiteral::new(magnitude, radix, suffix)))
}

/// `digits.digits`, `.digits`, `digits.`, `digits e exp`, each with an
/// optional exponent and an optional `f`/`F`/`l`/`L` suffix.
fn decimal_float(text: &str) -> Result<TokenKind, LexError> {
    let (int_digits, rest) = split_while(text, |b| b.is_ascii_digit());
    let (frac_digits, rest) = match rest.strip_prefix('.') {
        Some(after_point) => split_while(after_point, |b| b.is_ascii_digit()),
        None => ("", rest),
    };
    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(LexError::number(
            whole(text),
            LexErrorKind::MissingDigits { radix: 10 },
        ));
    }
    let rest = match rest.strip_prefix(|c| c == 'e' || c == 'E') {
        Some(exponent) => skip_exponent_digits(text, exponent)?,
        None => rest,
    };
    let body = &text[..text.len() - rest.len()];
    let width = float_width(text, rest)?;
    Ok(TokenKind::FloatLiteral(FloatValue::new(
        parse_float(text, body)?,
        width,
    )))
}

/// `0x<hex>.<hex>p<exp>` with an optional suffix.
fn hex_float(text: &str, int_digits: &str, rest: &str) -> Result<TokenKind, LexError> {
    let (frac_digits, rest) = match rest.strip_prefix('.') {
        Some(after_point) => split_while(after_point, |b| b.is_ascii_hexdigit()),
        None => ("", rest),
    };
    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(LexError::number(
            whole(text),
            LexErrorKind::MissingDigits { radix: 16 },
        ));
    }
    let Some(exponent) = rest.strip_prefix(|c| c == 'p' || c == 'P') else {
        return Err(LexError::number(
            whole(text),
            LexErrorKind::MissingBinaryExponent,
        ));
    };
    let suffix = skip_exponent_digits(text, exponent)?;
    let exp_text = &exponent[..exponent.len() - suffix.len()];
    let (negative, exp_digits) = match exp_text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, exp_text.trim_start_matches('+')),
    };
    let magnitude = i64::try_from(parse_digits(exp_digits, 10).unwrap_or(u64::MAX))
        .unwrap_or(i64::MAX);
    let exp = if negative { -magnitude } else { magnitude };

    let width = float_width(text, suffix)?;
    let value = hex_float_value(int_digits, frac_digits, exp);
    Ok(TokenKind::FloatLiteral(FloatValue::new(value, width)))
}

/// Skip `[+-]?digits` after an exponent marker, returning what follows.
fn skip_exponent_digits<'a>(text: &str, exponent: &'a str) -> Result<&'a str, LexError> {
    let unsigned = exponent.strip_prefix(|c| c == '+' || c == '-').unwrap_or(exponent);
    let (digits, rest) = split_while(unsigned, |b| b.is_ascii_digit());
    if digits.is_empty() {
        return Err(LexError::number(whole(text), LexErrorKind::EmptyExponent));
    }
    Ok(rest)
}

fn float_width(text: &str, suffix: &str) -> Result<FloatWidth, LexError> {
    match suffix {
        "" => Ok(FloatWidth::Double),
        "f" | "F" => Ok(FloatWidth::Float),
        "l" | "L" => Ok(FloatWidth::LongDouble),
        _ => Err(LexError::number(
            whole(text),
            LexErrorKind::InvalidFloatSuffix {
                suffix: suffix.to_owned(),
            },
        )),
    }
}

fn parse_float(text: &str, body: &str) -> Result<f64, LexError> {
    body.parse::<f64>().map_err(|_| {
        LexError::number(whole(text), LexErrorKind::MissingDigits { radix: 10 })
    })
}
