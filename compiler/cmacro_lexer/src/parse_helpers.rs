//! Numeric parsing helpers.
//!
//! Zero-allocation utilities shared by the number recognizer.

use cmacro_ir::IntSuffix;

/// Why a digit run failed to parse.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum DigitError {
    /// A character outside the radix alphabet.
    Invalid(char),
    /// The value does not fit in `u64`.
    Overflow,
}

/// Parse a run of digits in `radix` with overflow checking.
#[inline]
pub(crate) fn parse_digits(digits: &str, radix: u32) -> Result<u64, DigitError> {
    let mut result: u64 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(radix).ok_or(DigitError::Invalid(c))?;
        result = result
            .checked_mul(u64::from(radix))
            .and_then(|r| r.checked_add(u64::from(digit)))
            .ok_or(DigitError::Overflow)?;
    }
    Ok(result)
}

/// Split `s` after its longest prefix whose bytes satisfy `pred`.
#[inline]
pub(crate) fn split_while(s: &str, pred: impl Fn(u8) -> bool) -> (&str, &str) {
    let end = s.bytes().position(|b| !pred(b)).unwrap_or(s.len());
    s.split_at(end)
}

/// Map an integer suffix to its flags.
///
/// Accepts exactly the spellings C allows: at most one `u`/`U` and at most
/// one `l`/`L`/`ll`/`LL` in either order. Mixed-case `lL`, repeated `u`, and
/// split long markers (`LuL`) are rejected.
pub(crate) fn parse_int_suffix(suffix: &str) -> Option<IntSuffix> {
    let (unsigned, rest) = match suffix.as_bytes().first() {
        Some(b'u' | b'U') => (true, &suffix[1..]),
        _ => (false, suffix),
    };
    let (long, rest) = if let Some(r) = rest
        .strip_prefix("ll")
        .or_else(|| rest.strip_prefix("LL"))
    {
        (IntSuffix::LONG_LONG, r)
    } else if let Some(r) = rest.strip_prefix(|c| c == 'l' || c == 'L') {
        (IntSuffix::LONG, r)
    } else {
        (IntSuffix::empty(), rest)
    };
    let trailing_unsigned = match rest {
        "" => false,
        "u" | "U" if !unsigned && !long.is_empty() => true,
        _ => return None,
    };

    let mut flags = long;
    if unsigned || trailing_unsigned {
        flags |= IntSuffix::UNSIGNED;
    }
    Some(flags)
}

/// Exponents beyond this magnitude give `0.0` or infinity for any `u64`
/// mantissa, so the digit loop never has to count past it.
const HEX_FLOAT_EXP_LIMIT: i64 = 2_200;

/// Value of a hexadecimal floating literal `0x<int>.<frac>p<exp>`.
///
/// Digits beyond what a `u64` mantissa holds only shift the exponent. Out of
/// range exponents round to `0.0` or infinity.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "mantissa rounding to f64 is the literal's defined rounding; the exponent is clamped"
)]
pub(crate) fn hex_float_value(int_digits: &str, frac_digits: &str, exponent: i64) -> f64 {
    let mut mantissa: u64 = 0;
    let mut exp = exponent.clamp(-HEX_FLOAT_EXP_LIMIT, HEX_FLOAT_EXP_LIMIT);
    let mut saturated = false;
    for (i, c) in int_digits.chars().chain(frac_digits.chars()).enumerate() {
        let digit = u64::from(c.to_digit(16).unwrap_or(0));
        let is_frac = i >= int_digits.len();
        if !saturated && mantissa >> 60 == 0 {
            mantissa = (mantissa << 4) | digit;
            if is_frac {
                exp = exp.saturating_sub(4);
            }
        } else {
            saturated = true;
            if !is_frac {
                exp = exp.saturating_add(4);
            }
        }
    }
    if mantissa == 0 {
        return 0.0;
    }
    // Two steps so a subnormal result is not flushed by an out-of-range power.
    let exp = exp.clamp(-2 * HEX_FLOAT_EXP_LIMIT, 2 * HEX_FLOAT_EXP_LIMIT) as i32;
    let half = exp / 2;
    (mantissa as f64) * 2f64.powi(half) * 2f64.powi(exp - half)
}

#[cfg(test)]
mod tests;
