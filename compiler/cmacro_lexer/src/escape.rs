//! Escape sequence decoding for character and string literals.
//!
//! Handles the full C escape set:
//! - simple escapes `\' \" \? \\ \a \b \f \n \r \t \v`
//! - octal `\o`, `\oo`, `\ooo`
//! - hexadecimal `\x` followed by one or more hex digits
//! - universal character names `\uXXXX` and `\UXXXXXXXX`
//!
//! Numeric escapes name a code unit and are checked against the literal's
//! encoding. Universal character names name a code point and must be a
//! Unicode scalar value.

use cmacro_ir::{CharCode, Encoding};

use crate::lex_error::LexErrorKind;

/// A decoded escape and the number of bytes it occupied after the `\`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Escape {
    pub code: CharCode,
    pub len: usize,
}

#[inline]
fn resolve_simple_escape(c: u8) -> Option<char> {
    Some(match c {
        b'\'' => '\'',
        b'"' => '"',
        b'?' => '?',
        b'\\' => '\\',
        b'a' => '\x07',
        b'b' => '\x08',
        b'f' => '\x0c',
        b'n' => '\n',
        b'r' => '\r',
        b't' => '\t',
        b'v' => '\x0b',
        _ => return None,
    })
}

/// Decode the escape at the start of `rest` (the text just after a `\`).
pub(crate) fn cook_escape(rest: &str, encoding: Encoding) -> Result<Escape, LexErrorKind> {
    let bytes = rest.as_bytes();
    let Some(&first) = bytes.first() else {
        return Err(LexErrorKind::InvalidEscape { escape_char: '\\' });
    };

    if let Some(c) = resolve_simple_escape(first) {
        return Ok(Escape {
            code: CharCode::Scalar(c),
            len: 1,
        });
    }

    match first {
        b'0'..=b'7' => {
            let len = bytes
                .iter()
                .take(3)
                .take_while(|b| matches!(b, b'0'..=b'7'))
                .count();
            let value = u32::from_str_radix(&rest[..len], 8)
                .map_err(|_| LexErrorKind::EscapeOutOfRange {
                    max: encoding.max_code_unit(),
                })?;
            numeric(value, len, encoding)
        }
        b'x' => {
            let digits = bytes[1..].iter().take_while(|b| b.is_ascii_hexdigit()).count();
            if digits == 0 {
                return Err(LexErrorKind::MissingHexDigits);
            }
            let max = encoding.max_code_unit();
            let value = u32::from_str_radix(&rest[1..=digits], 16)
                .map_err(|_| LexErrorKind::EscapeOutOfRange { max })?;
            numeric(value, 1 + digits, encoding)
        }
        b'u' => universal(rest, 4),
        b'U' => universal(rest, 8),
        _ => {
            let escape_char = rest.chars().next().unwrap_or('\\');
            Err(LexErrorKind::InvalidEscape { escape_char })
        }
    }
}

/// An octal or hex escape naming one code unit.
fn numeric(value: u32, len: usize, encoding: Encoding) -> Result<Escape, LexErrorKind> {
    let max = encoding.max_code_unit();
    if value > max {
        return Err(LexErrorKind::EscapeOutOfRange { max });
    }
    Ok(Escape {
        code: CharCode::from_numeric_escape(value),
        len,
    })
}

/// `\u` or `\U` followed by exactly `width` hex digits.
fn universal(rest: &str, width: u8) -> Result<Escape, LexErrorKind> {
    let width_bytes = usize::from(width);
    let digits = rest.as_bytes()[1..]
        .iter()
        .take(width_bytes)
        .take_while(|b| b.is_ascii_hexdigit())
        .count();
    if digits < width_bytes {
        return Err(LexErrorKind::IncompleteUniversalChar { expected: width });
    }
    let value = u32::from_str_radix(&rest[1..=width_bytes], 16)
        .map_err(|_| LexErrorKind::IncompleteUniversalChar { expected: width })?;
    let ch = char::from_u32(value).ok_or(LexErrorKind::InvalidUniversalChar { value })?;
    Ok(Escape {
        code: CharCode::Scalar(ch),
        len: 1 + width_bytes,
    })
}
