//! Character and string literals.

use cmacro_ir::{CharCode, CharValue, Encoding, StrValue, TokenKind};

use super::{span, whole};
use crate::escape::cook_escape;
use crate::lex_error::{LexError, LexErrorKind};

#[derive(Copy, Clone, PartialEq, Eq)]
enum Quote {
    Char,
    Str,
}

impl Quote {
    fn byte(self) -> u8 {
        match self {
            Quote::Char => b'\'',
            Quote::Str => b'"',
        }
    }

    #[cold]
    fn error(self, start: usize, end: usize, kind: LexErrorKind) -> LexError {
        match self {
            Quote::Char => LexError::char_literal(span(start, end), kind),
            Quote::Str => LexError::string_literal(span(start, end), kind),
        }
    }

    #[cold]
    fn unterminated(self, text: &str) -> LexError {
        match self {
            Quote::Char => LexError::unterminated_char(whole(text)),
            Quote::Str => LexError::unterminated_string(whole(text)),
        }
    }
}

pub(super) fn recognize_quoted(text: &str) -> Result<TokenKind, LexError> {
    let Some(open) = text.find(|c| c == '\'' || c == '"') else {
        return Err(LexError::string_literal(
            whole(text),
            LexErrorKind::InvalidPrefix {
                prefix: text.to_owned(),
            },
        ));
    };
    let quote = if text.as_bytes()[open] == b'\'' {
        Quote::Char
    } else {
        Quote::Str
    };

    let prefix = &text[..open];
    let encoding = match Encoding::from_prefix(prefix) {
        Some(Encoding::Utf8) if quote == Quote::Char => None,
        other => other,
    };
    let Some(encoding) = encoding else {
        return Err(quote.error(
            0,
            open,
            LexErrorKind::InvalidPrefix {
                prefix: prefix.to_owned(),
            },
        ));
    };

    let body_start = open + 1;
    if text.len() <= body_start || text.as_bytes()[text.len() - 1] != quote.byte() {
        return Err(quote.unterminated(text));
    }
    let body = &text[body_start..text.len() - 1];
    let chars = decode_body(text, body, body_start, encoding, quote)?;

    match quote {
        Quote::Str => Ok(TokenKind::StringLiteral(StrValue::new(encoding, chars))),
        // A narrow source character outside ASCII is several UTF-8 bytes.
        Quote::Char if encoding == Encoding::Narrow && !body.is_ascii() => Err(
            LexError::char_literal(whole(text), LexErrorKind::MultiCharLiteral),
        ),
        Quote::Char => char_value(text, chars, encoding).map(TokenKind::CharLiteral),
    }
}

/// Decode the characters between the quotes.
///
/// `offset` is the byte position of `body` within `text`, for error spans.
fn decode_body(
    text: &str,
    body: &str,
    offset: usize,
    encoding: Encoding,
    quote: Quote,
) -> Result<Vec<CharCode>, LexError> {
    let mut chars = Vec::with_capacity(body.len());
    let mut pos = 0;

    while pos < body.len() {
        let rest = &body[pos..];
        let Some(c) = rest.chars().next() else {
            break;
        };
        match c {
            '\\' => {
                let after = &rest[1..];
                // Line continuation inside the literal.
                if let Some(skip) = continuation_len(after) {
                    pos += 1 + skip;
                    continue;
                }
                if after.is_empty() {
                    return Err(quote.unterminated(text));
                }
                let esc = cook_escape(after, encoding).map_err(|kind| {
                    let next = after.chars().next().map_or(0, char::len_utf8);
                    quote.error(offset + pos, offset + pos + 1 + next, kind)
                })?;
                chars.push(esc.code);
                pos += 1 + esc.len;
            }
            '\n' | '\r' => return Err(quote.unterminated(text)),
            _ if u32::from(c) == u32::from(quote.byte()) => {
                return Err(quote.unterminated(text));
            }
            _ => {
                chars.push(CharCode::Scalar(c));
                pos += c.len_utf8();
            }
        }
    }
    Ok(chars)
}

fn continuation_len(after_backslash: &str) -> Option<usize> {
    if after_backslash.starts_with("\r\n") {
        Some(2)
    } else if after_backslash.starts_with('\n') {
        Some(1)
    } else {
        None
    }
}

fn char_value(
    text: &str,
    chars: Vec<CharCode>,
    encoding: Encoding,
) -> Result<CharValue, LexError> {
    let code = match chars.as_slice() {
        [] => {
            return Err(LexError::char_literal(
                whole(text),
                LexErrorKind::EmptyCharLiteral,
            ))
        }
        [code] => *code,
        _ => {
            return Err(LexError::char_literal(
                whole(text),
                LexErrorKind::MultiCharLiteral,
            ))
        }
    };
    if let (Encoding::Utf16, CharCode::Scalar(ch)) = (encoding, code) {
        if u32::from(ch) > 0xFFFF {
            return Err(LexError::char_literal(
                whole(text),
                LexErrorKind::CharTooWide { ch },
            ));
        }
    }
    Ok(CharValue::new(code, encoding))
}
