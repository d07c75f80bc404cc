//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns a [`RawToken`]. The sentinel byte
//! (`0x00`) dispatches to `eof()`.
//!
//! Numbers are scanned as C preprocessing numbers: a digit (or `.` and a
//! digit) followed by any run of identifier bytes, `.`, and a sign directly
//! after `e`, `E`, `p` or `P`. The whole run is one token, so `0b2` or
//! `126LuL` reach the literal recognizer intact.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Scanner over one replacement text. Allocation-free.
///
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        RawScanner { cursor }
    }

    /// Source text covered by `start..end`.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.cursor.slice(start, end)
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the text is exhausted, and
    /// keeps returning it on further calls.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(),
            b' ' | b'\t' | b'\r' | b'\x0b' | b'\x0c' => self.whitespace(start),
            b'\n' => self.single(start, RawTag::Newline),
            b'\\' => self.backslash(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'.' => self.dot(start),
            b'"' => self.quoted(start, b'"'),
            b'\'' => self.quoted(start, b'\''),
            b'/' => self.slash_or_comment(start),
            b'+' => self.op_or_punct(start, RawTag::Plus, b"+="),
            b'-' => self.op_or_punct(start, RawTag::Minus, b"-=>"),
            b'*' => self.op_or_punct(start, RawTag::Star, b"="),
            b'%' => self.op_or_punct(start, RawTag::Percent, b"=>:"),
            b'&' => self.op_or_punct(start, RawTag::Amp, b"&="),
            b'|' => self.op_or_punct(start, RawTag::Pipe, b"|="),
            b'^' => self.op_or_punct(start, RawTag::Caret, b"="),
            b'!' => self.op_or_punct(start, RawTag::Bang, b"="),
            b'~' => self.single(start, RawTag::Tilde),
            b'<' => self.angle(start, b'<', RawTag::Shl),
            b'>' => self.angle(start, b'>', RawTag::Shr),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'=' => self.punct_pair(start, b'='),
            b'#' => self.punct_pair(start, b'#'),
            b'?' | b':' | b',' | b';' | b'[' | b']' | b'{' | b'}' => {
                self.single(start, RawTag::OtherPunct)
            }
            // Control characters, `@`, `$`, backtick, DEL and non-ASCII bytes
            1..=8 | 14..=31 | b'@' | b'$' | b'`' | 127..=255 => self.invalid_byte(start),
        }
    }

    #[inline]
    fn token(&self, tag: RawTag, start: u32) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // --- EOF ---

    fn eof(&mut self) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            let start = self.cursor.pos();
            self.cursor.advance();
            self.token(RawTag::InteriorNull, start)
        }
    }

    // --- Whitespace ---

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(RawTag::Whitespace, start)
    }

    /// `\` followed by a newline is a line continuation; any other `\`
    /// outside a literal begins no token.
    fn backslash(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'\n', _) => {
                self.cursor.advance_n(2);
                self.token(RawTag::Whitespace, start)
            }
            (b'\r', b'\n') => {
                self.cursor.advance_n(3);
                self.token(RawTag::Whitespace, start)
            }
            _ => self.invalid_byte(start),
        }
    }

    // --- Comments ---

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.advance_n(2);
                self.cursor.eat_until_newline_or_eof();
                self.token(RawTag::LineComment, start)
            }
            b'*' => {
                self.cursor.advance_n(2);
                if self.cursor.eat_block_comment_body() {
                    self.token(RawTag::BlockComment, start)
                } else {
                    self.token(RawTag::UnterminatedComment, start)
                }
            }
            b'=' => {
                self.cursor.advance_n(2);
                self.token(RawTag::OtherPunct, start)
            }
            _ => self.single(start, RawTag::Slash),
        }
    }

    // --- Identifiers & prefixed literals ---

    fn identifier(&mut self, start: u32) -> RawToken {
        match (
            self.cursor.current(),
            self.cursor.peek(),
            self.cursor.peek2(),
        ) {
            (b'L' | b'U' | b'u', quote @ (b'"' | b'\''), _) => {
                self.cursor.advance();
                return self.quoted(start, quote);
            }
            (b'u', b'8', quote @ (b'"' | b'\'')) => {
                self.cursor.advance_n(2);
                return self.quoted(start, quote);
            }
            _ => {}
        }
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        self.token(RawTag::Ident, start)
    }

    // --- Numbers ---

    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        loop {
            match self.cursor.current() {
                b'e' | b'E' | b'p' | b'P' if matches!(self.cursor.peek(), b'+' | b'-') => {
                    self.cursor.advance_n(2);
                }
                b if is_ident_continue(b) || b == b'.' => self.cursor.advance(),
                _ => break,
            }
        }
        self.token(RawTag::Number, start)
    }

    fn dot(&mut self, start: u32) -> RawToken {
        if self.cursor.peek().is_ascii_digit() {
            return self.number(start);
        }
        if self.cursor.peek() == b'.' && self.cursor.peek2() == b'.' {
            self.cursor.advance_n(3);
            return self.token(RawTag::OtherPunct, start);
        }
        self.single(start, RawTag::OtherPunct)
    }

    // --- Character & string literals ---

    /// Scan a quoted literal. The cursor is on the opening quote; any prefix
    /// has already been consumed.
    fn quoted(&mut self, start: u32, quote: u8) -> RawToken {
        let (closed, unterminated) = if quote == b'"' {
            (RawTag::String, RawTag::UnterminatedString)
        } else {
            (RawTag::Char, RawTag::UnterminatedChar)
        };
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_quote_delim(quote) {
                b'\\' => {
                    self.cursor.advance();
                    if self.cursor.is_eof() {
                        return self.token(unterminated, start);
                    }
                    if self.cursor.current() == b'\r' && self.cursor.peek() == b'\n' {
                        self.cursor.advance();
                    }
                    self.cursor.advance_char();
                }
                b'\n' | b'\r' | 0 => return self.token(unterminated, start),
                _ => {
                    self.cursor.advance();
                    return self.token(closed, start);
                }
            }
        }
    }

    // --- Operators & punctuation ---

    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(tag, start)
    }

    /// One-byte operator `tag`, unless the next byte is in `extenders`, in
    /// which case the pair is some other punctuator (`+=`, `&&`, `->`, `!=`).
    fn op_or_punct(&mut self, start: u32, tag: RawTag, extenders: &[u8]) -> RawToken {
        if extenders.contains(&self.cursor.peek()) {
            self.cursor.advance_n(2);
            return self.token(RawTag::OtherPunct, start);
        }
        self.single(start, tag)
    }

    /// `<`/`>` family: `<<`, `>>` are operators; `<<=`, `>>=`, `<=`, `>=`,
    /// `<`, `>` (and the `<:`, `<%` digraphs) are other punctuators.
    fn angle(&mut self, start: u32, byte: u8, shift: RawTag) -> RawToken {
        let next = self.cursor.peek();
        if next == byte {
            if self.cursor.peek2() == b'=' {
                self.cursor.advance_n(3);
                return self.token(RawTag::OtherPunct, start);
            }
            self.cursor.advance_n(2);
            return self.token(shift, start);
        }
        if next == b'=' || (byte == b'<' && matches!(next, b':' | b'%')) {
            self.cursor.advance_n(2);
            return self.token(RawTag::OtherPunct, start);
        }
        self.single(start, RawTag::OtherPunct)
    }

    /// `==`, `##`, or the single `=` / `#`.
    fn punct_pair(&mut self, start: u32, byte: u8) -> RawToken {
        if self.cursor.peek() == byte {
            self.cursor.advance_n(2);
            return self.token(RawTag::OtherPunct, start);
        }
        self.single(start, RawTag::OtherPunct)
    }

    // --- Error tokens ---

    fn invalid_byte(&mut self, start: u32) -> RawToken {
        // Whole characters, so spans stay on UTF-8 boundaries.
        self.cursor.advance_char();
        self.token(RawTag::InvalidByte, start)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore; the sentinel maps to `false`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Scan `source` and collect every raw token except the final `Eof`.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}

#[cfg(test)]
mod tests;
