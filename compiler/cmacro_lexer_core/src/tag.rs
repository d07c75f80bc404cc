//! Raw token tags.

/// Shape of a raw token.
///
/// Discriminants are grouped by category so range checks stay cheap:
/// literals and identifiers 0-15, operators 32-47, punctuation 80-95,
/// trivia 112-127, errors 240-254, control 255.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals ===
    /// `[A-Za-z_][A-Za-z0-9_]*`
    Ident = 0,
    /// Preprocessing number: starts with a digit or `.digit`
    Number = 1,
    /// Character literal, including any encoding prefix
    Char = 2,
    /// String literal, including any encoding prefix
    String = 3,

    // === Operators ===
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Percent = 36,
    Amp = 37,
    Pipe = 38,
    Caret = 39,
    Shl = 40,
    Shr = 41,
    Tilde = 42,
    Bang = 43,

    // === Punctuation ===
    LeftParen = 80,
    RightParen = 81,
    /// Any other C punctuator (`&&`, `==`, `?`, `,`, `<<=`, `##`, ...)
    OtherPunct = 82,

    // === Trivia ===
    /// Spaces, tabs, form feeds, vertical tabs, carriage returns and
    /// backslash-newline continuations
    Whitespace = 112,
    Newline = 113,
    LineComment = 114,
    BlockComment = 115,

    // === Errors ===
    /// A byte that begins no C token (`@`, `$`, a backtick, stray `\`,
    /// control characters, non-ASCII outside literals)
    InvalidByte = 240,
    UnterminatedString = 241,
    UnterminatedChar = 242,
    UnterminatedComment = 243,
    InteriorNull = 244,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// Fixed text of tags that always have the same spelling.
    pub fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            RawTag::Plus => "+",
            RawTag::Minus => "-",
            RawTag::Star => "*",
            RawTag::Slash => "/",
            RawTag::Percent => "%",
            RawTag::Amp => "&",
            RawTag::Pipe => "|",
            RawTag::Caret => "^",
            RawTag::Shl => "<<",
            RawTag::Shr => ">>",
            RawTag::Tilde => "~",
            RawTag::Bang => "!",
            RawTag::LeftParen => "(",
            RawTag::RightParen => ")",
            _ => return None,
        })
    }

    /// Whitespace and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        (self as u8) >= 112 && (self as u8) < 128
    }

    #[inline]
    pub fn is_error(self) -> bool {
        (self as u8) >= 240 && self != RawTag::Eof
    }

    /// Human-readable name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            RawTag::Ident => "identifier",
            RawTag::Number => "number",
            RawTag::Char => "character literal",
            RawTag::String => "string literal",
            RawTag::Plus
            | RawTag::Minus
            | RawTag::Star
            | RawTag::Slash
            | RawTag::Percent
            | RawTag::Amp
            | RawTag::Pipe
            | RawTag::Caret
            | RawTag::Shl
            | RawTag::Shr
            | RawTag::Tilde
            | RawTag::Bang => "operator",
            RawTag::LeftParen | RawTag::RightParen | RawTag::OtherPunct => "punctuation",
            RawTag::Whitespace => "whitespace",
            RawTag::Newline => "newline",
            RawTag::LineComment => "line comment",
            RawTag::BlockComment => "block comment",
            RawTag::InvalidByte => "invalid byte",
            RawTag::UnterminatedString => "unterminated string literal",
            RawTag::UnterminatedChar => "unterminated character literal",
            RawTag::UnterminatedComment => "unterminated block comment",
            RawTag::InteriorNull => "null byte",
            RawTag::Eof => "end of input",
        }
    }
}

/// A raw token: tag plus byte length. Position is implied by the running
/// sum of lengths.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);

#[cfg(test)]
mod tests;
