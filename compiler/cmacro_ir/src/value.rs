//! Constant values produced by macro evaluation.
//!
//! `ConstantValue` is the evaluator's only successful output. Integer values
//! carry their full C type (rank and signedness), floats their width class,
//! and characters and strings their encoding prefix.

use std::fmt;

// Encodings

/// Encoding prefix of a character or string literal.
///
/// Fixed once a value is produced; concatenation may pick a prefixed encoding
/// for the *result*, but never rewrites the encoding of an existing value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// No prefix: `"..."`, `'...'`.
    #[default]
    Narrow,
    /// `L` prefix (`wchar_t`, 32-bit code units).
    Wide,
    /// `u` prefix (`char16_t`, UTF-16 code units).
    Utf16,
    /// `U` prefix (`char32_t`, UTF-32 code units).
    Utf32,
    /// `u8` prefix (UTF-8 code units).
    Utf8,
}

impl Encoding {
    /// Parse a literal prefix (`""`, `"L"`, `"u"`, `"U"`, `"u8"`).
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "" => Some(Encoding::Narrow),
            "L" => Some(Encoding::Wide),
            "u" => Some(Encoding::Utf16),
            "U" => Some(Encoding::Utf32),
            "u8" => Some(Encoding::Utf8),
            _ => None,
        }
    }

    /// The prefix as written in source.
    pub const fn prefix(self) -> &'static str {
        match self {
            Encoding::Narrow => "",
            Encoding::Wide => "L",
            Encoding::Utf16 => "u",
            Encoding::Utf32 => "U",
            Encoding::Utf8 => "u8",
        }
    }

    /// Whether the literal carried a non-empty prefix.
    #[inline]
    pub const fn is_prefixed(self) -> bool {
        !matches!(self, Encoding::Narrow)
    }

    /// Largest value a single code unit of this encoding can hold.
    pub const fn max_code_unit(self) -> u32 {
        match self {
            Encoding::Narrow | Encoding::Utf8 => 0xFF,
            Encoding::Utf16 => 0xFFFF,
            Encoding::Wide | Encoding::Utf32 => u32::MAX,
        }
    }

    /// Human-readable name used in diagnostics.
    pub const fn describe(self) -> &'static str {
        match self {
            Encoding::Narrow => "narrow",
            Encoding::Wide => "wide (L)",
            Encoding::Utf16 => "UTF-16 (u)",
            Encoding::Utf32 => "UTF-32 (U)",
            Encoding::Utf8 => "UTF-8 (u8)",
        }
    }
}

/// One decoded character of a char or string literal.
///
/// Source characters, universal character names and numeric escapes up to
/// `0x7F` are Unicode scalars. Numeric escapes above `0x7F` (`'\xff'`,
/// `"\377"`) name a code unit directly and are kept raw, since they need not
/// be valid Unicode.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharCode {
    Scalar(char),
    Raw(u32),
}

impl CharCode {
    /// Classify the value of an octal or hexadecimal escape.
    pub fn from_numeric_escape(value: u32) -> Self {
        match u8::try_from(value) {
            Ok(byte) if byte.is_ascii() => CharCode::Scalar(char::from(byte)),
            _ => CharCode::Raw(value),
        }
    }

    /// Numeric value of the character (code point or raw code unit).
    #[inline]
    pub fn value(self) -> u32 {
        match self {
            CharCode::Scalar(c) => u32::from(c),
            CharCode::Raw(v) => v,
        }
    }

    /// Append this character's code units in `encoding` to `out`.
    ///
    /// Raw values always occupy exactly one code unit.
    pub fn encode_into(self, encoding: Encoding, out: &mut Vec<u32>) {
        match self {
            CharCode::Raw(v) => out.push(v),
            CharCode::Scalar(c) => match encoding {
                Encoding::Narrow | Encoding::Utf8 => {
                    let mut buf = [0u8; 4];
                    out.extend(c.encode_utf8(&mut buf).bytes().map(u32::from));
                }
                Encoding::Utf16 => {
                    let mut buf = [0u16; 2];
                    out.extend(c.encode_utf16(&mut buf).iter().map(|&u| u32::from(u)));
                }
                Encoding::Wide | Encoding::Utf32 => out.push(u32::from(c)),
            },
        }
    }
}

// Integers

/// Integer conversion rank of the standard integer types a literal can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntRank {
    Int,
    Long,
    LongLong,
}

/// Target data model, fixing the bit width of each integer rank.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DataModel {
    /// Unix-like 64-bit targets: `int` 32, `long` 64, `long long` 64.
    #[default]
    Lp64,
    /// 64-bit Windows and 32-bit targets: `int` 32, `long` 32, `long long` 64.
    Llp64,
}

impl DataModel {
    /// Width in bits of an integer of the given rank.
    pub const fn bits(self, rank: IntRank) -> u32 {
        match (self, rank) {
            (_, IntRank::Int) | (DataModel::Llp64, IntRank::Long) => 32,
            (DataModel::Lp64, IntRank::Long) | (_, IntRank::LongLong) => 64,
        }
    }
}

/// A C integer type: rank plus signedness.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntType {
    pub rank: IntRank,
    pub signed: bool,
}

impl IntType {
    pub const INT: IntType = IntType::new(IntRank::Int, true);
    pub const UINT: IntType = IntType::new(IntRank::Int, false);
    pub const LONG: IntType = IntType::new(IntRank::Long, true);
    pub const ULONG: IntType = IntType::new(IntRank::Long, false);
    pub const LLONG: IntType = IntType::new(IntRank::LongLong, true);
    pub const ULLONG: IntType = IntType::new(IntRank::LongLong, false);

    pub const fn new(rank: IntRank, signed: bool) -> Self {
        IntType { rank, signed }
    }

    /// Width in bits under `model`.
    #[inline]
    pub const fn bits(self, model: DataModel) -> u32 {
        model.bits(self.rank)
    }

    /// Smallest representable value.
    pub fn min(self, model: DataModel) -> i128 {
        if self.signed {
            -(1i128 << (self.bits(model) - 1))
        } else {
            0
        }
    }

    /// Largest representable value.
    pub fn max(self, model: DataModel) -> i128 {
        let bits = self.bits(model);
        if self.signed {
            (1i128 << (bits - 1)) - 1
        } else {
            (1i128 << bits) - 1
        }
    }

    /// Whether `value` lies in this type's range.
    pub fn can_represent(self, value: i128, model: DataModel) -> bool {
        (self.min(model)..=self.max(model)).contains(&value)
    }

    /// The unsigned type of the same rank.
    #[must_use]
    pub const fn to_unsigned(self) -> Self {
        IntType::new(self.rank, false)
    }

    /// Reduce `value` modulo 2^bits into this type's range.
    ///
    /// Unsigned types wrap; signed types take the two's-complement reading of
    /// the low bits.
    pub fn wrap(self, value: i128, model: DataModel) -> i128 {
        let modulus = 1i128 << self.bits(model);
        let reduced = value.rem_euclid(modulus);
        if self.signed && reduced > self.max(model) {
            reduced - modulus
        } else {
            reduced
        }
    }

    /// The C spelling of the type.
    pub const fn c_name(self) -> &'static str {
        match (self.rank, self.signed) {
            (IntRank::Int, true) => "int",
            (IntRank::Int, false) => "unsigned int",
            (IntRank::Long, true) => "long",
            (IntRank::Long, false) => "unsigned long",
            (IntRank::LongLong, true) => "long long",
            (IntRank::LongLong, false) => "unsigned long long",
        }
    }

    /// Canonical literal suffix denoting this type.
    pub const fn suffix(self) -> &'static str {
        match (self.rank, self.signed) {
            (IntRank::Int, true) => "",
            (IntRank::Int, false) => "u",
            (IntRank::Long, true) => "l",
            (IntRank::Long, false) => "ul",
            (IntRank::LongLong, true) => "ll",
            (IntRank::LongLong, false) => "ull",
        }
    }
}

/// An integer constant together with its C type.
///
/// Invariant: `value` lies within `ty`'s range under the data model it was
/// created with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntValue {
    value: i128,
    ty: IntType,
}

impl IntValue {
    /// Create a value of type `ty`, wrapping `value` into range.
    pub fn new(value: i128, ty: IntType, model: DataModel) -> Self {
        IntValue {
            value: ty.wrap(value, model),
            ty,
        }
    }

    /// A signed `int`; used for `!` results and small test values.
    pub fn int(value: i32) -> Self {
        IntValue {
            value: i128::from(value),
            ty: IntType::INT,
        }
    }

    /// Exact mathematical value.
    #[inline]
    pub fn value(&self) -> i128 {
        self.value
    }

    #[inline]
    pub fn ty(&self) -> IntType {
        self.ty
    }

    #[inline]
    pub fn is_signed(&self) -> bool {
        self.ty.signed
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Bit-cast to `i64`; unsigned values above `i64::MAX` become negative.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "values are at most 64 bits wide; truncation is the documented bit-cast"
    )]
    pub fn as_i64(&self) -> i64 {
        self.value as i64
    }

    /// Bit-cast to `u64`; negative values take their two's-complement form.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "values are at most 64 bits wide; truncation is the documented bit-cast"
    )]
    pub fn as_u64(&self) -> u64 {
        self.value as u64
    }
}

// Floats

/// Width class of a floating constant, chosen by its suffix.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FloatWidth {
    /// `f`/`F` suffix.
    Float,
    /// No suffix.
    #[default]
    Double,
    /// `l`/`L` suffix.
    LongDouble,
}

impl FloatWidth {
    pub const fn suffix(self) -> &'static str {
        match self {
            FloatWidth::Float => "f",
            FloatWidth::Double => "",
            FloatWidth::LongDouble => "L",
        }
    }

    pub const fn c_name(self) -> &'static str {
        match self {
            FloatWidth::Float => "float",
            FloatWidth::Double => "double",
            FloatWidth::LongDouble => "long double",
        }
    }
}

/// A floating constant. Stored as bits so the value is `Eq` and `Hash`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatValue {
    bits: u64,
    width: FloatWidth,
}

impl FloatValue {
    /// Create a float constant; `Float` width rounds to single precision.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "rounding to single precision is what the `f` suffix means"
    )]
    pub fn new(value: f64, width: FloatWidth) -> Self {
        let value = match width {
            FloatWidth::Float => f64::from(value as f32),
            FloatWidth::Double | FloatWidth::LongDouble => value,
        };
        FloatValue {
            bits: value.to_bits(),
            width,
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        f64::from_bits(self.bits)
    }

    #[inline]
    pub fn width(&self) -> FloatWidth {
        self.width
    }
}

// Characters and strings

/// A character constant: one decoded character plus its encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharValue {
    pub code: CharCode,
    pub encoding: Encoding,
}

impl CharValue {
    pub fn new(code: CharCode, encoding: Encoding) -> Self {
        CharValue { code, encoding }
    }

    /// Code point (or raw code unit value) of the character.
    #[inline]
    pub fn code_point(&self) -> u32 {
        self.code.value()
    }
}

/// A string constant: decoded characters plus the encoding they are stored in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrValue {
    pub encoding: Encoding,
    pub chars: Vec<CharCode>,
}

impl StrValue {
    pub fn new(encoding: Encoding, chars: Vec<CharCode>) -> Self {
        StrValue { encoding, chars }
    }

    /// Unescaped text as a narrow string (test and fixture convenience).
    pub fn from_text(text: &str) -> Self {
        StrValue {
            encoding: Encoding::Narrow,
            chars: text.chars().map(CharCode::Scalar).collect(),
        }
    }

    /// The string's code units in its encoding, without a terminating NUL.
    pub fn code_units(&self) -> Vec<u32> {
        let mut units = Vec::with_capacity(self.chars.len());
        for &c in &self.chars {
            c.encode_into(self.encoding, &mut units);
        }
        units
    }

    /// The string's bytes, for narrow and `u8` strings.
    ///
    /// Returns `None` for wider encodings.
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        match self.encoding {
            Encoding::Narrow | Encoding::Utf8 => self
                .code_units()
                .into_iter()
                .map(|u| u8::try_from(u).ok())
                .collect(),
            Encoding::Wide | Encoding::Utf16 | Encoding::Utf32 => None,
        }
    }

    /// Text of the string; raw values that are not scalars become U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        self.chars
            .iter()
            .map(|c| match *c {
                CharCode::Scalar(ch) => ch,
                CharCode::Raw(v) => char::from_u32(v).unwrap_or(char::REPLACEMENT_CHARACTER),
            })
            .collect()
    }
}

// Constant values

/// Kind of a constant value, used by the promotion table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Float,
    Char,
    Str,
}

impl ValueKind {
    pub const ALL: [ValueKind; 4] = [
        ValueKind::Int,
        ValueKind::Float,
        ValueKind::Char,
        ValueKind::Str,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Int => "integer",
            ValueKind::Float => "floating",
            ValueKind::Char => "character",
            ValueKind::Str => "string",
        }
    }
}

/// A fully evaluated macro constant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstantValue {
    Int(IntValue),
    Float(FloatValue),
    Char(CharValue),
    Str(StrValue),
}

impl ConstantValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ConstantValue::Int(_) => ValueKind::Int,
            ConstantValue::Float(_) => ValueKind::Float,
            ConstantValue::Char(_) => ValueKind::Char,
            ConstantValue::Str(_) => ValueKind::Str,
        }
    }

    /// C type name for diagnostics (`unsigned long`, `double`, `char16_t[]`).
    pub fn type_name(&self) -> &'static str {
        match self {
            ConstantValue::Int(i) => i.ty().c_name(),
            ConstantValue::Float(f) => f.width().c_name(),
            ConstantValue::Char(c) => match c.encoding {
                Encoding::Narrow | Encoding::Utf8 => "char",
                Encoding::Wide => "wchar_t",
                Encoding::Utf16 => "char16_t",
                Encoding::Utf32 => "char32_t",
            },
            ConstantValue::Str(s) => match s.encoding {
                Encoding::Narrow => "char[]",
                Encoding::Utf8 => "char8_t[]",
                Encoding::Wide => "wchar_t[]",
                Encoding::Utf16 => "char16_t[]",
                Encoding::Utf32 => "char32_t[]",
            },
        }
    }

    pub fn as_int(&self) -> Option<&IntValue> {
        match self {
            ConstantValue::Int(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<&FloatValue> {
        match self {
            ConstantValue::Float(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<&CharValue> {
        match self {
            ConstantValue::Char(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&StrValue> {
        match self {
            ConstantValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Write `code` as it would appear inside a C literal delimited by `quote`.
fn write_escaped(f: &mut fmt::Formatter<'_>, code: CharCode, quote: char) -> fmt::Result {
    match code {
        CharCode::Scalar(c) if c == quote || c == '\\' => write!(f, "\\{c}"),
        CharCode::Scalar('\n') => f.write_str("\\n"),
        CharCode::Scalar('\t') => f.write_str("\\t"),
        CharCode::Scalar('\r') => f.write_str("\\r"),
        CharCode::Scalar(c) if c.is_ascii_control() => write!(f, "\\x{:02x}", u32::from(c)),
        CharCode::Scalar(c) => write!(f, "{c}"),
        CharCode::Raw(v) => write!(f, "\\x{v:x}"),
    }
}

/// Renders the constant as a C literal.
impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Int(i) => write!(f, "{}{}", i.value(), i.ty().suffix()),
            ConstantValue::Float(v) => {
                write!(f, "{:?}{}", v.value(), v.width().suffix())
            }
            ConstantValue::Char(c) => {
                write!(f, "{}'", c.encoding.prefix())?;
                write_escaped(f, c.code, '\'')?;
                f.write_str("'")
            }
            ConstantValue::Str(s) => {
                write!(f, "{}\"", s.encoding.prefix())?;
                for &code in &s.chars {
                    write_escaped(f, code, '"')?;
                }
                f.write_str("\"")
            }
        }
    }
}

#[cfg(test)]
mod tests;
