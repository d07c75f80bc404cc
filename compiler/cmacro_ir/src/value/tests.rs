use super::*;
use pretty_assertions::assert_eq;

// === Encoding ===

#[test]
fn encoding_prefix_roundtrip() {
    for enc in [
        Encoding::Narrow,
        Encoding::Wide,
        Encoding::Utf16,
        Encoding::Utf32,
        Encoding::Utf8,
    ] {
        assert_eq!(Encoding::from_prefix(enc.prefix()), Some(enc));
    }
    assert_eq!(Encoding::from_prefix("u16"), None);
}

#[test]
fn only_narrow_is_unprefixed() {
    assert!(!Encoding::Narrow.is_prefixed());
    assert!(Encoding::Utf8.is_prefixed());
    assert!(Encoding::Wide.is_prefixed());
}

// === CharCode ===

#[test]
fn numeric_escape_ascii_is_scalar() {
    assert_eq!(CharCode::from_numeric_escape(0x41), CharCode::Scalar('A'));
    assert_eq!(CharCode::from_numeric_escape(0x7f), CharCode::Scalar('\x7f'));
}

#[test]
fn numeric_escape_above_ascii_is_raw() {
    assert_eq!(CharCode::from_numeric_escape(0xff), CharCode::Raw(0xff));
    assert_eq!(CharCode::from_numeric_escape(0x1234), CharCode::Raw(0x1234));
}

#[test]
fn scalar_encodes_per_encoding() {
    let donut = CharCode::Scalar('\u{1f369}');
    let mut narrow = Vec::new();
    donut.encode_into(Encoding::Narrow, &mut narrow);
    assert_eq!(narrow, vec![0xF0, 0x9F, 0x8D, 0xA9]);

    let mut utf16 = Vec::new();
    donut.encode_into(Encoding::Utf16, &mut utf16);
    assert_eq!(utf16, vec![0xD83C, 0xDF69]);

    let mut wide = Vec::new();
    donut.encode_into(Encoding::Wide, &mut wide);
    assert_eq!(wide, vec![0x1F369]);
}

#[test]
fn raw_is_single_unit() {
    let mut out = Vec::new();
    CharCode::Raw(0xff).encode_into(Encoding::Narrow, &mut out);
    assert_eq!(out, vec![0xff]);
}

// === Integer types ===

#[test]
fn data_model_widths() {
    assert_eq!(DataModel::Lp64.bits(IntRank::Long), 64);
    assert_eq!(DataModel::Llp64.bits(IntRank::Long), 32);
    assert_eq!(DataModel::Llp64.bits(IntRank::LongLong), 64);
    assert_eq!(DataModel::Lp64.bits(IntRank::Int), 32);
}

#[test]
fn int_type_ranges() {
    let m = DataModel::Lp64;
    assert_eq!(IntType::INT.max(m), i128::from(i32::MAX));
    assert_eq!(IntType::INT.min(m), i128::from(i32::MIN));
    assert_eq!(IntType::ULLONG.max(m), i128::from(u64::MAX));
    assert_eq!(IntType::UINT.min(m), 0);
    assert!(IntType::LONG.can_represent(1 << 40, m));
    assert!(!IntType::LONG.can_represent(1 << 40, DataModel::Llp64));
}

#[test]
fn wrap_unsigned_and_signed() {
    let m = DataModel::Lp64;
    assert_eq!(IntType::UINT.wrap(-1, m), i128::from(u32::MAX));
    assert_eq!(IntType::INT.wrap(i128::from(i32::MAX) + 1, m), i128::from(i32::MIN));
    assert_eq!(IntType::ULLONG.wrap(1 << 64, m), 0);
    assert_eq!(IntType::LLONG.wrap(-5, m), -5);
}

#[test]
fn int_value_bitcasts() {
    let m = DataModel::Lp64;
    let v = IntValue::new(-1, IntType::LLONG, m);
    assert_eq!(v.as_i64(), -1);
    assert_eq!(v.as_u64(), u64::MAX);
    let u = IntValue::new(i128::from(u64::MAX), IntType::ULLONG, m);
    assert_eq!(u.as_i64(), -1);
    assert!(!u.is_signed());
}

// === Floats ===

#[test]
fn float_suffix_rounds_to_single() {
    let f = FloatValue::new(0.1, FloatWidth::Float);
    assert_eq!(f.value(), f64::from(0.1f32));
    let d = FloatValue::new(0.1, FloatWidth::Double);
    assert_eq!(d.value(), 0.1);
}

// === Strings ===

#[test]
fn string_code_units_follow_encoding() {
    let s = StrValue::new(Encoding::Utf16, vec![CharCode::Scalar('h'), CharCode::Scalar('\u{1f369}')]);
    assert_eq!(s.code_units(), vec![u32::from(b'h'), 0xD83C, 0xDF69]);
}

#[test]
fn narrow_string_bytes() {
    let s = StrValue::new(Encoding::Narrow, vec![CharCode::Scalar('é'), CharCode::Raw(0xff)]);
    assert_eq!(s.to_bytes(), Some(vec![0xC3, 0xA9, 0xFF]));
    assert_eq!(StrValue::new(Encoding::Wide, Vec::new()).to_bytes(), None);
}

#[test]
fn lossy_text_replaces_invalid_raw() {
    let s = StrValue::new(Encoding::Wide, vec![CharCode::Scalar('a'), CharCode::Raw(0xD800)]);
    assert_eq!(s.to_string_lossy(), "a\u{FFFD}");
}

// === ConstantValue ===

#[test]
fn display_renders_c_literals() {
    let m = DataModel::Lp64;
    assert_eq!(
        ConstantValue::Int(IntValue::new(16, IntType::ULLONG, m)).to_string(),
        "16ull"
    );
    assert_eq!(ConstantValue::Int(IntValue::int(-5)).to_string(), "-5");
    assert_eq!(
        ConstantValue::Float(FloatValue::new(80.0, FloatWidth::Double)).to_string(),
        "80.0"
    );
    assert_eq!(
        ConstantValue::Char(CharValue::new(CharCode::Raw(0xff), Encoding::Utf32)).to_string(),
        "U'\\xff'"
    );
    assert_eq!(
        ConstantValue::Str(StrValue::new(Encoding::Wide, vec![CharCode::Scalar('"')])).to_string(),
        "L\"\\\"\""
    );
}

#[test]
fn type_names() {
    assert_eq!(ConstantValue::Int(IntValue::int(1)).type_name(), "int");
    assert_eq!(
        ConstantValue::Str(StrValue::new(Encoding::Utf16, Vec::new())).type_name(),
        "char16_t[]"
    );
    assert_eq!(
        ConstantValue::Char(CharValue::new(CharCode::Scalar('A'), Encoding::Narrow)).type_name(),
        "char"
    );
}

#[test]
fn kind_accessors() {
    let v = ConstantValue::Str(StrValue::from_text("x"));
    assert_eq!(v.kind(), ValueKind::Str);
    assert!(v.as_str().is_some());
    assert!(v.as_int().is_none());
    assert_eq!(ValueKind::ALL.len(), 4);
}
