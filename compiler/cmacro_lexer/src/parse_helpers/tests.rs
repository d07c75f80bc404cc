use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_digits() {
    assert_eq!(parse_digits("456", 10), Ok(456));
    assert_eq!(parse_digits("77", 8), Ok(63));
    assert_eq!(parse_digits("ff", 16), Ok(255));
    assert_eq!(parse_digits("1", 2), Ok(1));
    assert_eq!(parse_digits("", 10), Ok(0));
}

#[test]
fn test_parse_digits_invalid() {
    assert_eq!(parse_digits("2", 2), Err(DigitError::Invalid('2')));
    assert_eq!(parse_digits("8", 8), Err(DigitError::Invalid('8')));
}

#[test]
fn test_parse_digits_overflow() {
    assert_eq!(parse_digits("18446744073709551615", 10), Ok(u64::MAX));
    assert_eq!(
        parse_digits("18446744073709551616", 10),
        Err(DigitError::Overflow)
    );
}

#[test]
fn test_split_while() {
    assert_eq!(split_while("123uL", |b| b.is_ascii_digit()), ("123", "uL"));
    assert_eq!(split_while("abc", |b| b.is_ascii_digit()), ("", "abc"));
    assert_eq!(split_while("12", |b| b.is_ascii_digit()), ("12", ""));
}

#[test]
fn test_all_accepted_suffixes() {
    let u = IntSuffix::UNSIGNED;
    let l = IntSuffix::LONG;
    let ll = IntSuffix::LONG_LONG;
    let table = [
        ("", IntSuffix::empty()),
        ("u", u),
        ("U", u),
        ("l", l),
        ("L", l),
        ("ul", u | l),
        ("uL", u | l),
        ("Ul", u | l),
        ("UL", u | l),
        ("lu", u | l),
        ("Lu", u | l),
        ("lU", u | l),
        ("LU", u | l),
        ("ll", ll),
        ("LL", ll),
        ("llu", u | ll),
        ("llU", u | ll),
        ("LLu", u | ll),
        ("LLU", u | ll),
        ("ull", u | ll),
        ("Ull", u | ll),
        ("uLL", u | ll),
        ("ULL", u | ll),
    ];
    assert_eq!(table.len(), 23);
    for (suffix, flags) in table {
        assert_eq!(parse_int_suffix(suffix), Some(flags), "{suffix}");
    }
}

#[test]
fn test_rejected_suffixes() {
    for suffix in ["lL", "Ll", "uu", "LuL", "ulu", "LLL", "lul", "uLl", "f", "x", "lll", "UUL"] {
        assert_eq!(parse_int_suffix(suffix), None, "{suffix}");
    }
}

#[test]
fn test_hex_float_value() {
    assert_eq!(hex_float_value("1", "", -3), 0.125);
    assert_eq!(hex_float_value("1", "8", 0), 1.5);
    assert_eq!(hex_float_value("a", "", 1), 20.0);
    assert_eq!(hex_float_value("", "8", 1), 1.0);
}

#[test]
fn test_hex_float_long_mantissa() {
    // 17 hex digits: the last one only scales.
    let v = hex_float_value("10000000000000000", "", 0);
    assert_eq!(v, 2f64.powi(64));
}

#[test]
fn test_hex_float_extreme_exponents() {
    assert_eq!(hex_float_value("", "1", i64::MIN + 1), 0.0);
    assert_eq!(hex_float_value("10000000000000000", "", i64::MAX), f64::INFINITY);
    assert_eq!(hex_float_value("0", "", i64::MAX), 0.0);
    assert_eq!(hex_float_value("", "0000000000000000001", -4), 2f64.powi(-80));
}

#[test]
fn test_hex_float_subnormal() {
    assert_eq!(hex_float_value("1", "", -1074), f64::from_bits(1));
    assert_eq!(hex_float_value("1", "", -1075), 0.0);
    assert_eq!(hex_float_value("1", "", 1023), 2f64.powi(1023));
    assert_eq!(hex_float_value("1", "", 1024), f64::INFINITY);
}
