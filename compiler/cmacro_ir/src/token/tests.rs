use super::*;
use pretty_assertions::assert_eq;

fn dec(magnitude: u64, suffix: IntSuffix) -> IntLiteral {
    IntLiteral::new(magnitude, Radix::Decimal, suffix)
}

fn hex(magnitude: u64, suffix: IntSuffix) -> IntLiteral {
    IntLiteral::new(magnitude, Radix::Hexadecimal, suffix)
}

// === Literal type selection ===

#[test]
fn small_decimal_is_int() {
    assert_eq!(dec(456, IntSuffix::empty()).ty(DataModel::Lp64), IntType::INT);
}

#[test]
fn decimal_skips_unsigned_candidates() {
    // 2^31 fits unsigned int but decimal goes straight to long.
    let lit = dec(1 << 31, IntSuffix::empty());
    assert_eq!(lit.ty(DataModel::Lp64), IntType::LONG);
    assert_eq!(lit.ty(DataModel::Llp64), IntType::LLONG);
}

#[test]
fn hex_takes_unsigned_int() {
    assert_eq!(hex(0xFFFF_FFFF, IntSuffix::empty()).ty(DataModel::Lp64), IntType::UINT);
    assert_eq!(hex(u64::MAX, IntSuffix::empty()).ty(DataModel::Lp64), IntType::ULONG);
    assert_eq!(hex(u64::MAX, IntSuffix::empty()).ty(DataModel::Llp64), IntType::ULLONG);
}

#[test]
fn huge_decimal_becomes_unsigned_long_long() {
    assert_eq!(dec(u64::MAX, IntSuffix::empty()).ty(DataModel::Lp64), IntType::ULLONG);
}

#[test]
fn suffixes_restrict_candidates() {
    let m = DataModel::Lp64;
    assert_eq!(dec(124, IntSuffix::UNSIGNED).ty(m), IntType::UINT);
    assert_eq!(dec(125, IntSuffix::UNSIGNED | IntSuffix::LONG).ty(m), IntType::ULONG);
    assert_eq!(dec(4, IntSuffix::UNSIGNED | IntSuffix::LONG_LONG).ty(m), IntType::ULLONG);
    assert_eq!(dec(4, IntSuffix::LONG).ty(m), IntType::LONG);
    assert_eq!(dec(4, IntSuffix::LONG_LONG).ty(m), IntType::LLONG);
    assert_eq!(
        hex(u64::MAX, IntSuffix::LONG_LONG).ty(m),
        IntType::ULLONG
    );
}

#[test]
fn to_value_keeps_magnitude() {
    let v = dec(u64::MAX, IntSuffix::UNSIGNED).to_value(DataModel::Lp64);
    assert_eq!(v.as_u64(), u64::MAX);
    assert_eq!(v.ty(), IntType::ULONG);
}

// === Token kinds ===

#[test]
fn describe_tokens() {
    assert_eq!(TokenKind::Operator(Operator::Shl).describe(), "`<<`");
    assert_eq!(TokenKind::Identifier("FOO".into()).describe(), "identifier `FOO`");
    assert_eq!(TokenKind::Punctuation(Punct::Other("&&".into())).describe(), "`&&`");
    assert_eq!(TokenKind::RIGHT_PAREN.describe(), "`)`");
}

#[test]
fn literal_classification() {
    assert!(TokenKind::IntLiteral(dec(1, IntSuffix::empty())).is_literal());
    assert!(!TokenKind::LEFT_PAREN.is_literal());
}

#[test]
fn token_debug_shows_span() {
    let tok = Token::new(TokenKind::Operator(Operator::Plus), Span::new(3, 4));
    assert_eq!(format!("{tok:?}"), "Operator(Plus) @ 3..4");
}
