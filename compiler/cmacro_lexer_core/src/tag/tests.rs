use super::*;

// === RawTag discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(RawTag::Ident as u8, 0);
    assert_eq!(RawTag::String as u8, 3);
    assert_eq!(RawTag::Plus as u8, 32);
    assert_eq!(RawTag::Bang as u8, 43);
    assert_eq!(RawTag::LeftParen as u8, 80);
    assert_eq!(RawTag::Whitespace as u8, 112);
    assert_eq!(RawTag::InvalidByte as u8, 240);
    assert_eq!(RawTag::Eof as u8, 255);
}

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<RawTag>(), 1);
}

// === Lexeme ===

#[test]
fn fixed_lexemes() {
    assert_eq!(RawTag::Shl.lexeme(), Some("<<"));
    assert_eq!(RawTag::Tilde.lexeme(), Some("~"));
    assert_eq!(RawTag::RightParen.lexeme(), Some(")"));
}

#[test]
fn variable_tags_have_no_lexeme() {
    assert_eq!(RawTag::Ident.lexeme(), None);
    assert_eq!(RawTag::Number.lexeme(), None);
    assert_eq!(RawTag::OtherPunct.lexeme(), None);
    assert_eq!(RawTag::Eof.lexeme(), None);
}

// === Categories ===

#[test]
fn trivia_tags() {
    for tag in [
        RawTag::Whitespace,
        RawTag::Newline,
        RawTag::LineComment,
        RawTag::BlockComment,
    ] {
        assert!(tag.is_trivia(), "{tag:?}");
        assert!(!tag.is_error(), "{tag:?}");
    }
    assert!(!RawTag::Number.is_trivia());
}

#[test]
fn error_tags() {
    for tag in [
        RawTag::InvalidByte,
        RawTag::UnterminatedString,
        RawTag::UnterminatedChar,
        RawTag::UnterminatedComment,
        RawTag::InteriorNull,
    ] {
        assert!(tag.is_error(), "{tag:?}");
    }
    assert!(!RawTag::Eof.is_error());
}

#[test]
fn names() {
    assert_eq!(RawTag::Shr.name(), "operator");
    assert_eq!(RawTag::UnterminatedComment.name(), "unterminated block comment");
}
