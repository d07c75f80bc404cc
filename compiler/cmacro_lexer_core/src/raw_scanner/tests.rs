use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

/// Scan and return `(tag, text)` pairs, excluding Eof.
fn scan(source: &str) -> Vec<(RawTag, String)> {
    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut tokens = Vec::new();
    let mut pos = 0;
    loop {
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        tokens.push((tok.tag, scanner.slice(pos, pos + tok.len).to_owned()));
        pos += tok.len;
    }
    tokens
}

/// Scan and return tags only, skipping trivia.
fn scan_tags(source: &str) -> Vec<RawTag> {
    tokenize(source)
        .into_iter()
        .map(|t| t.tag)
        .filter(|t| !t.is_trivia())
        .collect()
}

fn texts(source: &str) -> Vec<String> {
    scan(source)
        .into_iter()
        .filter(|(tag, _)| !tag.is_trivia())
        .map(|(_, text)| text)
        .collect()
}

// === Control ===

#[test]
fn empty_source() {
    assert!(tokenize("").is_empty());
}

#[test]
fn repeated_eof_returns_eof() {
    let buf = SourceBuffer::new("1");
    let mut scanner = RawScanner::new(buf.cursor());
    scanner.next_token();
    for _ in 0..3 {
        assert_eq!(
            scanner.next_token(),
            RawToken {
                tag: RawTag::Eof,
                len: 0
            }
        );
    }
}

#[test]
fn all_256_bytes_produce_a_token() {
    for b in 1..=127u8 {
        let source = String::from(char::from(b));
        let tokens = tokenize(&source);
        assert!(!tokens.is_empty(), "byte {b:#04x}");
        let total: u32 = tokens.iter().map(|t| t.len).sum();
        assert_eq!(total as usize, source.len(), "byte {b:#04x}");
    }
}

// === Whitespace & comments ===

#[test]
fn whitespace_kinds() {
    assert_eq!(scan(" \t\x0b\x0c\r")[0].0, RawTag::Whitespace);
    assert_eq!(scan("\n")[0].0, RawTag::Newline);
}

#[test]
fn line_continuation_is_whitespace() {
    assert_eq!(
        scan("1 \\\n+ 2"),
        vec![
            (RawTag::Number, "1".into()),
            (RawTag::Whitespace, " ".into()),
            (RawTag::Whitespace, "\\\n".into()),
            (RawTag::Plus, "+".into()),
            (RawTag::Whitespace, " ".into()),
            (RawTag::Number, "2".into()),
        ]
    );
    assert_eq!(scan("\\\r\n")[0], (RawTag::Whitespace, "\\\r\n".into()));
}

#[test]
fn stray_backslash_is_invalid() {
    assert_eq!(scan_tags("\\x"), vec![RawTag::InvalidByte, RawTag::Ident]);
}

#[test]
fn comments() {
    assert_eq!(
        scan("(((1)<<4ULL))/*comment*/")
            .last()
            .map(|(tag, _)| *tag),
        Some(RawTag::BlockComment)
    );
    assert_eq!(scan("// rest")[0].0, RawTag::LineComment);
    assert_eq!(scan("/* open")[0], (RawTag::UnterminatedComment, "/* open".into()));
}

#[test]
fn block_comment_does_not_nest() {
    assert_eq!(
        texts("/* a /* b */ 1 */"),
        vec!["/* a /* b */", "1", "*", "/"]
    );
}

// === Numbers ===

#[test]
fn pp_numbers_are_single_tokens() {
    for source in ["0b2", "126LuL", "0x", "1e+3", "2e-3", "1.5f", ".1", "0.", "08", "0x1p-3", "1..2"] {
        assert_eq!(scan(source), vec![(RawTag::Number, source.to_owned())], "{source}");
    }
}

#[test]
fn sign_only_follows_exponent_marker() {
    assert_eq!(texts("1+2"), vec!["1", "+", "2"]);
    assert_eq!(texts("0x1f-1"), vec!["0x1f", "-", "1"]);
    // `0xe+1` is one preprocessing number in C.
    assert_eq!(texts("0xe+1"), vec!["0xe+1"]);
}

#[test]
fn lone_dot_and_ellipsis() {
    assert_eq!(scan_tags(". ..."), vec![RawTag::OtherPunct, RawTag::OtherPunct]);
    assert_eq!(texts("..."), vec!["..."]);
}

// === Identifiers & literals ===

#[test]
fn identifiers() {
    assert_eq!(texts("Int_0 _x L u8 Ux"), vec!["Int_0", "_x", "L", "u8", "Ux"]);
    assert!(scan_tags("Int_0 _x L").iter().all(|t| *t == RawTag::Ident));
}

#[test]
fn identifier_on_the_last_byte_before_padding() {
    for len in [63, 127] {
        let text = format!("{}A", " ".repeat(len - 1));
        assert_eq!(texts(&text), vec!["A"], "len {len}");
        let text = format!("{}L", " ".repeat(len - 1));
        assert_eq!(scan_tags(&text), vec![RawTag::Ident], "len {len}");
    }
}

#[test]
fn prefixed_literals_are_one_token() {
    assert_eq!(scan("L\"long\""), vec![(RawTag::String, "L\"long\"".into())]);
    assert_eq!(scan("u8\"x\""), vec![(RawTag::String, "u8\"x\"".into())]);
    assert_eq!(scan("U'\\xff'"), vec![(RawTag::Char, "U'\\xff'".into())]);
    assert_eq!(scan("u'a'"), vec![(RawTag::Char, "u'a'".into())]);
}

#[test]
fn prefix_separated_by_space_is_identifier() {
    assert_eq!(scan_tags("L \"x\""), vec![RawTag::Ident, RawTag::String]);
}

#[test]
fn adjacent_strings() {
    assert_eq!(texts("u\"con\" L\"cat\""), vec!["u\"con\"", "L\"cat\""]);
}

#[test]
fn escaped_quotes_stay_inside() {
    assert_eq!(texts(r#""a\"b" '\''"#), vec![r#""a\"b""#, r"'\''"]);
}

#[test]
fn multi_char_and_empty_char_bodies_scan_whole() {
    assert_eq!(scan("'ab'")[0], (RawTag::Char, "'ab'".into()));
    assert_eq!(scan("''")[0], (RawTag::Char, "''".into()));
}

#[test]
fn unterminated_literals() {
    assert_eq!(scan("\"abc")[0], (RawTag::UnterminatedString, "\"abc".into()));
    assert_eq!(scan("'a")[0], (RawTag::UnterminatedChar, "'a".into()));
    assert_eq!(scan("\"a\nb\"")[0], (RawTag::UnterminatedString, "\"a".into()));
    assert_eq!(scan("\"a\\")[0], (RawTag::UnterminatedString, "\"a\\".into()));
}

#[test]
fn escaped_newline_continues_string() {
    assert_eq!(scan("\"a\\\nb\"")[0], (RawTag::String, "\"a\\\nb\"".into()));
}

#[test]
fn non_ascii_inside_literal() {
    assert_eq!(scan("\"\u{1f369}\"")[0].0, RawTag::String);
    assert_eq!(scan("'é'")[0].0, RawTag::Char);
}

// === Operators & punctuation ===

#[test]
fn expression_operators() {
    assert_eq!(
        scan_tags("+ - * / % & | ^ << >> ~ ! ( )"),
        vec![
            RawTag::Plus,
            RawTag::Minus,
            RawTag::Star,
            RawTag::Slash,
            RawTag::Percent,
            RawTag::Amp,
            RawTag::Pipe,
            RawTag::Caret,
            RawTag::Shl,
            RawTag::Shr,
            RawTag::Tilde,
            RawTag::Bang,
            RawTag::LeftParen,
            RawTag::RightParen,
        ]
    );
}

#[test]
fn shifts_are_greedy() {
    assert_eq!(texts("1<<<2"), vec!["1", "<<", "<", "2"]);
    assert_eq!(texts("a>>=b"), vec!["a", ">>=", "b"]);
}

#[test]
fn other_punctuators() {
    assert_eq!(
        texts("&& || == != <= >= -> ++ -- += ## # ? : , ; [ ] { } < > ="),
        vec![
            "&&", "||", "==", "!=", "<=", ">=", "->", "++", "--", "+=", "##", "#", "?", ":",
            ",", ";", "[", "]", "{", "}", "<", ">", "=",
        ]
    );
    assert!(scan_tags("&& == ? ,")
        .iter()
        .all(|t| *t == RawTag::OtherPunct));
}

#[test]
fn invalid_bytes() {
    assert_eq!(
        scan_tags("@ $ `"),
        vec![RawTag::InvalidByte, RawTag::InvalidByte, RawTag::InvalidByte]
    );
    assert_eq!(scan("é"), vec![(RawTag::InvalidByte, "é".into())]);
}

#[test]
fn interior_null() {
    assert_eq!(scan_tags("1\02"), vec![RawTag::Number, RawTag::InteriorNull, RawTag::Number]);
}

// === Property Tests ===

mod proptest_coverage {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lengths_cover_source(source in "\\PC{0,64}") {
            let total: u32 = tokenize(&source).iter().map(|t| t.len).sum();
            prop_assert_eq!(total as usize, source.len());
        }

        #[test]
        fn every_token_has_positive_length(source in "[ -~\\n\\t]{0,64}") {
            for tok in tokenize(&source) {
                prop_assert!(tok.len > 0, "{:?} in {:?}", tok, source);
            }
        }
    }
}
