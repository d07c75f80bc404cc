use super::*;
use cmacro_diagnostic::FailureKind;
use cmacro_ir::{Encoding, Operator, Punct, Radix, TokenKind};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    match lex(source) {
        Ok(tokens) => tokens.into_iter().map(|t| t.kind).collect(),
        Err(err) => panic!("lexing {source:?} failed: {err}"),
    }
}

fn failure(source: &str) -> FailureKind {
    match lex(source) {
        Err(err) => err.kind.failure_kind(),
        Ok(tokens) => panic!("lexing {source:?} succeeded: {tokens:?}"),
    }
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_owned())
}

fn op(op: Operator) -> TokenKind {
    TokenKind::Operator(op)
}

#[test]
fn empty_and_trivia_only() {
    assert!(kinds("").is_empty());
    assert!(kinds("  /* comment */ // line").is_empty());
    assert!(kinds("\\\n  ").is_empty());
}

#[test]
fn expression_tokens() {
    let tokens = kinds("(A << 2) | ~B");
    assert_eq!(tokens.len(), 8);
    assert_eq!(tokens[0], TokenKind::LEFT_PAREN);
    assert_eq!(tokens[1], ident("A"));
    assert_eq!(tokens[2], op(Operator::Shl));
    assert!(matches!(tokens[3], TokenKind::IntLiteral(lit) if lit.magnitude == 2));
    assert_eq!(tokens[4], TokenKind::RIGHT_PAREN);
    assert_eq!(tokens[5], op(Operator::Pipe));
    assert_eq!(tokens[6], op(Operator::Tilde));
    assert_eq!(tokens[7], ident("B"));
}

#[test]
fn spans_point_into_the_source() {
    let tokens = lex("  FOO+1").unwrap();
    let spans: Vec<_> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(spans, vec![Span::new(2, 5), Span::new(5, 6), Span::new(6, 7)]);
}

#[test]
fn comments_separate_tokens() {
    assert_eq!(
        kinds("A/**/B//C"),
        vec![ident("A"), ident("B")]
    );
    assert_eq!(kinds("4/2"), kinds("4 / 2"));
}

#[test]
fn prefix_binds_to_adjacent_quote() {
    let tokens = kinds("L\"long\" u8\"x\" L \"y\"");
    assert_eq!(tokens.len(), 4);
    assert!(matches!(&tokens[0], TokenKind::StringLiteral(s) if s.encoding == Encoding::Wide));
    assert!(matches!(&tokens[1], TokenKind::StringLiteral(s) if s.encoding == Encoding::Utf8));
    assert_eq!(tokens[2], ident("L"));
    assert!(
        matches!(&tokens[3], TokenKind::StringLiteral(s) if s.encoding == Encoding::Narrow)
    );
}

#[test]
fn adjacent_strings_stay_separate_tokens() {
    let tokens = kinds("\"con\" /* x */ \"cat\"");
    assert_eq!(tokens.len(), 2);
}

#[test]
fn numbers_are_preprocessing_numbers() {
    assert_eq!(failure("0b2"), FailureKind::MalformedLiteral);
    assert_eq!(failure("126LuL"), FailureKind::MalformedLiteral);
    assert_eq!(failure("1 + 1e"), FailureKind::MalformedLiteral);
    let tokens = kinds("0x1fu");
    assert!(
        matches!(tokens.as_slice(), [TokenKind::IntLiteral(lit)] if lit.radix == Radix::Hexadecimal)
    );
}

#[test]
fn float_then_shift() {
    let tokens = kinds("3<<1f");
    assert_eq!(tokens.len(), 3);
    assert!(matches!(tokens[2], TokenKind::FloatLiteral(_)));
}

#[test]
fn other_punctuators_are_kept() {
    assert_eq!(
        kinds("a && b"),
        vec![
            ident("a"),
            TokenKind::Punctuation(Punct::Other("&&".to_owned())),
            ident("b"),
        ]
    );
    assert_eq!(
        kinds("a ? b"),
        vec![
            ident("a"),
            TokenKind::Punctuation(Punct::Other("?".to_owned())),
            ident("b"),
        ]
    );
}

#[test]
fn syntax_level_lex_errors() {
    assert_eq!(failure("1 @ 2"), FailureKind::SyntaxError);
    assert_eq!(failure("$x"), FailureKind::SyntaxError);
    assert_eq!(failure("1 /* open"), FailureKind::SyntaxError);
    assert_eq!(failure("1\0"), FailureKind::SyntaxError);
    assert_eq!(failure("a \\ b"), FailureKind::SyntaxError);
}

#[test]
fn first_error_wins() {
    let err = lex("0b2 @").unwrap_err();
    assert_eq!(err.kind.failure_kind(), FailureKind::MalformedLiteral);
    assert_eq!(err.span, Span::new(0, 3));
}

#[test]
fn unterminated_literals_are_malformed() {
    assert_eq!(failure("\"abc"), FailureKind::MalformedLiteral);
    assert_eq!(failure("'a"), FailureKind::MalformedLiteral);
    assert_eq!(failure("\"abc\ndef\""), FailureKind::MalformedLiteral);
}

#[test]
fn blank_detection() {
    assert!(is_blank(""));
    assert!(is_blank("   \t"));
    assert!(is_blank("/* only a comment */"));
    assert!(is_blank("// trailing"));
    assert!(!is_blank("1"));
    assert!(!is_blank("/* open"));
}
