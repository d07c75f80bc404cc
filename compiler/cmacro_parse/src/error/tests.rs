use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages() {
    let err = ParseError::unexpected(Span::new(0, 1), "`*`".to_owned(), "an operand");
    assert_eq!(err.to_string(), "expected an operand, found `*`");

    let err = ParseError::unexpected_end(Span::point(3), "`)`");
    assert_eq!(err.to_string(), "expected `)`, found end of text");

    let err = ParseError::new(
        ParseErrorKind::UnsupportedPunctuator {
            punct: "&&".to_owned(),
        },
        Span::new(2, 4),
    );
    assert_eq!(err.to_string(), "`&&` is not allowed in a constant expression");
}

#[test]
fn every_parse_error_is_a_syntax_error() {
    let errors = [
        ParseError::unexpected(Span::new(0, 1), "`)`".to_owned(), "an operand"),
        ParseError::unexpected_end(Span::point(0), "an operand"),
        ParseError::new(ParseErrorKind::UnclosedParen { open: Span::new(0, 1) }, Span::point(2)),
        ParseError::new(
            ParseErrorKind::TrailingTokens {
                found: "`)`".to_owned(),
            },
            Span::new(1, 2),
        ),
        ParseError::new(ParseErrorKind::NumberJuxtaposition, Span::new(0, 3)),
    ];
    for err in errors {
        let span = err.span;
        let record = FailureRecord::from(err);
        assert_eq!(record.kind, FailureKind::SyntaxError);
        assert_eq!(record.span, span);
    }
}
