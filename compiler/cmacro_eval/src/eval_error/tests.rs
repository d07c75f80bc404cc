use super::*;
use pretty_assertions::assert_eq;

#[test]
fn kinds_map_to_failure_kinds() {
    let span = Span::new(0, 1);
    let table = [
        (unresolved_identifier("X", span), FailureKind::UnresolvedIdentifier),
        (non_constant_reference("F", span), FailureKind::NonConstantReference),
        (cyclic_reference("A", &["A".to_owned()], span), FailureKind::CyclicReference),
        (reference_too_deep("A", 32, span), FailureKind::CyclicReference),
        (binary_type_mismatch("<<", "integer", "floating", span), FailureKind::TypeMismatch),
        (unary_type_mismatch("~", "floating", span), FailureKind::TypeMismatch),
        (concat_non_string("integer", span), FailureKind::TypeMismatch),
        (concat_without_string(span), FailureKind::TypeMismatch),
        (
            encoding_conflict(Encoding::Utf16, Encoding::Wide, span),
            FailureKind::ConcatenationEncodingConflict,
        ),
        (division_by_zero("division", span), FailureKind::DivisionByZero),
    ];
    for (err, kind) in table {
        assert_eq!(err.kind.failure_kind(), kind, "{err}");
    }
}

#[test]
fn expansion_keeps_the_inner_kind() {
    let inner = FailureRecord::new(FailureKind::DivisionByZero, Span::new(2, 5), "integer division by zero");
    let err = in_expansion("RATIO", inner, Span::new(0, 5));
    assert_eq!(err.kind.failure_kind(), FailureKind::DivisionByZero);
    assert_eq!(err.to_string(), "in expansion of `RATIO`: integer division by zero");
}

#[test]
fn messages() {
    let span = Span::DUMMY;
    assert_eq!(
        cyclic_reference("A", &["A".to_owned(), "B".to_owned()], span).to_string(),
        "`A` refers to itself through A -> B -> A"
    );
    assert_eq!(
        encoding_conflict(Encoding::Utf16, Encoding::Wide, span).to_string(),
        "cannot concatenate UTF-16 (u) and wide (L) strings"
    );
    assert_eq!(
        binary_type_mismatch("<<", "integer", "floating", span).to_string(),
        "operator `<<` cannot be applied to integer and floating operands"
    );
}

#[test]
fn converts_to_failure_record() {
    let record = FailureRecord::from(unresolved_identifier("UNKNOWN", Span::new(0, 7)));
    assert_eq!(record.kind, FailureKind::UnresolvedIdentifier);
    assert_eq!(record.span, Span::new(0, 7));
    assert_eq!(record.message, "`UNKNOWN` is not defined");
}
