use pretty_assertions::assert_eq;

use super::*;

#[test]
fn object_like() {
    assert_eq!(
        MacroDefinition::parse_directive_body(" Int_456 456 "),
        Some(MacroDefinition::object_like("Int_456", "456"))
    );
    assert_eq!(
        MacroDefinition::parse_directive_body("PARENS (1 + 2)"),
        Some(MacroDefinition::object_like("PARENS", "(1 + 2)"))
    );
}

#[test]
fn empty_body() {
    let def = MacroDefinition::parse_directive_body("EMPTY").unwrap();
    assert_eq!(def.body, "");
    assert!(!def.is_function_like());
}

#[test]
fn function_like_needs_adjacent_paren() {
    assert_eq!(
        MacroDefinition::parse_directive_body("FAIL_1(x) x"),
        Some(MacroDefinition::function_like("FAIL_1", vec!["x".to_owned()], "x"))
    );
    assert_eq!(
        MacroDefinition::parse_directive_body("MAX( a , b ) ((a) > (b))"),
        Some(MacroDefinition::function_like(
            "MAX",
            vec!["a".to_owned(), "b".to_owned()],
            "((a) > (b))"
        ))
    );
    assert_eq!(
        MacroDefinition::parse_directive_body("NOARGS() 1").map(|d| d.params),
        Some(Some(Vec::new()))
    );
}

#[test]
fn malformed_directives() {
    assert_eq!(MacroDefinition::parse_directive_body(""), None);
    assert_eq!(MacroDefinition::parse_directive_body("1abc 2"), None);
    assert_eq!(MacroDefinition::parse_directive_body("F(a, b"), None);
}

#[test]
fn directive_lines() {
    assert_eq!(
        MacroDefinition::parse_line("#define Int_n3 -(-(-3))"),
        Some(MacroDefinition::object_like("Int_n3", "-(-(-3))"))
    );
    assert_eq!(
        MacroDefinition::parse_line("  #  define\tX 1"),
        Some(MacroDefinition::object_like("X", "1"))
    );
    assert_eq!(MacroDefinition::parse_line("#include <stdio.h>"), None);
    assert_eq!(MacroDefinition::parse_line("#defineX 1"), None);
    assert_eq!(MacroDefinition::parse_line("int x = 1;"), None);
}
