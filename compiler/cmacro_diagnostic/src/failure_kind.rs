use std::fmt;

/// Why a macro did not evaluate to a constant.
///
/// Closed set. Each kind has a stable code of the form M####, where the
/// second digit names the stage that detects it:
/// - M00xx: definition shape (classifier)
/// - M01xx: literal grammar (lexer)
/// - M02xx: name resolution
/// - M03xx: typed evaluation
/// - M04xx: expression syntax (parser)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FailureKind {
    /// Replacement text is attached to a parameter list
    FunctionLikeMacro,
    /// Empty or whitespace-only replacement text
    EmptyDefinition,
    /// Literal violates base, suffix or escape grammar, or is unterminated
    MalformedLiteral,
    /// Referenced name has no definition
    UnresolvedIdentifier,
    /// Referenced name is a function-like macro
    NonConstantReference,
    /// Referenced name transitively depends on itself
    CyclicReference,
    /// Operator applied to incompatible operand types
    TypeMismatch,
    /// Differing non-empty encoding prefixes among concatenated strings
    ConcatenationEncodingConflict,
    /// Constant integer division or modulo by zero
    DivisionByZero,
    /// Tokens do not form a valid expression
    SyntaxError,
}

impl FailureKind {
    pub const ALL: [FailureKind; 10] = [
        FailureKind::FunctionLikeMacro,
        FailureKind::EmptyDefinition,
        FailureKind::MalformedLiteral,
        FailureKind::UnresolvedIdentifier,
        FailureKind::NonConstantReference,
        FailureKind::CyclicReference,
        FailureKind::TypeMismatch,
        FailureKind::ConcatenationEncodingConflict,
        FailureKind::DivisionByZero,
        FailureKind::SyntaxError,
    ];

    /// Stable code for searchability.
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::FunctionLikeMacro => "M0001",
            FailureKind::EmptyDefinition => "M0002",
            FailureKind::MalformedLiteral => "M0101",
            FailureKind::UnresolvedIdentifier => "M0201",
            FailureKind::NonConstantReference => "M0202",
            FailureKind::CyclicReference => "M0203",
            FailureKind::TypeMismatch => "M0301",
            FailureKind::ConcatenationEncodingConflict => "M0302",
            FailureKind::DivisionByZero => "M0303",
            FailureKind::SyntaxError => "M0401",
        }
    }

    /// Variant name, as used in fixtures and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::FunctionLikeMacro => "FunctionLikeMacro",
            FailureKind::EmptyDefinition => "EmptyDefinition",
            FailureKind::MalformedLiteral => "MalformedLiteral",
            FailureKind::UnresolvedIdentifier => "UnresolvedIdentifier",
            FailureKind::NonConstantReference => "NonConstantReference",
            FailureKind::CyclicReference => "CyclicReference",
            FailureKind::TypeMismatch => "TypeMismatch",
            FailureKind::ConcatenationEncodingConflict => "ConcatenationEncodingConflict",
            FailureKind::DivisionByZero => "DivisionByZero",
            FailureKind::SyntaxError => "SyntaxError",
        }
    }

    /// Whether the failure comes from the referenced names rather than the
    /// macro's own text.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            FailureKind::UnresolvedIdentifier
                | FailureKind::NonConstantReference
                | FailureKind::CyclicReference
        )
    }

    /// Failures decided from the definition alone, before tokenizing.
    pub fn is_definition_failure(&self) -> bool {
        matches!(
            self,
            FailureKind::FunctionLikeMacro | FailureKind::EmptyDefinition
        )
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FailureKind::FunctionLikeMacro => "function-like macro",
            FailureKind::EmptyDefinition => "empty definition",
            FailureKind::MalformedLiteral => "malformed literal",
            FailureKind::UnresolvedIdentifier => "unresolved identifier",
            FailureKind::NonConstantReference => "reference to non-constant macro",
            FailureKind::CyclicReference => "cyclic reference",
            FailureKind::TypeMismatch => "type mismatch",
            FailureKind::ConcatenationEncodingConflict => "conflicting string encodings",
            FailureKind::DivisionByZero => "division by zero",
            FailureKind::SyntaxError => "syntax error",
        };
        f.write_str(text)
    }
}

impl std::str::FromStr for FailureKind {
    type Err = ();

    /// Parse either a code (`M0301`) or a variant name (`TypeMismatch`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FailureKind::ALL
            .into_iter()
            .find(|kind| kind.code() == s || kind.as_str() == s)
            .ok_or(())
    }
}
