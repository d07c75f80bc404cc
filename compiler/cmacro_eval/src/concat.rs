//! String concatenation.
//!
//! Two entry points share the encoding rule: [`merge_adjacent_strings`]
//! joins adjacent string literal tokens before parsing, and
//! [`concat_values`] joins the values of a juxtaposition chain after its
//! operands have been evaluated.
//!
//! Encoding rule: at most one distinct non-empty prefix may appear among
//! the operands. The result takes that prefix, or stays narrow when every
//! operand is unprefixed. Unprefixed operands keep their characters and are
//! re-encoded in the result encoding.

use cmacro_ir::{ConstantValue, Encoding, Span, StrValue, Token, TokenKind};

use crate::eval_error::{concat_non_string, concat_without_string, encoding_conflict, EvalError};

/// Tracks the prefixed encoding seen so far in one chain.
#[derive(Copy, Clone, Debug, Default)]
struct ChainEncoding {
    prefixed: Option<Encoding>,
}

impl ChainEncoding {
    fn add(&mut self, encoding: Encoding, span: Span) -> Result<(), EvalError> {
        if !encoding.is_prefixed() {
            return Ok(());
        }
        match self.prefixed {
            None => {
                self.prefixed = Some(encoding);
                Ok(())
            }
            Some(first) if first == encoding => Ok(()),
            Some(first) => Err(encoding_conflict(first, encoding, span)),
        }
    }

    fn result(self) -> Encoding {
        self.prefixed.unwrap_or(Encoding::Narrow)
    }
}

/// Merge every run of adjacent string literal tokens into one token.
///
/// The merged token spans the whole run. Other tokens pass through.
pub fn merge_adjacent_strings(tokens: Vec<Token>) -> Result<Vec<Token>, EvalError> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut run: Vec<Token> = Vec::new();

    for token in tokens {
        if matches!(token.kind, TokenKind::StringLiteral(_)) {
            run.push(token);
            continue;
        }
        flush_run(&mut run, &mut out)?;
        out.push(token);
    }
    flush_run(&mut run, &mut out)?;
    Ok(out)
}

fn flush_run(run: &mut Vec<Token>, out: &mut Vec<Token>) -> Result<(), EvalError> {
    if run.len() < 2 {
        out.append(run);
        return Ok(());
    }

    let mut encoding = ChainEncoding::default();
    let mut chars = Vec::new();
    let mut span: Option<Span> = None;
    for token in run.drain(..) {
        if let TokenKind::StringLiteral(value) = token.kind {
            encoding.add(value.encoding, token.span)?;
            chars.extend(value.chars);
            span = Some(span.map_or(token.span, |s| s.merge(token.span)));
        }
    }

    let merged = StrValue::new(encoding.result(), chars);
    out.push(Token::new(
        TokenKind::StringLiteral(merged),
        span.unwrap_or(Span::DUMMY),
    ));
    Ok(())
}

/// Concatenate the evaluated operands of a juxtaposition chain.
///
/// Every operand must be a string or a character, and at least one must be
/// a string. The first offending operand, left to right, decides the error.
pub fn concat_values(
    operands: Vec<(ConstantValue, Span)>,
    span: Span,
) -> Result<ConstantValue, EvalError> {
    let mut encoding = ChainEncoding::default();
    let mut chars = Vec::new();
    let mut has_string = false;

    for (value, operand_span) in operands {
        match value {
            ConstantValue::Str(s) => {
                encoding.add(s.encoding, operand_span)?;
                chars.extend(s.chars);
                has_string = true;
            }
            ConstantValue::Char(c) => {
                encoding.add(c.encoding, operand_span)?;
                chars.push(c.code);
            }
            other => return Err(concat_non_string(other.kind().name(), operand_span)),
        }
    }

    if !has_string {
        return Err(concat_without_string(span));
    }
    Ok(ConstantValue::Str(StrValue::new(encoding.result(), chars)))
}
