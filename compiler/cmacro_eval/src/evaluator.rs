//! Tree-walking evaluator for macro expressions.
//!
//! Folds an [`Expr`] into a [`ConstantValue`], resolving references through
//! a [`MacroLookup`]. Deferred definitions are evaluated on demand; the
//! names being resolved are kept on an explicit stack so a reference back
//! into it fails with `CyclicReference` instead of recursing.

use cmacro_diagnostic::FailureRecord;
use cmacro_ir::{ConstantValue, Expr, ExprKind, Span};
use cmacro_stack::ensure_sufficient_stack;
use smallvec::SmallVec;
use tracing::debug;

use crate::concat::{concat_values, merge_adjacent_strings};
use crate::eval_error::{
    concat_non_string, cyclic_reference, in_expansion, non_constant_reference, reference_too_deep,
    unresolved_identifier, EvalError,
};
use crate::lookup::{MacroLookup, Resolution};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::EvalConfig;

/// Evaluator state for one macro.
pub struct Evaluator<'a, L: MacroLookup + ?Sized> {
    lookup: &'a L,
    config: &'a EvalConfig,
    /// Names whose replacement text is being evaluated, outermost first.
    stack: SmallVec<[String; 8]>,
}

impl<'a, L: MacroLookup + ?Sized> Evaluator<'a, L> {
    /// Evaluator for anonymous text; nothing is on the resolution stack.
    pub fn new(lookup: &'a L, config: &'a EvalConfig) -> Self {
        Evaluator {
            lookup,
            config,
            stack: SmallVec::new(),
        }
    }

    /// Evaluator for the replacement text of `name`, which is pushed first
    /// so that a self-reference is detected.
    pub fn for_macro(name: &str, lookup: &'a L, config: &'a EvalConfig) -> Self {
        let mut evaluator = Self::new(lookup, config);
        evaluator.stack.push(name.to_owned());
        evaluator
    }

    /// Names currently being resolved, outermost first.
    pub fn resolution_stack(&self) -> &[String] {
        &self.stack
    }

    /// Run the whole pipeline on a replacement text: lex, merge adjacent
    /// strings, parse and fold.
    pub fn evaluate_text(&mut self, text: &str) -> Result<ConstantValue, FailureRecord> {
        if cmacro_lexer::is_blank(text) {
            return Err(FailureRecord::empty_definition(whole_span(text)));
        }
        let tokens = cmacro_lexer::lex(text)?;
        let tokens = merge_adjacent_strings(tokens)?;
        let expr = cmacro_parse::parse(&tokens)?;
        self.eval(&expr).map_err(FailureRecord::from)
    }

    /// Fold an expression tree.
    pub fn eval(&mut self, expr: &Expr) -> Result<ConstantValue, EvalError> {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &Expr) -> Result<ConstantValue, EvalError> {
        let model = self.config.data_model;
        match &expr.kind {
            ExprKind::Literal(lit) => Ok(lit.to_value(model)),
            ExprKind::Reference(name) => self.eval_reference(name, expr.span),
            ExprKind::Paren(inner) => self.eval(inner),
            ExprKind::Unary { op, operand } => {
                let value = self.eval(operand)?;
                evaluate_unary(*op, &value, expr.span, model)
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(*op, &left, &right, expr.span, model)
            }
            ExprKind::Concat(operands) => {
                let mut values = Vec::with_capacity(operands.len());
                for operand in operands {
                    let value = self.eval(operand)?;
                    if !matches!(value, ConstantValue::Str(_) | ConstantValue::Char(_)) {
                        return Err(concat_non_string(value.kind().name(), operand.span));
                    }
                    values.push((value, operand.span));
                }
                concat_values(values, expr.span)
            }
        }
    }

    fn eval_reference(&mut self, name: &str, span: Span) -> Result<ConstantValue, EvalError> {
        if self.stack.iter().any(|n| n == name) {
            return Err(cyclic_reference(name, &self.stack, span));
        }
        match self.lookup.resolve(name) {
            Resolution::Value(value) => Ok(value),
            Resolution::FunctionLike => Err(non_constant_reference(name, span)),
            Resolution::NotFound => Err(unresolved_identifier(name, span)),
            Resolution::Deferred(text) => self.eval_deferred(name, &text, span),
        }
    }

    /// Evaluate the replacement text of `name` in place of the reference.
    fn eval_deferred(
        &mut self,
        name: &str,
        text: &str,
        span: Span,
    ) -> Result<ConstantValue, EvalError> {
        let limit = self.config.max_reference_depth;
        if self.stack.len() >= limit {
            return Err(reference_too_deep(name, limit, span));
        }

        debug!(name, depth = self.stack.len(), "resolving deferred definition");
        self.stack.push(name.to_owned());
        let result = self.evaluate_text(text);
        self.stack.pop();

        result.map_err(|record| in_expansion(name, record, span))
    }
}

/// Span covering all of `text`.
pub(crate) fn whole_span(text: &str) -> Span {
    Span::covering(text).unwrap_or(Span::DUMMY)
}
