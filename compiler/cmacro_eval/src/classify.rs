//! Classifier entry points.
//!
//! Decides the definition-shape failures (function-like, empty), runs the
//! pipeline otherwise, and reports exactly one [`FailureRecord`] per failing
//! macro.

use cmacro_diagnostic::FailureRecord;
use cmacro_ir::ConstantValue;
use tracing::debug;

use crate::evaluator::{whole_span, Evaluator};
use crate::lookup::{MacroLookup, MacroTable};
use crate::{EvalConfig, MacroDefinition};

/// Evaluate the replacement text of macro `name`.
///
/// References resolve through `lookup`; `name` itself counts as being
/// resolved, so a self-reference is a `CyclicReference`.
#[tracing::instrument(level = "debug", skip_all, fields(name = %name))]
pub fn evaluate_macro<L: MacroLookup + ?Sized>(
    name: &str,
    text: &str,
    function_like: bool,
    lookup: &L,
    config: &EvalConfig,
) -> Result<ConstantValue, FailureRecord> {
    if function_like {
        let record = FailureRecord::function_like(whole_span(text));
        debug!(kind = %record.kind, code = record.kind.code(), "not an object-like macro");
        return Err(record);
    }

    let result = Evaluator::for_macro(name, lookup, config).evaluate_text(text);
    match &result {
        Ok(value) => debug!(%value, ty = value.type_name(), "evaluated"),
        Err(record) => debug!(
            kind = %record.kind,
            code = record.kind.code(),
            span = %record.span,
            message = %record.message,
            "evaluation failed"
        ),
    }
    result
}

/// Evaluate one parsed definition.
pub fn evaluate_definition<L: MacroLookup + ?Sized>(
    definition: &MacroDefinition,
    lookup: &L,
    config: &EvalConfig,
) -> Result<ConstantValue, FailureRecord> {
    evaluate_macro(
        &definition.name,
        &definition.body,
        definition.is_function_like(),
        lookup,
        config,
    )
}

/// Outcome for one definition of a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluated {
    pub name: String,
    pub result: Result<ConstantValue, FailureRecord>,
}

/// Evaluate definitions in order, committing each outcome to `table`.
///
/// A successful value is stored for later definitions to reference.
/// Function-like macros are stored as such. A failed object-like
/// definition removes any earlier entry under its name, so later references
/// report `UnresolvedIdentifier`.
pub fn evaluate_definitions(
    definitions: &[MacroDefinition],
    table: &mut MacroTable,
    config: &EvalConfig,
) -> Vec<Evaluated> {
    let mut out = Vec::with_capacity(definitions.len());
    for definition in definitions {
        let result = evaluate_definition(definition, &*table, config);
        match &result {
            Ok(value) => {
                table.insert_value(definition.name.clone(), value.clone());
            }
            Err(_) if definition.is_function_like() => {
                table.insert_function_like(definition.name.clone());
            }
            Err(_) => {
                table.remove(&definition.name);
            }
        }
        out.push(Evaluated {
            name: definition.name.clone(),
            result,
        });
    }
    out
}
