//! cmacro eval - evaluator and error classifier for C macro constants.
//!
//! Turns the replacement text of an object-like macro into a typed
//! [`ConstantValue`], or into exactly one [`FailureRecord`] saying why it is
//! not a constant.
//!
//! # Pipeline
//!
//! 1. Classifier: function-like and empty definitions fail immediately
//! 2. `cmacro_lexer`: text to tokens, decoding every literal
//! 3. [`merge_adjacent_strings`]: adjacent string literals become one token
//! 4. `cmacro_parse`: tokens to an expression tree
//! 5. [`Evaluator`]: fold the tree, resolving references through a
//!    [`MacroLookup`]
//!
//! Each stage has its own error type; all of them convert into
//! `FailureRecord`, so the first failure left to right is the one reported.
//!
//! # Tracing
//!
//! Call [`init_tracing`] once and set `RUST_LOG` (for example
//! `RUST_LOG=cmacro_eval=debug`) to see every failure and deferred
//! resolution.

mod classify;
mod concat;
mod config;
mod definition;
mod eval_error;
mod evaluator;
mod lookup;
mod operators;
mod promotion;
mod tracing_setup;

pub use classify::{evaluate_definition, evaluate_definitions, evaluate_macro, Evaluated};
pub use concat::{concat_values, merge_adjacent_strings};
pub use config::{EvalConfig, DATA_MODEL_VAR, DEFAULT_MAX_REFERENCE_DEPTH, MAX_DEPTH_VAR};
pub use definition::MacroDefinition;
pub use eval_error::{EvalError, EvalErrorKind};
pub use evaluator::Evaluator;
pub use lookup::{EmptyLookup, Entry, MacroLookup, MacroTable, Resolution};
pub use operators::{evaluate_binary, evaluate_unary};
pub use promotion::{common_float_width, common_int_type, promote};
pub use tracing_setup::{init_tracing, LOG_TREE_VAR};

// Re-exports so callers need only this crate.
pub use cmacro_diagnostic::{FailureKind, FailureRecord};
pub use cmacro_ir::{
    CharCode, CharValue, ConstantValue, DataModel, Encoding, FloatValue, FloatWidth, IntRank,
    IntType, IntValue, Span, StrValue, ValueKind,
};
