//! Evaluation configuration.
//!
//! Settings that change the *value* of a constant (integer widths) or bound
//! the work done for one macro. Built with `Default` plus `with_*` methods,
//! or read from the environment:
//!
//! - `CMACRO_DATA_MODEL=lp64|llp64`: integer widths (default `lp64`)
//! - `CMACRO_MAX_DEPTH=<n>`: maximum nesting of macro references (default 32)

use cmacro_ir::DataModel;
use tracing::warn;

/// Default bound on nested macro references.
pub const DEFAULT_MAX_REFERENCE_DEPTH: usize = 32;

pub const DATA_MODEL_VAR: &str = "CMACRO_DATA_MODEL";
pub const MAX_DEPTH_VAR: &str = "CMACRO_MAX_DEPTH";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EvalConfig {
    /// Bit widths of `int`, `long` and `long long`.
    pub data_model: DataModel,
    /// Deepest chain of deferred references followed before giving up with
    /// `CyclicReference`.
    pub max_reference_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            data_model: DataModel::default(),
            max_reference_depth: DEFAULT_MAX_REFERENCE_DEPTH,
        }
    }
}

impl EvalConfig {
    #[must_use]
    pub fn with_data_model(mut self, data_model: DataModel) -> Self {
        self.data_model = data_model;
        self
    }

    #[must_use]
    pub fn with_max_reference_depth(mut self, depth: usize) -> Self {
        self.max_reference_depth = depth;
        self
    }

    /// Configuration from `CMACRO_DATA_MODEL` and `CMACRO_MAX_DEPTH`.
    ///
    /// Unset variables keep their defaults; unparsable ones are ignored with
    /// a warning.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = EvalConfig::default();

        if let Some(raw) = var(DATA_MODEL_VAR) {
            match parse_data_model(&raw) {
                Some(model) => config.data_model = model,
                None => warn!(var = DATA_MODEL_VAR, value = %raw, "unknown data model, using lp64"),
            }
        }
        if let Some(raw) = var(MAX_DEPTH_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(depth) => config.max_reference_depth = depth,
                Err(err) => warn!(var = MAX_DEPTH_VAR, value = %raw, %err, "ignoring invalid depth"),
            }
        }
        config
    }
}

fn parse_data_model(raw: &str) -> Option<DataModel> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "lp64" => Some(DataModel::Lp64),
        "llp64" => Some(DataModel::Llp64),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
