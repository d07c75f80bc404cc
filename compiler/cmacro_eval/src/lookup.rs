//! Name resolution for macro references.
//!
//! The evaluator never owns macro storage; it asks a [`MacroLookup`] what a
//! name stands for. [`MacroTable`] is an append-only in-memory implementation
//! keyed by name.

use cmacro_ir::ConstantValue;
use rustc_hash::FxHashMap;

/// What a macro name stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// An already evaluated constant.
    Value(ConstantValue),
    /// A function-like macro; it has no constant value.
    FunctionLike,
    /// The name has no definition.
    NotFound,
    /// An object-like macro whose replacement text has not been evaluated
    /// yet. The evaluator evaluates it on demand under cycle detection.
    Deferred(String),
}

/// Read-only view of the macros defined so far.
pub trait MacroLookup {
    fn resolve(&self, name: &str) -> Resolution;
}

impl<T: MacroLookup + ?Sized> MacroLookup for &T {
    #[inline]
    fn resolve(&self, name: &str) -> Resolution {
        (**self).resolve(name)
    }
}

/// A stored macro.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Value(ConstantValue),
    FunctionLike,
    Deferred(String),
}

impl Entry {
    fn to_resolution(&self) -> Resolution {
        match self {
            Entry::Value(value) => Resolution::Value(value.clone()),
            Entry::FunctionLike => Resolution::FunctionLike,
            Entry::Deferred(text) => Resolution::Deferred(text.clone()),
        }
    }
}

/// In-memory macro table.
///
/// Inserting a name again replaces the earlier definition, like `#define`
/// after `#undef`; the previous entry is returned.
#[derive(Clone, Debug, Default)]
pub struct MacroTable {
    entries: FxHashMap<String, Entry>,
}

impl MacroTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_value(&mut self, name: impl Into<String>, value: ConstantValue) -> Option<Entry> {
        self.entries.insert(name.into(), Entry::Value(value))
    }

    pub fn insert_function_like(&mut self, name: impl Into<String>) -> Option<Entry> {
        self.entries.insert(name.into(), Entry::FunctionLike)
    }

    /// Store unevaluated replacement text.
    pub fn insert_deferred(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Option<Entry> {
        self.entries.insert(name.into(), Entry::Deferred(text.into()))
    }

    /// Forget `name`, like `#undef`.
    pub fn remove(&mut self, name: &str) -> Option<Entry> {
        self.entries.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// The constant stored under `name`, if it has been evaluated.
    pub fn value(&self, name: &str) -> Option<&ConstantValue> {
        match self.entries.get(name) {
            Some(Entry::Value(value)) => Some(value),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MacroLookup for MacroTable {
    fn resolve(&self, name: &str) -> Resolution {
        self.entries
            .get(name)
            .map_or(Resolution::NotFound, Entry::to_resolution)
    }
}

/// Resolves nothing; for evaluating self-contained text.
#[derive(Copy, Clone, Debug, Default)]
pub struct EmptyLookup;

impl MacroLookup for EmptyLookup {
    fn resolve(&self, _name: &str) -> Resolution {
        Resolution::NotFound
    }
}
