use std::collections::HashMap;

use crate::interpreter::value::ternary::Ternary;

/// Variable bindings of one program run.
///
/// Besides the name → value map the store counts how many unsure atoms have
/// been instantiated, since the count decides the size of the next atom's
/// table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    values:       HashMap<String, Ternary>,
    unsure_count: usize,
}

impl Store {
    /// Creates an empty store with no unsure atom instantiated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Ternary> {
        self.values.get(name)
    }

    /// Binds `value` to `name` and returns the value it replaces.
    pub fn assign(&mut self, name: impl Into<String>, value: Ternary) -> Option<Ternary> {
        self.values.insert(name.into(), value)
    }

    /// Number of unsure atoms instantiated so far.
    #[must_use]
    pub const fn unsure_count(&self) -> usize {
        self.unsure_count
    }

    /// Instantiates the next unsure atom.
    ///
    /// # Example
    /// ```
    /// use lej::interpreter::evaluator::store::Store;
    ///
    /// let mut store = Store::new();
    /// assert_eq!(store.fresh_unsure().rows(), &[2, 0]);
    /// assert_eq!(store.fresh_unsure().rows(), &[2, 2, 0, 0]);
    /// assert_eq!(store.unsure_count(), 2);
    /// ```
    pub fn fresh_unsure(&mut self) -> Ternary {
        self.unsure_count += 1;
        Ternary::unsure_atom(self.unsure_count)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All bindings, ordered by name.
    #[must_use]
    pub fn bindings(&self) -> Vec<(&str, &Ternary)> {
        let mut bindings: Vec<_> = self.values.iter().map(|(k, v)| (k.as_str(), v)).collect();
        bindings.sort_unstable_by_key(|(name, _)| *name);
        bindings
    }
}
