use indexmap::IndexMap;
use num_bigint::BigInt;

/// Variable store for one calculator session.
///
/// Names are not validated here; the assignment handler checks them before
/// calling [`Environment::set`].
#[derive(Debug, Default, Clone)]
pub struct Environment {
    bindings: IndexMap<String, BigInt>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&BigInt> {
        self.bindings.get(name)
    }

    /// Binds `name`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: BigInt) {
        self.bindings.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in first-assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BigInt)> {
        self.bindings
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}
