//! # Parameters Registry
//!
//! A process-wide table from operation name to the set of optional query parameters that
//! operation recognizes.
//!
//! The global table is filled from [`crate::actions::OPERATIONS`] the first time it is
//! accessed. It stays open for late registrations, but is otherwise read-mostly: sets are
//! built completely before being published, so concurrent readers never observe a
//! partially constructed entry.
use crate::actions::OPERATIONS;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};

/// The optional parameter names of one operation.
pub type ParamSet = HashSet<String>;

static REGISTRY: Lazy<ParamsRegistry> = Lazy::new(|| {
    let registry = ParamsRegistry::new();
    for operation in OPERATIONS {
        registry.register(operation.name, operation.params.iter().copied());
    }
    registry
});

/// Returns the process-wide registry.
pub fn registry() -> &'static ParamsRegistry {
    &REGISTRY
}

#[derive(Debug, Default)]
pub struct ParamsRegistry {
    entries: RwLock<HashMap<String, Arc<ParamSet>>>,
}

impl ParamsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the allowed parameters of `operation`, replacing any earlier registration.
    pub fn register<I, S>(&self, operation: &str, params: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: ParamSet = params.into_iter().map(Into::into).collect();

        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(operation.to_string(), Arc::new(set));
    }

    /// Returns the allowed parameters of `operation`.
    ///
    /// Unregistered operations get an empty set: they accept no optional parameters.
    pub fn get(&self, operation: &str) -> Arc<ParamSet> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(operation)
            .cloned()
            .unwrap_or_default()
    }

    /// Names of every registered operation, sorted.
    pub fn operations(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}
