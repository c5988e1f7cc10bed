//! Alias-indexed functional registry
//!
//! `build_registry` turns base definitions plus a dispersion coefficient
//! table into an immutable `Registry`. Every name, alias and synthesized
//! `<ALIAS>-<SCHEME>` key maps to a shared `FunctionalSpec`.

mod builder;

pub use builder::{build_registry, collect_aliases, RegistryBuilder};

use crate::error::{FunctionalError, Result};
use crate::spec::FunctionalSpec;
use indexmap::IndexMap;
use std::sync::Arc;

/// Uppercase alias -> shared spec.
pub type AliasTable = IndexMap<String, Arc<FunctionalSpec>>;

/// Read-only view over a finished alias table.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    functionals: AliasTable,
}

impl Registry {
    pub(crate) fn from_table(functionals: AliasTable) -> Self {
        Registry { functionals }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&Arc<FunctionalSpec>> {
        self.functionals.get(&name.to_uppercase())
    }

    pub fn lookup(&self, name: &str) -> Result<&Arc<FunctionalSpec>> {
        self.get(name)
            .ok_or_else(|| FunctionalError::UnknownFunctional(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.functionals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functionals.is_empty()
    }

    /// Registered keys in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functionals.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<FunctionalSpec>)> {
        self.functionals.iter().map(|(k, v)| (k.as_str(), v))
    }
}
