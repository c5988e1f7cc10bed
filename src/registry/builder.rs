use super::{AliasTable, Registry};
use crate::dispersion::DISPERSION_NAMES;
use crate::error::{FunctionalError, Result};
use crate::spec::{CoefficientTable, FunctionalSpec};
use indexmap::{IndexMap, IndexSet};
use std::sync::Arc;
use tracing::debug;

/// Uppercase spellings a spec answers to: its declared aliases, then its name.
pub fn collect_aliases(spec: &FunctionalSpec) -> IndexSet<String> {
    spec.aliases
        .iter()
        .chain(std::iter::once(&spec.name))
        .map(|a| a.to_uppercase())
        .collect()
}

/// Accumulates base definitions and their dispersion variants.
///
/// Explicit definitions always shadow generated `<ALIAS>-<SHORTNAME>` keys.
/// Merging a definition whose name is already registered replaces the
/// earlier one together with its aliases and variants.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    table: AliasTable,
    bases: IndexMap<String, Arc<FunctionalSpec>>,
    variants: IndexMap<String, AliasTable>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register each definition under all of its aliases.
    pub fn merge<I>(&mut self, definitions: I) -> &mut Self
    where
        I: IntoIterator<Item = FunctionalSpec>,
    {
        for spec in definitions {
            let spec = Arc::new(spec);
            let name = spec.name.to_uppercase();
            if let Some(previous) = self.bases.insert(name.clone(), Arc::clone(&spec)) {
                debug!("Redefining functional {}", previous.name);
                self.table.retain(|_, v| !Arc::ptr_eq(v, &previous));
                self.variants.shift_remove(&name);
            }
            for alias in collect_aliases(&spec) {
                self.table.insert(alias, Arc::clone(&spec));
            }
        }
        self
    }

    /// Synthesize `<ALIAS>-<SHORTNAME>` variants for every base definition
    /// that has coefficients in `coefficients`. Definitions that already
    /// carry a dispersion correction are skipped.
    pub fn expand_dispersion(&mut self, coefficients: &CoefficientTable) -> Result<&mut Self> {
        let mut synthesized = 0usize;
        for (name, base) in &self.bases {
            let mut generated = AliasTable::new();
            if base.dispersion.is_none() {
                let aliases = collect_aliases(base);
                for (short_name, scheme) in DISPERSION_NAMES {
                    let rows = coefficients.get(scheme).ok_or_else(|| {
                        FunctionalError::MalformedInputData(format!(
                            "dispersion coefficient table has no scheme '{scheme}'"
                        ))
                    })?;
                    let suffix = short_name.to_uppercase();

                    for (key, row) in rows {
                        if !aliases.contains(&key.to_uppercase()) {
                            continue;
                        }
                        let variant = Arc::new(base.with_dispersion(scheme, row));
                        for alias in &aliases {
                            generated.insert(format!("{alias}-{suffix}"), Arc::clone(&variant));
                        }
                        synthesized += 1;
                    }
                }
            }
            self.variants.insert(name.clone(), generated);
        }
        debug!(
            "Synthesized {} dispersion-corrected variants from {} base functionals",
            synthesized,
            self.bases.len()
        );
        Ok(self)
    }

    pub fn finish(self) -> Registry {
        let mut table = self.table;
        let explicit: IndexSet<String> = table.keys().cloned().collect();
        for (key, variant) in self.variants.into_values().flatten() {
            if explicit.contains(&key) {
                debug!("{} is defined explicitly; skipping generated {}", key, variant.name);
                continue;
            }
            table.insert(key, variant);
        }
        Registry::from_table(table)
    }
}

/// Merge `definitions`, expand their dispersion variants and freeze the result.
pub fn build_registry<I>(definitions: I, coefficients: &CoefficientTable) -> Result<Registry>
where
    I: IntoIterator<Item = FunctionalSpec>,
{
    let mut builder = RegistryBuilder::new();
    builder.merge(definitions).expand_dispersion(coefficients)?;
    let registry = builder.finish();
    debug!("Functional registry holds {} keys", registry.len());
    Ok(registry)
}
