//! Declarative functional definitions
//!
//! These records mirror the YAML definition files one-to-one. Optional
//! sections are `None` when absent; which combination of sections is legal
//! is decided by `consistency::check_consistency`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Parameters of one exchange component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeParams {
    pub alpha: Option<f64>,
    pub omega: Option<f64>,
    pub tweak: Option<Vec<f64>>,
    /// Take the overall exact-exchange mixing from this component
    #[serde(default)]
    pub use_libxc: bool,
}

/// Exact (Hartree-Fock) exchange fractions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HfExchange {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub omega: Option<f64>,
    /// Component id in `x_functionals` the fractions are associated with
    pub use_libxc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationParams {
    pub alpha: Option<f64>,
    pub tweak: Option<Vec<f64>>,
}

/// MP2 correlation fractions for double hybrids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mp2Correlation {
    pub alpha: Option<f64>,
    pub ss: Option<f64>,
    pub os: Option<f64>,
}

/// Parameters of a bundled exchange-correlation component (none are used).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BundledParams {}

/// Empirical dispersion correction attached to a functional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispersionDescriptor {
    /// Canonical scheme id, e.g. `d3bj`
    #[serde(rename = "type")]
    pub kind: String,
    pub params: IndexMap<String, f64>,
    #[serde(default)]
    pub citation: Option<String>,
}

/// One row of a dispersion coefficient table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispersionRow {
    pub params: IndexMap<String, f64>,
    #[serde(default)]
    pub citation: Option<String>,
}

/// scheme id -> functional alias -> coefficients
pub type CoefficientTable = IndexMap<String, IndexMap<String, DispersionRow>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionalSpec {
    pub name: String,
    #[serde(default, alias = "alias")]
    pub aliases: Vec<String>,

    pub xc_functionals: Option<IndexMap<String, BundledParams>>,
    pub x_functionals: Option<IndexMap<String, ExchangeParams>>,
    pub x_hf: Option<HfExchange>,
    pub c_functionals: Option<IndexMap<String, CorrelationParams>>,
    pub c_mp2: Option<Mp2Correlation>,

    pub citation: Option<String>,
    pub description: Option<String>,
    pub dispersion: Option<DispersionDescriptor>,
}

impl FunctionalSpec {
    pub fn new(name: &str) -> Self {
        FunctionalSpec {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn has_exchange(&self) -> bool {
        self.x_functionals.is_some() || self.x_hf.is_some()
    }

    pub fn has_correlation(&self) -> bool {
        self.c_functionals.is_some() || self.c_mp2.is_some()
    }

    /// Copy of this spec decorated with a dispersion correction.
    pub fn with_dispersion(&self, scheme: &str, row: &DispersionRow) -> Self {
        let mut variant = self.clone();
        variant.name = format!("{}-{}", self.name, scheme);
        variant.dispersion = Some(DispersionDescriptor {
            kind: scheme.to_string(),
            params: row.params.clone(),
            citation: row.citation.clone(),
        });
        variant
    }
}
