//! Definitions and dispersion coefficients shipped with the crate

use crate::error::{FunctionalError, Result};
use crate::registry::{build_registry, Registry};
use crate::spec::{CoefficientTable, FunctionalSpec};

const FUNCTIONALS_YAML: &str = include_str!("../data/functionals.yaml");
const DASHCOEFF_YAML: &str = include_str!("../data/dashcoeff.yaml");

pub fn definitions() -> Result<Vec<FunctionalSpec>> {
    serde_yml::from_str(FUNCTIONALS_YAML).map_err(|e| {
        FunctionalError::MalformedInputData(format!("built-in functional definitions: {e}"))
    })
}

pub fn coefficients() -> Result<CoefficientTable> {
    serde_yml::from_str(DASHCOEFF_YAML).map_err(|e| {
        FunctionalError::MalformedInputData(format!("built-in dispersion coefficients: {e}"))
    })
}

/// Registry over the built-in definitions and coefficients.
pub fn registry() -> Result<Registry> {
    build_registry(definitions()?, &coefficients()?)
}
