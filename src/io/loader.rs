//! YAML definition and coefficient file loading

use color_eyre::eyre::{Result, WrapErr};
use dft_funcs::{CoefficientTable, FunctionalSpec};
use std::fs;
use tracing::info;

/// Read a list of functional definitions from a YAML file
pub fn load_definitions(path: &str) -> Result<Vec<FunctionalSpec>> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read functional definitions: {}", path))?;
    let definitions: Vec<FunctionalSpec> = serde_yml::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse functional definitions: {}", path))?;
    info!("Loaded {} functional definitions from {}", definitions.len(), path);
    Ok(definitions)
}

/// Read a dispersion coefficient table from a YAML file
pub fn load_coefficients(path: &str) -> Result<CoefficientTable> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read dispersion coefficients: {}", path))?;
    let table: CoefficientTable = serde_yml::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse dispersion coefficients: {}", path))?;
    info!("Loaded dispersion coefficients for {} schemes from {}", table.len(), path);
    Ok(table)
}
