//! Input/Output for the functional builder
//!
//! This module handles definition/coefficient file loading and logging setup.

mod loader;
mod output;

pub use loader::{load_coefficients, load_definitions};
pub use output::{setup_output, write_functional_summary};
