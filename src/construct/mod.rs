//! Construction of finalized composite functionals
//!
//! `SuperFunctionalBuilder::build` looks a name up in a `Registry`,
//! validates the definition and assembles an allocated `SuperFunctional`.
//! The dispersion correction, if the definition has one, is returned next
//! to it so the caller can add it as a separate energy term.

mod builder;

pub use builder::SuperFunctionalBuilder;
