//! Registry and builder for density-functional definitions
//!
//! Base definitions and a dispersion coefficient table are merged into an
//! alias-indexed `Registry`. `SuperFunctionalBuilder` validates a
//! registered definition and assembles an allocated `xc::SuperFunctional`
//! plus its optional dispersion correction.

pub mod builtin;
pub mod consistency;
pub mod construct;
pub mod dispersion;
pub mod error;
pub mod registry;
pub mod spec;

pub use consistency::{check_consistency, XcLayout};
pub use construct::SuperFunctionalBuilder;
pub use error::{FunctionalError, Result};
pub use registry::{build_registry, collect_aliases, Registry, RegistryBuilder};
pub use spec::{CoefficientTable, DispersionDescriptor, DispersionRow, FunctionalSpec};
