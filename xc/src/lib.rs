//! Elementary and composite exchange-correlation functional objects.

pub mod catalog;
pub mod error;
pub mod libxc;
pub mod superfunctional;

pub use catalog::{
    CamCoefficients, ComponentCatalog, ComponentEntry, ComponentKind, Family, FunctionalFactory,
};
pub use error::XcError;
pub use libxc::{LibXCFunctional, XC_HYB_CAM_COEF};
pub use superfunctional::SuperFunctional;
