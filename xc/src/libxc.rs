//! Elementary exchange or correlation functional

use crate::catalog::{CamCoefficients, ComponentEntry, Family};
use crate::error::XcError;

/// Identifier of the CAM hybrid-coefficient query
pub const XC_HYB_CAM_COEF: &str = "XC_HYB_CAM_COEF";

#[derive(Clone, Debug, PartialEq)]
pub struct LibXCFunctional {
    name: String,
    family: Family,
    description: String,
    citation: String,
    restricted: bool,
    // mixing coefficient inside the composite functional
    alpha: f64,
    // range-separation parameter, zero for global functionals
    omega: f64,
    tweak: Vec<f64>,
    tweak_len: usize,
    cam: Option<CamCoefficients>,
}

impl LibXCFunctional {
    pub fn new(entry: &ComponentEntry, restricted: bool) -> Self {
        LibXCFunctional {
            name: format!("XC_{}", entry.id),
            family: entry.family,
            description: entry.description.clone(),
            citation: entry.citation.clone(),
            restricted,
            alpha: 1.0,
            omega: entry.cam.map(|c| c.omega).unwrap_or(0.0),
            tweak: Vec::new(),
            tweak_len: entry.tweak_len,
            cam: entry.cam,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn citation(&self) -> &str {
        &self.citation
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn omega(&self) -> f64 {
        self.omega
    }

    pub fn tweak(&self) -> &[f64] {
        &self.tweak
    }

    pub fn is_restricted(&self) -> bool {
        self.restricted
    }

    pub fn is_gga(&self) -> bool {
        matches!(self.family, Family::Gga | Family::MetaGga)
    }

    pub fn is_meta(&self) -> bool {
        self.family == Family::MetaGga
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    pub fn set_omega(&mut self, omega: f64) {
        self.omega = omega;
    }

    /// Replace the external parameters of the underlying functional.
    pub fn set_tweak(&mut self, tweak: Vec<f64>) -> Result<(), XcError> {
        if tweak.len() != self.tweak_len {
            return Err(XcError::InvalidTweak {
                component: self.name.clone(),
                expected: self.tweak_len,
                found: tweak.len(),
            });
        }
        self.tweak = tweak;
        Ok(())
    }

    /// Query a named coefficient set. Only `XC_HYB_CAM_COEF` is understood.
    pub fn query_libxc(&self, query: &str) -> Result<CamCoefficients, XcError> {
        if query != XC_HYB_CAM_COEF {
            return Err(XcError::UnknownQuery {
                component: self.name.clone(),
                query: query.to_string(),
            });
        }
        self.cam.ok_or_else(|| XcError::NotHybrid(self.name.clone()))
    }
}
