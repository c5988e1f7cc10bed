//! Composite exchange-correlation functional
//!
//! A `SuperFunctional` is a weighted sum of elementary exchange and
//! correlation components plus exact (HF) exchange and MP2 correlation
//! fractions. Once its grid capacity and derivative order are set,
//! `allocate` sizes the per-point output buffers the evaluation engine
//! writes into.

extern crate nalgebra as na;

use crate::catalog::CamCoefficients;
use crate::error::XcError;
use crate::libxc::{LibXCFunctional, XC_HYB_CAM_COEF};
use indexmap::IndexMap;
use na::DVector;
use std::fmt;

#[derive(Clone, Debug, Default)]
pub struct SuperFunctional {
    name: String,
    description: String,
    citation: String,

    x_functionals: Vec<LibXCFunctional>,
    c_functionals: Vec<LibXCFunctional>,

    // exact exchange: global fraction, long-range fraction, range separation
    x_alpha: f64,
    x_beta: f64,
    x_omega: f64,

    // MP2 correlation: overall, same-spin and opposite-spin scaling
    c_alpha: f64,
    c_ss_alpha: f64,
    c_os_alpha: f64,

    // spin-polarized buffers requested regardless of the components
    polarized: bool,

    max_points: usize,
    deriv: usize,
    values: IndexMap<String, DVector<f64>>,
}

impl SuperFunctional {
    /// An empty functional with no components and no exact exchange.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Build a functional around a single bundled exchange-correlation component.
    pub fn xc_build(component: LibXCFunctional) -> Self {
        let mut sup = Self::blank();
        let (alpha, beta, omega) = component
            .query_libxc(XC_HYB_CAM_COEF)
            .unwrap_or_else(|_| CamCoefficients::zero())
            .exchange_mixing();
        sup.set_x_alpha(alpha);
        sup.set_x_beta(beta);
        sup.set_x_omega(omega);
        sup.set_name(component.name());
        sup.set_description(component.description());
        sup.set_citation(component.citation());
        sup.add_x_functional(component);
        sup
    }

    pub fn add_x_functional(&mut self, functional: LibXCFunctional) {
        self.x_functionals.push(functional);
    }

    pub fn add_c_functional(&mut self, functional: LibXCFunctional) {
        self.c_functionals.push(functional);
    }

    pub fn x_functionals(&self) -> &[LibXCFunctional] {
        &self.x_functionals
    }

    pub fn c_functionals(&self) -> &[LibXCFunctional] {
        &self.c_functionals
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub fn set_citation(&mut self, citation: &str) {
        self.citation = citation.to_string();
    }

    pub fn set_x_alpha(&mut self, alpha: f64) {
        self.x_alpha = alpha;
    }

    pub fn set_x_beta(&mut self, beta: f64) {
        self.x_beta = beta;
    }

    pub fn set_x_omega(&mut self, omega: f64) {
        self.x_omega = omega;
    }

    pub fn set_c_alpha(&mut self, alpha: f64) {
        self.c_alpha = alpha;
    }

    pub fn set_c_ss_alpha(&mut self, alpha: f64) {
        self.c_ss_alpha = alpha;
    }

    pub fn set_c_os_alpha(&mut self, alpha: f64) {
        self.c_os_alpha = alpha;
    }

    pub fn set_max_points(&mut self, max_points: usize) {
        self.max_points = max_points;
    }

    pub fn set_polarized(&mut self, polarized: bool) {
        self.polarized = polarized;
    }

    pub fn set_deriv(&mut self, deriv: usize) {
        self.deriv = deriv;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn citation(&self) -> &str {
        &self.citation
    }

    pub fn x_alpha(&self) -> f64 {
        self.x_alpha
    }

    pub fn x_beta(&self) -> f64 {
        self.x_beta
    }

    pub fn x_omega(&self) -> f64 {
        self.x_omega
    }

    pub fn c_alpha(&self) -> f64 {
        self.c_alpha
    }

    pub fn c_ss_alpha(&self) -> f64 {
        self.c_ss_alpha
    }

    pub fn c_os_alpha(&self) -> f64 {
        self.c_os_alpha
    }

    pub fn max_points(&self) -> usize {
        self.max_points
    }

    pub fn deriv(&self) -> usize {
        self.deriv
    }

    fn components(&self) -> impl Iterator<Item = &LibXCFunctional> {
        self.x_functionals.iter().chain(self.c_functionals.iter())
    }

    pub fn is_gga(&self) -> bool {
        self.components().any(|f| f.is_gga())
    }

    pub fn is_meta(&self) -> bool {
        self.components().any(|f| f.is_meta())
    }

    pub fn is_x_hybrid(&self) -> bool {
        self.x_alpha != 0.0
    }

    pub fn is_x_lrc(&self) -> bool {
        self.x_omega != 0.0
    }

    pub fn is_c_hybrid(&self) -> bool {
        self.c_alpha != 0.0 || self.c_ss_alpha != 0.0 || self.c_os_alpha != 0.0
    }

    /// Spin-unpolarized unless polarization was requested or any component
    /// was built unrestricted.
    pub fn is_unpolarized(&self) -> bool {
        !self.polarized && self.components().all(|f| f.is_restricted())
    }

    pub fn is_allocated(&self) -> bool {
        !self.values.is_empty()
    }

    pub fn value(&self, key: &str) -> Option<&DVector<f64>> {
        self.values.get(key)
    }

    pub fn value_keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    /// Size the output buffers: the energy density plus every partial
    /// derivative up to `deriv` over the density variables in use.
    pub fn allocate(&mut self) -> Result<(), XcError> {
        if self.max_points == 0 {
            return Err(XcError::EmptyGrid(self.name.clone()));
        }
        if self.deriv > 2 {
            return Err(XcError::UnsupportedDerivative {
                name: self.name.clone(),
                deriv: self.deriv,
            });
        }

        let variables = self.density_variables();
        let mut keys = vec!["V".to_string()];
        if self.deriv >= 1 {
            keys.extend(variables.iter().map(|v| format!("V_{v}")));
        }
        if self.deriv >= 2 {
            for (i, a) in variables.iter().enumerate() {
                for b in &variables[i..] {
                    keys.push(format!("V_{a}_{b}"));
                }
            }
        }

        self.values = keys
            .into_iter()
            .map(|k| (k, DVector::zeros(self.max_points)))
            .collect();
        Ok(())
    }

    fn density_variables(&self) -> Vec<&'static str> {
        let polarized = !self.is_unpolarized();
        let mut vars = if polarized {
            vec!["RHO_A", "RHO_B"]
        } else {
            vec!["RHO_A"]
        };
        if self.is_gga() {
            if polarized {
                vars.extend(["GAMMA_AA", "GAMMA_AB", "GAMMA_BB"]);
            } else {
                vars.push("GAMMA_AA");
            }
        }
        if self.is_meta() {
            if polarized {
                vars.extend(["TAU_A", "TAU_B"]);
            } else {
                vars.push("TAU_A");
            }
        }
        vars
    }
}

impl fmt::Display for SuperFunctional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |b: bool| if b { "TRUE" } else { "FALSE" };

        writeln!(f, "   => Composite Functional: {} <=", self.name)?;
        writeln!(f)?;
        for line in self.description.lines() {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;
        for line in self.citation.lines() {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;
        writeln!(f, "    Deriv            = {:>14}", self.deriv)?;
        writeln!(f, "    GGA              = {:>14}", flag(self.is_gga()))?;
        writeln!(f, "    Meta             = {:>14}", flag(self.is_meta()))?;
        writeln!(f, "    X_LRC            = {:>14}", flag(self.is_x_lrc()))?;
        writeln!(f, "    X_Hybrid         = {:>14}", flag(self.is_x_hybrid()))?;
        writeln!(f, "    X_Alpha          = {:>14.6}", self.x_alpha)?;
        writeln!(f, "    X_Beta           = {:>14.6}", self.x_beta)?;
        writeln!(f, "    X_Omega          = {:>14.6}", self.x_omega)?;
        writeln!(f, "    C_MP2            = {:>14}", flag(self.is_c_hybrid()))?;
        writeln!(f, "    C_Alpha          = {:>14.6}", self.c_alpha)?;
        writeln!(f, "    C_SS_Alpha       = {:>14.6}", self.c_ss_alpha)?;
        writeln!(f, "    C_OS_Alpha       = {:>14.6}", self.c_os_alpha)?;
        writeln!(f)?;
        writeln!(f, "   => Exchange Functionals <=")?;
        writeln!(f)?;
        for x in &self.x_functionals {
            writeln!(f, "    {:6.4}   {}", x.alpha(), x.description())?;
        }
        if self.is_x_hybrid() {
            writeln!(f, "    {:6.4}   HF", self.x_alpha)?;
        }
        writeln!(f)?;
        writeln!(f, "   => Correlation Functionals <=")?;
        writeln!(f)?;
        for c in &self.c_functionals {
            writeln!(f, "    {:6.4}   {}", c.alpha(), c.description())?;
        }
        if self.is_c_hybrid() {
            writeln!(f, "    {:6.4}   MP2", self.c_alpha)?;
        }
        Ok(())
    }
}
