//! Consistency checks on a single functional definition
//!
//! A definition describes exchange and correlation either with one bundled
//! `xc_functionals` entry or with separate exchange (`x_functionals`,
//! `x_hf`) and correlation (`c_functionals`, `c_mp2`) sections. The checks
//! run in a fixed order and the first failure is returned. A passing
//! definition yields an `XcLayout` so later stages match on the layout
//! instead of probing optional sections again.

#[cfg(test)]
mod tests;

use crate::error::{FunctionalError, Result};
use crate::spec::{
    BundledParams, CorrelationParams, ExchangeParams, FunctionalSpec, HfExchange, Mp2Correlation,
};
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeLayout<'a> {
    pub functionals: Option<&'a IndexMap<String, ExchangeParams>>,
    pub hf: Option<&'a HfExchange>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationLayout<'a> {
    pub functionals: Option<&'a IndexMap<String, CorrelationParams>>,
    pub mp2: Option<&'a Mp2Correlation>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XcLayout<'a> {
    Bundled(&'a IndexMap<String, BundledParams>),
    Separate {
        exchange: ExchangeLayout<'a>,
        correlation: CorrelationLayout<'a>,
    },
}

pub fn check_consistency(spec: &FunctionalSpec) -> Result<XcLayout<'_>> {
    let name = || spec.name.clone();

    if let Some(bundled) = &spec.xc_functionals {
        if spec.has_exchange() {
            return Err(FunctionalError::DuplicateExchangeSpec(name()));
        }
        if spec.has_correlation() {
            return Err(FunctionalError::DuplicateCorrelationSpec(name()));
        }
        return Ok(XcLayout::Bundled(bundled));
    }

    if !spec.has_exchange() {
        return Err(FunctionalError::MissingExchangeSpec(name()));
    }
    if !spec.has_correlation() {
        return Err(FunctionalError::MissingCorrelationSpec(name()));
    }

    let hybrid_requests = spec
        .x_functionals
        .iter()
        .flat_map(|x| x.values())
        .filter(|params| params.use_libxc)
        .count();
    if hybrid_requests > 1 {
        return Err(FunctionalError::DuplicateHybridRequest(name()));
    }
    if hybrid_requests == 1 && spec.x_hf.is_some() {
        return Err(FunctionalError::InconsistentExchangeSpec(name()));
    }

    if let Some(component) = spec.x_hf.as_ref().and_then(|hf| hf.use_libxc.as_ref()) {
        let defined = spec
            .x_functionals
            .as_ref()
            .is_some_and(|x| x.contains_key(component));
        if !defined {
            return Err(FunctionalError::UnresolvedHybridReference {
                name: name(),
                component: component.clone(),
            });
        }
    }

    Ok(XcLayout::Separate {
        exchange: ExchangeLayout {
            functionals: spec.x_functionals.as_ref(),
            hf: spec.x_hf.as_ref(),
        },
        correlation: CorrelationLayout {
            functionals: spec.c_functionals.as_ref(),
            mp2: spec.c_mp2.as_ref(),
        },
    })
}
