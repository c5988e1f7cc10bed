use crate::consistency::{check_consistency, CorrelationLayout, ExchangeLayout, XcLayout};
use crate::error::{FunctionalError, Result};
use crate::registry::Registry;
use crate::spec::{BundledParams, DispersionDescriptor};
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info, warn};
use xc::{CamCoefficients, FunctionalFactory, LibXCFunctional, SuperFunctional, XC_HYB_CAM_COEF};

/// Citations and descriptions of the components, first occurrence wins.
#[derive(Default)]
struct References {
    citations: IndexSet<String>,
    descriptions: IndexSet<String>,
}

impl References {
    fn record(&mut self, func: &LibXCFunctional) {
        self.citations.insert(func.citation().to_string());
        self.descriptions.insert(func.description().to_string());
    }

    fn apply(&self, sup: &mut SuperFunctional) {
        let join = |set: &IndexSet<String>| {
            set.iter().map(String::as_str).collect::<Vec<_>>().join("\n")
        };
        sup.set_citation(&join(&self.citations));
        sup.set_description(&join(&self.descriptions));
    }
}

pub struct SuperFunctionalBuilder<'r, F: FunctionalFactory> {
    registry: &'r Registry,
    factory: F,
}

impl<'r, F: FunctionalFactory> SuperFunctionalBuilder<'r, F> {
    pub fn new(registry: &'r Registry, factory: F) -> Self {
        SuperFunctionalBuilder { registry, factory }
    }

    pub fn registry(&self) -> &Registry {
        self.registry
    }

    /// Build the functional registered as `name`.
    ///
    /// # Arguments
    ///
    /// * `name` - Functional name or alias, case-insensitive
    /// * `npoints` - Maximum number of grid points per block
    /// * `deriv` - Highest derivative order to allocate
    /// * `restricted` - Build spin-restricted components
    ///
    /// # Returns
    ///
    /// The allocated functional and its dispersion correction, if any
    pub fn build(
        &self,
        name: &str,
        npoints: usize,
        deriv: usize,
        restricted: bool,
    ) -> Result<(SuperFunctional, Option<DispersionDescriptor>)> {
        let spec = self.registry.lookup(name)?;
        let layout = check_consistency(spec)?;
        let display_name = name.to_uppercase();
        info!("Building functional {} from definition {}", display_name, spec.name);

        let mut sup = match layout {
            XcLayout::Bundled(components) => {
                self.build_bundled(&display_name, components, restricted)?
            }
            XcLayout::Separate {
                exchange,
                correlation,
            } => self.build_separate(exchange, correlation, restricted)?,
        };

        if let Some(citation) = &spec.citation {
            sup.set_citation(citation);
        }
        if let Some(description) = &spec.description {
            sup.set_description(description);
        }

        // an absent citation stays None on the returned copy
        let dispersion = spec.dispersion.clone();
        if let Some(d) = &dispersion {
            debug!("{} carries {} dispersion correction", display_name, d.kind);
        }

        sup.set_polarized(!restricted);
        sup.set_max_points(npoints);
        sup.set_deriv(deriv);
        sup.set_name(&display_name);
        sup.allocate()?;

        Ok((sup, dispersion))
    }

    fn build_bundled(
        &self,
        display_name: &str,
        components: &IndexMap<String, BundledParams>,
        restricted: bool,
    ) -> Result<SuperFunctional> {
        // Only the last listed component is built. Definitions are expected
        // to list exactly one.
        let component = components.keys().last().ok_or_else(|| {
            FunctionalError::MalformedInputData(format!(
                "functional {display_name} has an empty xc_functionals section"
            ))
        })?;
        if components.len() > 1 {
            warn!(
                "Functional {} lists {} bundled components, only {} is used",
                display_name,
                components.len(),
                component
            );
        }

        let mut sup = SuperFunctional::xc_build(self.factory.build(component, restricted)?);

        let mut description = format!("    {display_name} ");
        if sup.is_gga() {
            if sup.x_alpha() > 0.0 {
                description.push_str("Hyb-GGA ");
            } else {
                description.push_str("GGA ");
            }
        }
        description.push_str("Exchange-Correlation Functional\n");
        sup.set_description(&description);

        Ok(sup)
    }

    fn build_separate(
        &self,
        exchange: ExchangeLayout<'_>,
        correlation: CorrelationLayout<'_>,
        restricted: bool,
    ) -> Result<SuperFunctional> {
        let mut sup = SuperFunctional::blank();
        let mut references = References::default();
        let mut cam: Option<CamCoefficients> = None;

        for (id, params) in exchange.functionals.into_iter().flatten() {
            let mut func = self.factory.build(id, restricted)?;
            if params.use_libxc {
                cam = Some(func.query_libxc(XC_HYB_CAM_COEF)?);
                func.set_alpha(1.0);
            }
            if let Some(tweak) = &params.tweak {
                func.set_tweak(tweak.clone())?;
            }
            if let Some(alpha) = params.alpha {
                func.set_alpha(alpha);
            }
            if let Some(omega) = params.omega {
                func.set_omega(omega);
            }
            debug!("Exchange component {} with alpha {:.4}", func.name(), func.alpha());
            references.record(&func);
            sup.add_x_functional(func);
        }

        match exchange.hf {
            Some(hf) => {
                sup.set_x_alpha(hf.alpha.unwrap_or(0.0));
                sup.set_x_beta(hf.beta.unwrap_or(0.0));
                sup.set_x_omega(hf.omega.unwrap_or(0.0));
            }
            None => {
                let (alpha, beta, omega) = cam
                    .unwrap_or_else(CamCoefficients::zero)
                    .exchange_mixing();
                sup.set_x_alpha(alpha);
                sup.set_x_beta(beta);
                sup.set_x_omega(omega);
            }
        }

        for (id, params) in correlation.functionals.into_iter().flatten() {
            let mut func = self.factory.build(id, restricted)?;
            if let Some(tweak) = &params.tweak {
                func.set_tweak(tweak.clone())?;
            }
            func.set_alpha(params.alpha.unwrap_or(1.0));
            debug!("Correlation component {} with alpha {:.4}", func.name(), func.alpha());
            references.record(&func);
            sup.add_c_functional(func);
        }

        if let Some(mp2) = correlation.mp2 {
            sup.set_c_alpha(mp2.alpha.unwrap_or(0.0));
            if let Some(ss) = mp2.ss {
                sup.set_c_ss_alpha(ss);
            }
            if let Some(os) = mp2.os {
                sup.set_c_os_alpha(os);
            }
        }

        references.apply(&mut sup);
        Ok(sup)
    }
}
