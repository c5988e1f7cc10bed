//! Component catalog backing the elementary functional factory.
//!
//! Each entry carries the metadata the registry builder needs from a
//! component: family, role, citation, description and, for hybrids, the
//! CAM exchange coefficients reported by `XC_HYB_CAM_COEF`.

use crate::error::XcError;
use crate::libxc::LibXCFunctional;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rung of the density-functional ladder a component sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Family {
    Lda,
    Gga,
    MetaGga,
}

/// What a component contributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentKind {
    Exchange,
    Correlation,
    ExchangeCorrelation,
}

/// Coulomb-attenuated hybrid coefficients: full-range fraction, short-range
/// correction and range-separation parameter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CamCoefficients {
    pub alpha: f64,
    pub beta: f64,
    pub omega: f64,
}

impl CamCoefficients {
    pub fn zero() -> Self {
        CamCoefficients {
            alpha: 0.0,
            beta: 0.0,
            omega: 0.0,
        }
    }

    /// Overall (alpha, beta, omega) exchange mixing for a composite functional.
    pub fn exchange_mixing(&self) -> (f64, f64, f64) {
        (self.alpha + self.beta, self.alpha - self.beta, self.omega)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub id: String,
    pub family: Family,
    pub kind: ComponentKind,
    pub description: String,
    pub citation: String,
    /// Number of external parameters accepted by `set_tweak`
    #[serde(default)]
    pub tweak_len: usize,
    #[serde(default)]
    pub cam: Option<CamCoefficients>,
}

impl ComponentEntry {
    pub fn new(
        id: &str,
        family: Family,
        kind: ComponentKind,
        description: &str,
        citation: &str,
    ) -> Self {
        ComponentEntry {
            id: id.to_uppercase(),
            family,
            kind,
            description: description.to_string(),
            citation: citation.to_string(),
            tweak_len: 0,
            cam: None,
        }
    }

    pub fn with_tweak_len(mut self, tweak_len: usize) -> Self {
        self.tweak_len = tweak_len;
        self
    }

    pub fn hybrid(mut self, alpha: f64, beta: f64, omega: f64) -> Self {
        self.cam = Some(CamCoefficients { alpha, beta, omega });
        self
    }
}

/// Builds elementary functionals from a component id and a spin flag.
pub trait FunctionalFactory {
    fn build(&self, component: &str, restricted: bool) -> Result<LibXCFunctional, XcError>;
}

/// Lookup table of known components, keyed by uppercase id.
#[derive(Clone, Debug, Default)]
pub struct ComponentCatalog {
    entries: HashMap<String, ComponentEntry>,
}

impl ComponentCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        for entry in builtin_entries() {
            catalog.insert(entry);
        }
        catalog
    }

    pub fn insert(&mut self, entry: ComponentEntry) {
        self.entries.insert(entry.id.to_uppercase(), entry);
    }

    pub fn with_entry(mut self, entry: ComponentEntry) -> Self {
        self.insert(entry);
        self
    }

    pub fn get(&self, component: &str) -> Option<&ComponentEntry> {
        self.entries.get(&component.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FunctionalFactory for ComponentCatalog {
    fn build(&self, component: &str, restricted: bool) -> Result<LibXCFunctional, XcError> {
        let entry = self
            .get(component)
            .ok_or_else(|| XcError::UnknownComponent(component.to_string()))?;
        Ok(LibXCFunctional::new(entry, restricted))
    }
}

const PBE96: &str = "J. P. Perdew, K. Burke, and M. Ernzerhof, Phys. Rev. Lett. 77, 3865 (1996)";
const VWN80: &str = "S. H. Vosko, L. Wilk, and M. Nusair, Can. J. Phys. 58, 1200 (1980)";
const TPSS03: &str =
    "J. Tao, J. P. Perdew, V. N. Staroverov, and G. E. Scuseria, Phys. Rev. Lett. 91, 146401 (2003)";

fn builtin_entries() -> Vec<ComponentEntry> {
    use ComponentKind::*;
    use Family::*;

    vec![
        // LDA
        ComponentEntry::new(
            "LDA_X",
            Lda,
            Exchange,
            "Slater exchange",
            "P. A. M. Dirac, Math. Proc. Cambridge Philos. Soc. 26, 376 (1930)",
        ),
        ComponentEntry::new("LDA_C_VWN", Lda, Correlation, "Vosko, Wilk & Nusair (VWN5)", VWN80),
        ComponentEntry::new(
            "LDA_C_VWN_RPA",
            Lda,
            Correlation,
            "Vosko, Wilk & Nusair (VWN5_RPA)",
            VWN80,
        ),
        ComponentEntry::new(
            "LDA_C_PW",
            Lda,
            Correlation,
            "Perdew & Wang",
            "J. P. Perdew and Y. Wang, Phys. Rev. B 45, 13244 (1992)",
        ),
        ComponentEntry::new(
            "LDA_C_PZ",
            Lda,
            Correlation,
            "Perdew & Zunger",
            "J. P. Perdew and A. Zunger, Phys. Rev. B 23, 5048 (1981)",
        ),
        // GGA exchange
        ComponentEntry::new(
            "GGA_X_B88",
            Gga,
            Exchange,
            "Becke 88",
            "A. D. Becke, Phys. Rev. A 38, 3098 (1988)",
        ),
        ComponentEntry::new("GGA_X_PBE", Gga, Exchange, "Perdew, Burke & Ernzerhof", PBE96)
            .with_tweak_len(2),
        ComponentEntry::new(
            "GGA_X_PW91",
            Gga,
            Exchange,
            "Perdew & Wang 91",
            "J. P. Perdew, Electronic Structure of Solids '91, edited by P. Ziesche and H. Eschrig, p. 11 (1991)",
        ),
        ComponentEntry::new(
            "GGA_X_HJS_PBE",
            Gga,
            Exchange,
            "HJS screened exchange PBE version",
            "T. M. Henderson, B. G. Janesko, and G. E. Scuseria, J. Chem. Phys. 128, 194105 (2008)",
        ),
        // GGA correlation
        ComponentEntry::new(
            "GGA_C_LYP",
            Gga,
            Correlation,
            "Lee, Yang & Parr",
            "C. Lee, W. Yang, and R. G. Parr, Phys. Rev. B 37, 785 (1988)",
        ),
        ComponentEntry::new("GGA_C_PBE", Gga, Correlation, "Perdew, Burke & Ernzerhof", PBE96),
        ComponentEntry::new(
            "GGA_C_P86",
            Gga,
            Correlation,
            "Perdew 86",
            "J. P. Perdew, Phys. Rev. B 33, 8822 (1986)",
        ),
        ComponentEntry::new(
            "GGA_C_PW91",
            Gga,
            Correlation,
            "Perdew & Wang 91",
            "J. P. Perdew, J. A. Chevary, S. H. Vosko, K. A. Jackson, M. R. Pederson, D. J. Singh, and C. Fiolhais, Phys. Rev. B 46, 6671 (1992)",
        ),
        // meta-GGA
        ComponentEntry::new(
            "MGGA_X_TPSS",
            MetaGga,
            Exchange,
            "Tao, Perdew, Staroverov & Scuseria",
            TPSS03,
        ),
        ComponentEntry::new(
            "MGGA_C_TPSS",
            MetaGga,
            Correlation,
            "Tao, Perdew, Staroverov & Scuseria",
            TPSS03,
        ),
        // bundled and hybrid exchange-correlation
        ComponentEntry::new(
            "GGA_XC_B97_D",
            Gga,
            ExchangeCorrelation,
            "Becke 97-D",
            "S. Grimme, J. Comput. Chem. 27, 1787 (2006)",
        ),
        ComponentEntry::new(
            "HYB_GGA_XC_B3LYP",
            Gga,
            ExchangeCorrelation,
            "B3LYP",
            "P. J. Stephens, F. J. Devlin, C. F. Chabalowski, and M. J. Frisch, J. Phys. Chem. 98, 11623 (1994)",
        )
        .hybrid(0.2, 0.0, 0.0),
        ComponentEntry::new(
            "HYB_GGA_XC_PBEH",
            Gga,
            ExchangeCorrelation,
            "PBEH (PBE0)",
            "C. Adamo and V. Barone, J. Chem. Phys. 110, 6158 (1999)",
        )
        .hybrid(0.25, 0.0, 0.0),
        ComponentEntry::new(
            "HYB_GGA_XC_CAM_B3LYP",
            Gga,
            ExchangeCorrelation,
            "CAM version of B3LYP",
            "T. Yanai, D. P. Tew, and N. C. Handy, Chem. Phys. Lett. 393, 51 (2004)",
        )
        .hybrid(0.65, -0.46, 0.33),
        ComponentEntry::new(
            "HYB_GGA_XC_WB97X",
            Gga,
            ExchangeCorrelation,
            "wB97X range-separated functional",
            "J.-D. Chai and M. Head-Gordon, J. Chem. Phys. 128, 084106 (2008)",
        )
        .hybrid(1.0, -0.842294, 0.3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup_is_case_insensitive() {
        let catalog = ComponentCatalog::builtin();
        let entry = catalog.get("gga_x_b88").unwrap();
        assert_eq!(entry.id, "GGA_X_B88");
        assert_eq!(entry.family, Family::Gga);
    }

    #[test]
    fn test_unknown_component() {
        let catalog = ComponentCatalog::builtin();
        let err = catalog.build("GGA_X_NOPE", true).unwrap_err();
        assert_eq!(err, XcError::UnknownComponent("GGA_X_NOPE".to_string()));
    }

    #[test]
    fn test_custom_entry_overrides_builtin() {
        let catalog = ComponentCatalog::builtin().with_entry(
            ComponentEntry::new("LDA_X", Family::Lda, ComponentKind::Exchange, "mine", "me")
                .hybrid(0.5, 0.0, 0.0),
        );
        let func = catalog.build("LDA_X", true).unwrap();
        assert_eq!(func.description(), "mine");
        assert!(func.query_libxc("XC_HYB_CAM_COEF").is_ok());
    }

    #[test]
    fn test_exchange_mixing() {
        let cam = CamCoefficients {
            alpha: 0.65,
            beta: -0.46,
            omega: 0.33,
        };
        let (alpha, beta, omega) = cam.exchange_mixing();
        assert!((alpha - 0.19).abs() < 1e-12);
        assert!((beta - 1.11).abs() < 1e-12);
        assert_eq!(omega, 0.33);
    }
}
