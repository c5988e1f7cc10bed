use super::*;

fn exchange(entries: &[(&str, bool)]) -> Option<IndexMap<String, ExchangeParams>> {
    Some(
        entries
            .iter()
            .map(|(id, use_libxc)| {
                (
                    id.to_string(),
                    ExchangeParams {
                        use_libxc: *use_libxc,
                        ..Default::default()
                    },
                )
            })
            .collect(),
    )
}

fn correlation(ids: &[&str]) -> Option<IndexMap<String, CorrelationParams>> {
    Some(
        ids.iter()
            .map(|id| (id.to_string(), CorrelationParams::default()))
            .collect(),
    )
}

fn bundled(id: &str) -> Option<IndexMap<String, BundledParams>> {
    Some(IndexMap::from([(id.to_string(), BundledParams::default())]))
}

fn blyp() -> FunctionalSpec {
    let mut spec = FunctionalSpec::new("BLYP");
    spec.x_functionals = exchange(&[("GGA_X_B88", false)]);
    spec.c_functionals = correlation(&["GGA_C_LYP"]);
    spec
}

#[test]
fn test_separate_layout() {
    let spec = blyp();
    match check_consistency(&spec).unwrap() {
        XcLayout::Separate {
            exchange,
            correlation,
        } => {
            assert_eq!(exchange.functionals.unwrap().len(), 1);
            assert!(exchange.hf.is_none());
            assert!(!exchange.functionals.unwrap()["GGA_X_B88"].use_libxc);
            assert!(correlation.mp2.is_none());
        }
        other => panic!("unexpected layout {other:?}"),
    }
}

#[test]
fn test_bundled_layout() {
    let mut spec = FunctionalSpec::new("wB97X");
    spec.xc_functionals = bundled("HYB_GGA_XC_WB97X");
    assert!(matches!(
        check_consistency(&spec).unwrap(),
        XcLayout::Bundled(map) if map.contains_key("HYB_GGA_XC_WB97X")
    ));
}

#[test]
fn test_bundled_with_exchange_is_duplicate() {
    let mut spec = blyp();
    spec.xc_functionals = bundled("GGA_XC_B97_D");
    assert_eq!(
        check_consistency(&spec).unwrap_err(),
        FunctionalError::DuplicateExchangeSpec("BLYP".to_string())
    );

    let mut hf_only = FunctionalSpec::new("X");
    hf_only.xc_functionals = bundled("GGA_XC_B97_D");
    hf_only.x_hf = Some(HfExchange::default());
    assert!(matches!(
        check_consistency(&hf_only),
        Err(FunctionalError::DuplicateExchangeSpec(_))
    ));
}

#[test]
fn test_bundled_with_correlation_is_duplicate() {
    let mut spec = FunctionalSpec::new("X");
    spec.xc_functionals = bundled("GGA_XC_B97_D");
    spec.c_mp2 = Some(Mp2Correlation::default());
    assert_eq!(
        check_consistency(&spec).unwrap_err(),
        FunctionalError::DuplicateCorrelationSpec("X".to_string())
    );
}

#[test]
fn test_empty_spec_reports_exchange_first() {
    let spec = FunctionalSpec::new("EMPTY");
    assert_eq!(
        check_consistency(&spec).unwrap_err(),
        FunctionalError::MissingExchangeSpec("EMPTY".to_string())
    );
}

#[test]
fn test_missing_correlation() {
    let mut spec = FunctionalSpec::new("HF-ONLY");
    spec.x_hf = Some(HfExchange {
        alpha: Some(1.0),
        ..Default::default()
    });
    assert_eq!(
        check_consistency(&spec).unwrap_err(),
        FunctionalError::MissingCorrelationSpec("HF-ONLY".to_string())
    );

    // an empty correlation section is enough
    spec.c_functionals = correlation(&[]);
    assert!(check_consistency(&spec).is_ok());
}

#[test]
fn test_two_hybrid_requests() {
    let mut spec = blyp();
    spec.x_functionals = exchange(&[("HYB_GGA_XC_B3LYP", true), ("HYB_GGA_XC_PBEH", true)]);
    assert_eq!(
        check_consistency(&spec).unwrap_err(),
        FunctionalError::DuplicateHybridRequest("BLYP".to_string())
    );
}

#[test]
fn test_hybrid_request_with_hf_section() {
    let mut spec = blyp();
    spec.x_functionals = exchange(&[("HYB_GGA_XC_PBEH", true), ("GGA_X_B88", false)]);
    spec.x_hf = Some(HfExchange::default());
    assert_eq!(
        check_consistency(&spec).unwrap_err(),
        FunctionalError::InconsistentExchangeSpec("BLYP".to_string())
    );
}

#[test]
fn test_single_hybrid_request() {
    let mut spec = blyp();
    spec.x_functionals = exchange(&[("GGA_X_B88", false), ("HYB_GGA_XC_PBEH", true)]);
    match check_consistency(&spec).unwrap() {
        XcLayout::Separate { exchange, .. } => {
            let functionals = exchange.functionals.unwrap();
            assert!(functionals["HYB_GGA_XC_PBEH"].use_libxc);
            assert_eq!(functionals.values().filter(|p| p.use_libxc).count(), 1);
        }
        other => panic!("unexpected layout {other:?}"),
    }
}

#[test]
fn test_hf_reference_must_resolve() {
    let mut spec = blyp();
    spec.x_hf = Some(HfExchange {
        alpha: Some(0.25),
        use_libxc: Some("GGA_X_PBE".to_string()),
        ..Default::default()
    });
    assert_eq!(
        check_consistency(&spec).unwrap_err(),
        FunctionalError::UnresolvedHybridReference {
            name: "BLYP".to_string(),
            component: "GGA_X_PBE".to_string(),
        }
    );

    spec.x_hf.as_mut().unwrap().use_libxc = Some("GGA_X_B88".to_string());
    assert!(check_consistency(&spec).is_ok());
}

#[test]
fn test_hf_reference_without_exchange_components() {
    let mut spec = FunctionalSpec::new("HF");
    spec.x_hf = Some(HfExchange {
        use_libxc: Some("GGA_X_B88".to_string()),
        ..Default::default()
    });
    spec.c_functionals = correlation(&[]);
    assert!(matches!(
        check_consistency(&spec),
        Err(FunctionalError::UnresolvedHybridReference { .. })
    ));
}

#[test]
fn test_validation_does_not_touch_spec() {
    let spec = blyp();
    let before = spec.clone();
    let _ = check_consistency(&spec);
    assert_eq!(spec, before);
}
