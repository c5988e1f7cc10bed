//! Dispersion scheme short names

/// Short name -> canonical scheme id. Order is the order variants are
/// synthesized in, which decides overwrites between colliding keys.
pub const DISPERSION_NAMES: [(&str, &str); 10] = [
    ("d2p4", "d2p4"),
    ("d2gr", "d2gr"),
    ("d3zero", "d3zero"),
    ("d3bj", "d3bj"),
    ("d3mzero", "d3mzero"),
    ("d3mbj", "d3mbj"),
    ("d", "d2p4"),
    ("d2", "d2p4"),
    ("d3", "d3zero"),
    ("d3m", "d3mzero"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_point_at_canonical_schemes() {
        let lookup: std::collections::HashMap<&str, &str> = DISPERSION_NAMES.into_iter().collect();
        assert_eq!(lookup["d"], "d2p4");
        assert_eq!(lookup["d2"], "d2p4");
        assert_eq!(lookup["d3"], "d3zero");
        assert_eq!(lookup["d3m"], "d3mzero");
        assert!(!lookup.contains_key("d4"));
    }

    #[test]
    fn test_ten_short_names_six_schemes() {
        let mut schemes: Vec<&str> = DISPERSION_NAMES.iter().map(|(_, s)| *s).collect();
        schemes.sort();
        schemes.dedup();
        assert_eq!(DISPERSION_NAMES.len(), 10);
        assert_eq!(schemes.len(), 6);
    }
}
