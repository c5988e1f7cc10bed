//! Configuration for the functional builder
//!
//! The YAML file may add definition files, replace the dispersion
//! coefficient table and set build parameters. Command-line values take
//! precedence over the file, and the file over the defaults.

mod args;

pub use args::Args;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Extra definition files, merged after the built-in set
    #[serde(default)]
    pub definitions: Vec<String>,
    /// Dispersion coefficient file replacing the built-in table
    pub dispersion: Option<String>,
    #[serde(default)]
    pub build: BuildParams,
}

/// Runtime parameters handed to the builder
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BuildParams {
    pub points: Option<usize>,
    pub deriv: Option<usize>,
    pub restricted: Option<bool>,
}

impl Default for BuildParams {
    fn default() -> Self {
        BuildParams {
            points: Some(5000),
            deriv: Some(1),
            restricted: Some(true),
        }
    }
}

impl BuildParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.points.is_none() {
            self.points = defaults.points;
        }
        if self.deriv.is_none() {
            self.deriv = defaults.deriv;
        }
        if self.restricted.is_none() {
            self.restricted = defaults.restricted;
        }
        self
    }
}

impl Config {
    /// Apply defaults to all configuration sections
    pub fn with_defaults(mut self) -> Self {
        self.build = self.build.with_defaults();
        self
    }

    pub fn points(&self, args: &Args) -> usize {
        args.points.or(self.build.points).unwrap_or(5000)
    }

    pub fn deriv(&self, args: &Args) -> usize {
        args.deriv.or(self.build.deriv).unwrap_or(1)
    }

    pub fn restricted(&self, args: &Args) -> bool {
        !args.unrestricted && self.build.restricted.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_partial_build_section_gets_defaults() {
        let config: Config = serde_yml::from_str("build:\n  deriv: 2\n").unwrap();
        let config = config.with_defaults();
        assert_eq!(config.build.deriv, Some(2));
        assert_eq!(config.build.points, Some(5000));
        assert_eq!(config.build.restricted, Some(true));
        assert!(config.definitions.is_empty());
        assert!(config.dispersion.is_none());
    }

    #[test]
    fn test_cli_overrides_config() {
        let config: Config =
            serde_yml::from_str("build:\n  points: 100\n  deriv: 2\n  restricted: true\n").unwrap();
        let args = Args::parse_from(["dft_funcs", "--points", "250", "--unrestricted"]);
        assert_eq!(config.points(&args), 250);
        assert_eq!(config.deriv(&args), 2);
        assert!(!config.restricted(&args));
    }

    #[test]
    fn test_config_can_request_unrestricted() {
        let config: Config = serde_yml::from_str("build:\n  restricted: false\n").unwrap();
        let args = Args::parse_from(["dft_funcs", "-f", "blyp"]);
        assert!(!config.restricted(&args));
        assert_eq!(args.functional.as_deref(), Some("blyp"));
    }
}
