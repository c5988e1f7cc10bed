mod report;

use self::report::{report_functional, report_registry};
use crate::config::{Args, Config};
use crate::io::{load_coefficients, load_definitions, setup_output};
use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use dft_funcs::{build_registry, builtin, Registry, SuperFunctionalBuilder};
use std::fs;
use tracing::info;
use xc::ComponentCatalog;

pub struct FunctionalApplication {
    args: Args,
    config: Config,
}

impl FunctionalApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.output.as_deref())?;

        let registry = load_registry(&self.config)?;
        info!("Functional registry ready with {} names", registry.len());

        if self.args.list {
            report_registry(&registry);
            return Ok(());
        }

        let name = self
            .args
            .functional
            .as_deref()
            .ok_or_else(|| eyre!("No functional requested. Pass --functional <NAME> or --list."))?;
        let points = self.config.points(&self.args);
        let deriv = self.config.deriv(&self.args);
        let restricted = self.config.restricted(&self.args);
        info!(
            "Building {} with {} points, deriv = {}, restricted = {}",
            name, points, deriv, restricted
        );

        let builder = SuperFunctionalBuilder::new(&registry, ComponentCatalog::builtin());
        let (functional, dispersion) = builder
            .build(name, points, deriv, restricted)
            .wrap_err_with(|| format!("Failed to build functional {}", name))?;
        report_functional(&functional, dispersion.as_ref())
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let Some(path) = &args.config_file else {
        return Ok(Config::default().with_defaults());
    };
    let config_content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", path))?;

    let config = serde_yml::from_str::<Config>(&config_content)
        .wrap_err("Failed to parse configuration file")?
        .with_defaults();

    Ok(config)
}

fn load_registry(config: &Config) -> Result<Registry> {
    let mut definitions = builtin::definitions()?;
    for path in &config.definitions {
        definitions.extend(load_definitions(path)?);
    }

    let coefficients = match &config.dispersion {
        Some(path) => load_coefficients(path)?,
        None => builtin::coefficients()?,
    };

    Ok(build_registry(definitions, &coefficients)?)
}
