use crate::io::write_functional_summary;
use color_eyre::eyre::Result;
use dft_funcs::{DispersionDescriptor, Registry};
use tracing::info;
use xc::SuperFunctional;

pub fn report_functional(
    functional: &SuperFunctional,
    dispersion: Option<&DispersionDescriptor>,
) -> Result<()> {
    let mut summary = Vec::new();
    write_functional_summary(&mut summary, functional, dispersion)?;
    for line in String::from_utf8_lossy(&summary).lines() {
        info!("{}", line);
    }
    Ok(())
}

pub fn report_registry(registry: &Registry) {
    info!("\nRegistered functionals:");
    for (key, spec) in registry.iter() {
        match &spec.dispersion {
            Some(d) => info!("  {:<24} -> {} (+{})", key, spec.name, d.kind),
            None => info!("  {:<24} -> {}", key, spec.name),
        }
    }
}
