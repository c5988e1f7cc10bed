//! Functional builder command-line interface
//!
//! Builds a named exchange-correlation functional from the registry and
//! prints its composition, or lists every registered name.

use color_eyre::eyre::Result;

mod app;
mod config;
mod io;

use app::FunctionalApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    FunctionalApplication::from_cli()?.run()
}
