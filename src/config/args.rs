//! Command-line argument parsing

use clap::Parser;

/// Look up, validate and build exchange-correlation functionals
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to an optional YAML configuration file
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// Functional name or alias to build (case-insensitive)
    #[arg(short, long)]
    pub functional: Option<String>,

    /// Override maximum number of grid points per block
    #[arg(long)]
    pub points: Option<usize>,

    /// Override derivative order (0, 1 or 2)
    #[arg(long)]
    pub deriv: Option<usize>,

    /// Build spin-unrestricted components
    #[arg(long)]
    pub unrestricted: bool,

    /// List every registered name and alias instead of building
    #[arg(long)]
    pub list: bool,

    /// Override output file: (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,
}
