//! Output formatting and logging utilities

use color_eyre::eyre::{Result, WrapErr};
use dft_funcs::DispersionDescriptor;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::time::SystemTime as StdSystemTime;
use tracing::info;
use tracing_subscriber::{
    fmt::format::Writer, fmt::layer, fmt::time::FormatTime, layer::SubscriberExt,
    util::SubscriberInitExt, Registry,
};
use xc::SuperFunctional;

/// Custom time formatter that shows only seconds
struct SecondPrecisionTimer;

impl FormatTime for SecondPrecisionTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let total_seconds = StdSystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let hours = (total_seconds / 3600) % 24;
        let minutes = (total_seconds / 60) % 60;
        let seconds = total_seconds % 60;

        write!(w, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Route log output to a file, or to stdout when no path is given
pub fn setup_output(output_path: Option<&str>) -> Result<()> {
    match output_path {
        Some(path) => {
            let log = File::create(path)
                .wrap_err_with(|| format!("Could not create output file: {}", path))?;
            let file_layer = layer()
                .with_writer(log)
                .with_timer(SecondPrecisionTimer)
                .with_ansi(false);
            Registry::default().with(file_layer).init();
            info!("Output will be written to: {}", path);
        }
        None => {
            let stdout_layer = layer()
                .with_writer(std::io::stdout)
                .with_timer(SecondPrecisionTimer)
                .with_ansi(true);
            Registry::default().with(stdout_layer).init();
        }
    }
    Ok(())
}

/// Print a built functional and its dispersion correction to a writer
pub fn write_functional_summary<W: Write>(
    writer: &mut W,
    functional: &SuperFunctional,
    dispersion: Option<&DispersionDescriptor>,
) -> Result<()> {
    write!(writer, "{}", functional)?;
    writeln!(writer)?;
    writeln!(writer, "   => Dispersion <=")?;
    writeln!(writer)?;
    match dispersion {
        Some(d) => {
            writeln!(writer, "    Scheme: {}", d.kind)?;
            for (key, value) in &d.params {
                writeln!(writer, "    {:<8} = {:>12.6}", key, value)?;
            }
            if let Some(citation) = &d.citation {
                writeln!(writer, "    {}", citation)?;
            }
        }
        None => writeln!(writer, "    None")?,
    }
    writeln!(writer)?;
    writeln!(writer, "    Grid points: {}", functional.max_points())?;
    let buffers: Vec<&str> = functional.value_keys().collect();
    writeln!(writer, "    Buffers: {}", buffers.join(", "))?;
    Ok(())
}
