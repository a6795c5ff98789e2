pub mod config;
pub mod error;

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use bandwidth_core::BandwidthProbe;
use error::Error;

/// Printed to stdout when the probe buffers cannot be acquired.
const ALLOCATION_FAILED_MESSAGE: &str = "Memory allocation failed";

fn main() {
    init_tracing();

    if let Err(e) = run() {
        match &e {
            Error::ProbeError(_) => println!("{}", ALLOCATION_FAILED_MESSAGE),
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(e.exit_code());
    }
}

/// Diagnostics go to stderr so stdout carries only the report line.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Error> {
    let config = config::load_config()?;
    let settings = config.probe_settings();

    tracing::info!(
        array_size = settings.array_size,
        iterations = settings.iterations,
        "Starting bandwidth probe"
    );

    let report = BandwidthProbe::new(settings).run()?;

    println!("{}", report);
    Ok(())
}
