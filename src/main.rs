//! Entry point for biomass2nc.
//! Parses the command line, sets up logging and runs one conversion.

use biomass2nc::cli::Args;
use biomass2nc::converter::convert;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!(
        biomass = %args.biomass.display(),
        landfrac = %args.landfrac.display(),
        output = %args.output.display(),
        bounds = %args.bounds_from,
        "starting conversion"
    );

    convert(&args.biomass, &args.landfrac, &args.output, args.options())?;

    println!("✅ Saved result to {}", args.output.display());
    Ok(())
}
