//! Defines command-line interface options using `clap` for biomass2nc.

use crate::coordinates::BoundsConvention;
use crate::dataset::ConvertOptions;
use clap::Parser;
use std::path::PathBuf;

/// Convert biomass and land-fraction GeoTIFFs into a NetCDF grid
#[derive(Parser, Debug)]
#[command(
    name = "biomass2nc",
    version,
    about = "Convert biomass and land-fraction GeoTIFFs into a NetCDF grid"
)]
pub struct Args {
    /// Biomass GeoTIFF (band 1 is used)
    pub biomass: PathBuf,

    /// Land-fraction GeoTIFF on the same grid as the biomass raster
    pub landfrac: PathBuf,

    /// Output NetCDF path, replaced if it exists
    pub output: PathBuf,

    /// Grid resolution in degrees, used in the title attribute
    #[arg(allow_negative_numbers = true)]
    pub resolution: f64,

    /// Transform coefficients used for cell bounds: 'source' (|b|, |e|) or 'scale' (|a|, |e|)
    #[arg(long, default_value_t = BoundsConvention::Source)]
    pub bounds_from: BoundsConvention,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions::new(self.resolution).with_bounds(self.bounds_from)
    }
}
