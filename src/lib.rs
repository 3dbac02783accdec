//! biomass2nc: GeoTIFF biomass grids to self-describing NetCDF
//!
//! Converts an aboveground biomass raster and a companion land-fraction raster
//! into one NetCDF-4 file with `lat`/`lon` coordinate variables, their cell
//! bounds, NaN fill conventions and provenance attributes.
//!
//! ## Module Organization
//!
//! - [`transform`]: affine geotransform coefficients
//! - [`coordinates`]: cell-center axes and cell bounds
//! - [`raster`]: raster bands, no-data masking and the [`RasterReader`] seam
//! - [`geotiff_io`]: GDAL-backed raster reading
//! - [`dataset`]: the in-memory gridded dataset and its assembly
//! - [`provenance`]: title, source, references and history attributes
//! - [`netcdf_io`]: the [`GridSink`] seam and the NetCDF writer
//! - [`summary`]: band statistics printed as diagnostics
//! - [`converter`]: the end-to-end conversion
//! - [`float_format`]: float text layout for titles and diagnostics
//! - [`errors`]: centralized error handling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use biomass2nc::prelude::*;
//! use std::path::Path;
//!
//! convert(
//!     Path::new("merged_plant_agb_2020_025d.tif"),
//!     Path::new("fraction_valid_025d.tif"),
//!     Path::new("plant_agb_2020_025d.nc"),
//!     ConvertOptions::new(0.25),
//! )
//! .unwrap();
//! ```
//!
//! Conversions can also run against in-memory rasters and sinks:
//!
//! ```rust
//! use biomass2nc::prelude::*;
//! use ndarray::array;
//! use std::path::Path;
//!
//! let transform = AffineTransform::new(0.25, 0.0, -180.0, 0.0, -0.25, 90.0);
//! let reader = MemoryRasterReader::new()
//!     .with_grid("agb.tif", RasterGrid::new(transform, RasterBand::new(array![[5.0, -9999.0]], Some(-9999.0))))
//!     .with_grid("frac.tif", RasterGrid::new(transform, RasterBand::new(array![[100.0, 0.0]], None)));
//!
//! let mut sink = MemorySink::new();
//! let ds = GridConverter::new(reader, ConvertOptions::new(0.25))
//!     .convert(Path::new("agb.tif"), Path::new("frac.tif"), &mut sink, &mut std::io::sink())
//!     .unwrap();
//! assert!(ds.variable("biomass").unwrap().data[[0, 1]].is_nan());
//! ```

pub mod cli;
pub mod converter;
pub mod coordinates;
pub mod dataset;
pub mod errors;
pub mod float_format;
pub mod geotiff_io;
pub mod netcdf_io;
pub mod provenance;
pub mod raster;
pub mod summary;
pub mod transform;

pub use converter::{convert, GridConverter};
pub use coordinates::{BoundsConvention, GridCoordinates};
pub use dataset::{AttrValue, ConvertOptions, GridVariable, GriddedDataset};
pub use errors::{ConvertError, Result};
pub use geotiff_io::GdalReader;
pub use netcdf_io::{GridSink, MemorySink, NetCDFWriter};
pub use raster::{MemoryRasterReader, RasterBand, RasterGrid, RasterReader};
pub use transform::AffineTransform;

pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::converter::{convert, GridConverter};
    pub use crate::coordinates::BoundsConvention;
    pub use crate::dataset::{ConvertOptions, GriddedDataset};
    pub use crate::errors::{ConvertError, Result};
    pub use crate::geotiff_io::GdalReader;
    pub use crate::netcdf_io::{GridSink, MemorySink, NetCDFWriter};
    pub use crate::raster::{MemoryRasterReader, RasterBand, RasterGrid, RasterReader};
    pub use crate::transform::AffineTransform;
}
