//! Biomass and land-fraction raster to NetCDF grid conversion
//!
//! The conversion is a single pass: read the biomass raster, read the
//! land-fraction raster, derive coordinates and bounds from the biomass
//! transform, assemble the dataset and hand it to a sink.
//!
//! The two rasters are assumed to share shape, transform and pixel
//! registration. Only the shape is ever compared, when the dataset is
//! assembled.

use crate::dataset::{ConvertOptions, GriddedDataset};
use crate::errors::Result;
use crate::float_format::float_repr;
use crate::geotiff_io::GdalReader;
use crate::netcdf_io::{GridSink, NetCDFWriter};
use crate::raster::RasterReader;
use crate::summary::BandSummary;
use chrono::Utc;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Runs conversions with a given raster reader
pub struct GridConverter<R> {
    reader: R,
    options: ConvertOptions,
}

impl<R: RasterReader> GridConverter<R> {
    pub fn new(reader: R, options: ConvertOptions) -> Self {
        Self { reader, options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert the two rasters and write the result to `sink`.
    ///
    /// The transform and grid dimensions, followed by a summary line per band,
    /// are written to `diagnostics`.
    pub fn convert(
        &self,
        biomass_path: &Path,
        landfrac_path: &Path,
        sink: &mut dyn GridSink,
        diagnostics: &mut dyn Write,
    ) -> Result<GriddedDataset> {
        let mut biomass = self.reader.read(biomass_path)?;
        let (height, width) = biomass.shape();
        let t = biomass.transform;

        writeln!(diagnostics, "{}", t)?;
        writeln!(
            diagnostics,
            "height: {} width: {} a: {}, b: {}, c: {}, d: {}, e: {}, f: {}",
            height,
            width,
            float_repr(t.a),
            float_repr(t.b),
            float_repr(t.c),
            float_repr(t.d),
            float_repr(t.e),
            float_repr(t.f)
        )?;

        let masked = biomass.band.mask_nodata();
        debug!(masked, nodata = ?biomass.band.nodata, "masked biomass no-data");

        let mut landfrac = self.reader.read(landfrac_path)?.band;
        let masked = landfrac.mask_nodata();
        debug!(masked, nodata = ?landfrac.nodata, "masked landfrac no-data");

        writeln!(diagnostics, "biomass  {}", BandSummary::from_band(&biomass.band.data))?;
        writeln!(diagnostics, "landfrac {}", BandSummary::from_band(&landfrac.data))?;

        let dataset = GriddedDataset::assemble(&biomass, &landfrac, &self.options, Utc::now())?;
        sink.write(&dataset)?;
        debug!(variables = dataset.variables.len(), "dataset written");

        Ok(dataset)
    }
}

/// Convert GeoTIFF rasters to a NetCDF file at `output_path`, printing
/// diagnostics to standard output.
pub fn convert(
    biomass_path: &Path,
    landfrac_path: &Path,
    output_path: &Path,
    options: ConvertOptions,
) -> Result<()> {
    let converter = GridConverter::new(GdalReader::new(), options);
    let mut sink = NetCDFWriter::new(output_path);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    converter.convert(biomass_path, landfrac_path, &mut sink, &mut out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::BoundsConvention;
    use crate::netcdf_io::MemorySink;
    use crate::raster::{MemoryRasterReader, RasterBand, RasterGrid};
    use crate::transform::AffineTransform;
    use ndarray::array;

    fn reader() -> MemoryRasterReader {
        let transform = AffineTransform::new(0.25, 0.0, -180.0, 0.0, -0.25, 90.0);
        MemoryRasterReader::new()
            .with_grid(
                "biomass.tif",
                RasterGrid::new(
                    transform,
                    RasterBand::new(array![[5.0, -9999.0], [3.0, 2.0]], Some(-9999.0)),
                ),
            )
            .with_grid(
                "landfrac.tif",
                RasterGrid::new(
                    transform,
                    RasterBand::new(array![[100.0, 100.0], [0.0, 100.0]], None),
                ),
            )
    }

    #[test]
    fn test_convert_writes_diagnostics() {
        let converter = GridConverter::new(reader(), ConvertOptions::new(0.25));
        let mut sink = MemorySink::new();
        let mut diagnostics = Vec::new();

        converter
            .convert(
                Path::new("biomass.tif"),
                Path::new("landfrac.tif"),
                &mut sink,
                &mut diagnostics,
            )
            .unwrap();

        let text = String::from_utf8(diagnostics).unwrap();
        assert!(text.starts_with("| 0.25, 0.00,-180.00|\n| 0.00,-0.25, 90.00|\n| 0.00, 0.00, 1.00|\n"));
        assert!(text.contains("height: 2 width: 2 a: 0.25, b: 0.0, c: -180.0, d: 0.0, e: -0.25, f: 90.0"));
        assert!(text.contains("biomass  valid: 3 / 4"));
        assert!(text.contains("landfrac valid: 4 / 4"));
        assert!(sink.dataset.is_some());
    }

    #[test]
    fn test_convert_uses_bounds_convention() {
        let options = ConvertOptions::new(0.25).with_bounds(BoundsConvention::Scale);
        let converter = GridConverter::new(reader(), options);
        let mut sink = MemorySink::new();

        let ds = converter
            .convert(
                Path::new("biomass.tif"),
                Path::new("landfrac.tif"),
                &mut sink,
                &mut io::sink(),
            )
            .unwrap();

        let lon_bnds = &ds.variable("lon_bnds").unwrap().data;
        assert_eq!(lon_bnds[[0, 0]], -180.0);
        assert_eq!(lon_bnds[[0, 1]], -179.75);
        assert_eq!(converter.options().bounds, BoundsConvention::Scale);
    }

    #[test]
    fn test_missing_landfrac_fails_before_writing() {
        let converter = GridConverter::new(reader(), ConvertOptions::new(0.25));
        let mut sink = MemorySink::new();

        let result = converter.convert(
            Path::new("biomass.tif"),
            Path::new("nope.tif"),
            &mut sink,
            &mut io::sink(),
        );

        assert!(result.is_err());
        assert!(sink.dataset.is_none());
    }
}
