//! GeoTIFF reading through GDAL
//!
//! Opens a raster, reads its geotransform, band 1 as `f32` and the band's
//! declared no-data value. The dataset is closed when it goes out of scope at
//! the end of [`GdalReader::read`].

use crate::errors::Result;
use crate::raster::{RasterBand, RasterGrid, RasterReader};
use crate::transform::AffineTransform;
use gdal::raster::Buffer;
use gdal::Dataset;
use ndarray::Array2;
use std::path::Path;
use tracing::debug;

/// [`RasterReader`] for any format GDAL can open (GeoTIFF in practice)
#[derive(Debug, Default, Clone, Copy)]
pub struct GdalReader;

impl GdalReader {
    pub fn new() -> Self {
        Self
    }
}

impl RasterReader for GdalReader {
    fn read(&self, path: &Path) -> Result<RasterGrid> {
        debug!(path = %path.display(), "opening raster");
        let dataset = Dataset::open(path)?;

        let transform = AffineTransform::from_gdal(&dataset.geo_transform()?);
        let (width, height) = dataset.raster_size();

        let band = dataset.rasterband(1)?;
        let nodata = band.no_data_value();
        let buffer: Buffer<f32> = band.read_as((0, 0), (width, height), (width, height), None)?;
        let data = Array2::from_shape_vec((height, width), buffer.data().to_vec())?;

        debug!(height, width, ?nodata, "read band 1");
        Ok(RasterGrid::new(transform, RasterBand::new(data, nodata)))
    }
}
