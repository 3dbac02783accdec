//! Raster bands, no-data handling and the raster reading seam
//!
//! A [`RasterReader`] turns a path into a [`RasterGrid`]: band 1 of the raster
//! plus its affine transform. The GDAL-backed reader lives in
//! [`crate::geotiff_io`]; [`MemoryRasterReader`] serves grids held in memory.

use crate::errors::{ConvertError, Result};
use crate::transform::AffineTransform;
use ndarray::Array2;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One 2-D layer of `f32` samples with its optional no-data sentinel
#[derive(Debug, Clone, PartialEq)]
pub struct RasterBand {
    /// Samples with shape (height, width)
    pub data: Array2<f32>,
    pub nodata: Option<f64>,
}

impl RasterBand {
    pub fn new(data: Array2<f32>, nodata: Option<f64>) -> Self {
        Self { data, nodata }
    }

    /// Build from row-major samples
    pub fn from_shape_vec(
        (height, width): (usize, usize),
        samples: Vec<f32>,
        nodata: Option<f64>,
    ) -> Result<Self> {
        let data = Array2::from_shape_vec((height, width), samples)?;
        Ok(Self { data, nodata })
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn has_nodata(&self) -> bool {
        self.nodata.is_some()
    }

    /// Replace sentinel samples with NaN in place, returning how many changed
    pub fn mask_nodata(&mut self) -> usize {
        match self.nodata {
            Some(sentinel) => mask_nodata(&mut self.data, sentinel),
            None => 0,
        }
    }
}

/// Replace every sample equal to `sentinel` with NaN.
///
/// Samples are compared at `f32` precision, the precision they are stored at.
/// A NaN sentinel matches nothing, so masking twice equals masking once.
pub fn mask_nodata(data: &mut Array2<f32>, sentinel: f64) -> usize {
    let sentinel = sentinel as f32;
    let mut replaced = 0;
    data.mapv_inplace(|v| {
        if v == sentinel {
            replaced += 1;
            f32::NAN
        } else {
            v
        }
    });
    replaced
}

/// Band 1 of a raster together with its geotransform
#[derive(Debug, Clone, PartialEq)]
pub struct RasterGrid {
    pub transform: AffineTransform,
    pub band: RasterBand,
}

impl RasterGrid {
    pub fn new(transform: AffineTransform, band: RasterBand) -> Self {
        Self { transform, band }
    }

    /// (height, width)
    pub fn shape(&self) -> (usize, usize) {
        (self.band.height(), self.band.width())
    }
}

/// Source of raster grids addressed by path
pub trait RasterReader {
    /// Read the transform and band 1 of the raster at `path`
    fn read(&self, path: &Path) -> Result<RasterGrid>;
}

/// Raster reader backed by grids registered in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryRasterReader {
    grids: HashMap<PathBuf, RasterGrid>,
}

impl MemoryRasterReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `grid` under `path`
    pub fn with_grid(mut self, path: impl Into<PathBuf>, grid: RasterGrid) -> Self {
        self.grids.insert(path.into(), grid);
        self
    }
}

impl RasterReader for MemoryRasterReader {
    fn read(&self, path: &Path) -> Result<RasterGrid> {
        self.grids
            .get(path)
            .cloned()
            .ok_or_else(|| ConvertError::RasterNotFound {
                path: path.to_path_buf(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mask_replaces_sentinel_only() {
        let mut band = RasterBand::new(array![[5.0, -9999.0], [3.0, 2.0]], Some(-9999.0));
        let replaced = band.mask_nodata();

        assert_eq!(replaced, 1);
        assert!(band.data[[0, 1]].is_nan());
        assert_eq!(band.data[[0, 0]], 5.0);
        assert_eq!(band.data[[1, 0]], 3.0);
        assert_eq!(band.data[[1, 1]], 2.0);
    }

    #[test]
    fn test_mask_is_idempotent() {
        let mut once = array![[0.0f32, 1.0, 0.0], [2.0, 0.0, 3.0]];
        mask_nodata(&mut once, 0.0);

        let mut twice = once.clone();
        let replaced = mask_nodata(&mut twice, 0.0);

        assert_eq!(replaced, 0);
        for (a, b) in once.iter().zip(twice.iter()) {
            assert!(a == b || (a.is_nan() && b.is_nan()));
        }
    }

    #[test]
    fn test_mask_without_sentinel_is_noop() {
        let original = array![[100.0f32, 100.0], [0.0, 100.0]];
        let mut band = RasterBand::new(original.clone(), None);
        assert_eq!(band.mask_nodata(), 0);
        assert_eq!(band.data, original);
        assert!(!band.has_nodata());
    }

    #[test]
    fn test_nan_sentinel_matches_nothing() {
        let mut data = array![[f32::NAN, 1.0]];
        assert_eq!(mask_nodata(&mut data, f64::NAN), 0);
        assert_eq!(data[[0, 1]], 1.0);
    }

    #[test]
    fn test_from_shape_vec_rejects_bad_length() {
        let result = RasterBand::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0], None);
        assert!(matches!(result, Err(ConvertError::ArrayError(_))));
    }

    #[test]
    fn test_memory_reader_lookup() {
        let grid = RasterGrid::new(
            AffineTransform::new(1.0, 0.0, 0.0, 0.0, -1.0, 0.0),
            RasterBand::new(Array2::zeros((2, 3)), None),
        );
        let reader = MemoryRasterReader::new().with_grid("a.tif", grid.clone());

        assert_eq!(reader.read(Path::new("a.tif")).unwrap(), grid);
        assert_eq!(grid.shape(), (2, 3));
        match reader.read(Path::new("b.tif")) {
            Err(ConvertError::RasterNotFound { path }) => assert_eq!(path, PathBuf::from("b.tif")),
            other => panic!("Expected RasterNotFound, got {:?}", other),
        }
    }
}
