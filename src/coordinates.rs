//! Cell-center coordinate axes and cell bounds derived from an affine transform
//!
//! Axes assume an unrotated grid: the skew terms of the transform never rotate
//! the axes. Bounds follow the `[lower, upper]` layout of CF bounds variables.

use crate::transform::AffineTransform;
use ndarray::{Array1, Array2};
use std::fmt;
use std::str::FromStr;

/// Which transform coefficients supply the pixel size used for cell bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsConvention {
    /// Pixel width from the x-skew `|b|`, pixel height from `|e|`.
    ///
    /// Matches the historical product. On an unrotated grid `b` is zero, so
    /// longitude bounds collapse onto the cell centers.
    #[default]
    Source,
    /// Pixel width from the x-scale `|a|`, pixel height from `|e|`.
    Scale,
}

impl BoundsConvention {
    /// `(pixel_width, pixel_height)` for the given transform
    pub fn pixel_size(&self, transform: &AffineTransform) -> (f64, f64) {
        match self {
            BoundsConvention::Source => (transform.b.abs(), transform.e.abs()),
            BoundsConvention::Scale => (transform.a.abs(), transform.e.abs()),
        }
    }
}

impl FromStr for BoundsConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "source" | "skew" => Ok(BoundsConvention::Source),
            "scale" => Ok(BoundsConvention::Scale),
            other => Err(format!(
                "Invalid bounds convention '{}': expected 'source' or 'scale'",
                other
            )),
        }
    }
}

impl fmt::Display for BoundsConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsConvention::Source => write!(f, "source"),
            BoundsConvention::Scale => write!(f, "scale"),
        }
    }
}

/// `n` cell centers starting half a step past `origin`
pub fn cell_centers(origin: f64, step: f64, n: usize) -> Array1<f64> {
    Array1::from_iter((0..n).map(|i| (origin + step / 2.0) + step * i as f64))
}

/// `[center - size/2, center + size/2]` for each center, shape (N, 2)
pub fn cell_bounds(centers: &Array1<f64>, size: f64) -> Array2<f64> {
    let half = size / 2.0;
    let mut bounds = Array2::zeros((centers.len(), 2));
    for (mut row, &center) in bounds.rows_mut().into_iter().zip(centers.iter()) {
        row[0] = center - half;
        row[1] = center + half;
    }
    bounds
}

/// Longitude/latitude axes of a grid together with their cell bounds
#[derive(Debug, Clone)]
pub struct GridCoordinates {
    pub lon: Array1<f64>,
    pub lat: Array1<f64>,
    pub lon_bnds: Array2<f64>,
    pub lat_bnds: Array2<f64>,
}

impl GridCoordinates {
    /// Derive axes and bounds for a `height` x `width` grid
    pub fn from_transform(
        transform: &AffineTransform,
        height: usize,
        width: usize,
        convention: BoundsConvention,
    ) -> Self {
        if !transform.is_rectilinear() {
            tracing::warn!(
                b = transform.b,
                d = transform.d,
                "sheared transform; axes ignore the skew terms"
            );
        }

        let lon = cell_centers(transform.c, transform.a, width);
        let lat = cell_centers(transform.f, transform.e, height);

        let (pixel_width, pixel_height) = convention.pixel_size(transform);
        if pixel_width == 0.0 || pixel_height == 0.0 {
            tracing::warn!(
                convention = %convention,
                pixel_width,
                pixel_height,
                "cell bounds have zero width"
            );
        }

        let lon_bnds = cell_bounds(&lon, pixel_width);
        let lat_bnds = cell_bounds(&lat, pixel_height);

        Self {
            lon,
            lat,
            lon_bnds,
            lat_bnds,
        }
    }

    pub fn height(&self) -> usize {
        self.lat.len()
    }

    pub fn width(&self) -> usize {
        self.lon.len()
    }
}
