//! Affine geotransform handling
//!
//! Raster pixel indices map to spatial coordinates through six coefficients:
//!
//! ```text
//! x = a * col + b * row + c
//! y = d * col + e * row + f
//! ```
//!
//! GDAL stores the same coefficients as `[c, a, b, f, d, e]`.

use crate::float_format::space_signed_fixed;
use std::fmt;

/// Six-coefficient affine transform of a raster grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    /// x-scale (pixel width)
    pub a: f64,
    /// x-skew
    pub b: f64,
    /// x-origin (top-left x coordinate)
    pub c: f64,
    /// y-skew
    pub d: f64,
    /// y-scale (pixel height, usually negative)
    pub e: f64,
    /// y-origin (top-left y coordinate)
    pub f: f64,
}

impl AffineTransform {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Build from a GDAL geotransform `[c, a, b, f, d, e]`
    pub fn from_gdal(gt: &[f64; 6]) -> Self {
        Self {
            a: gt[1],
            b: gt[2],
            c: gt[0],
            d: gt[4],
            e: gt[5],
            f: gt[3],
        }
    }

    /// Whether the grid is north-up with no rotation terms
    pub fn is_rectilinear(&self) -> bool {
        self.b == 0.0 && self.d == 0.0
    }
}

impl fmt::Display for AffineTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            [self.a, self.b, self.c],
            [self.d, self.e, self.f],
            [0.0, 0.0, 1.0],
        ];
        for (i, row) in rows.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|&v| space_signed_fixed(v)).collect();
            write!(f, "|{}|", cells.join(","))?;
            if i + 1 < rows.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
