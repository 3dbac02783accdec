//! Quick statistics over a band, printed as conversion diagnostics

use ndarray::Array2;
use std::fmt;

/// Valid/missing counts and min/mean/max over the non-NaN samples of a band.
///
/// Only NaN counts as missing; infinite samples are valid and show up in
/// the extremes and the mean.
#[derive(Debug, Clone, PartialEq)]
pub struct BandSummary {
    pub total: usize,
    pub valid: usize,
    pub min: Option<f32>,
    pub max: Option<f32>,
    pub mean: Option<f64>,
}

impl BandSummary {
    pub fn from_band(data: &Array2<f32>) -> Self {
        let mut valid = 0usize;
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0f64;

        for &v in data.iter().filter(|v| !v.is_nan()) {
            valid += 1;
            min = min.min(v);
            max = max.max(v);
            sum += v as f64;
        }

        if valid == 0 {
            return Self {
                total: data.len(),
                valid,
                min: None,
                max: None,
                mean: None,
            };
        }

        Self {
            total: data.len(),
            valid,
            min: Some(min),
            max: Some(max),
            mean: Some(sum / valid as f64),
        }
    }

    pub fn missing(&self) -> usize {
        self.total - self.valid
    }
}

impl fmt::Display for BandSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "valid: {} / {} missing: {}",
            self.valid,
            self.total,
            self.missing()
        )?;
        match (self.min, self.mean, self.max) {
            (Some(min), Some(mean), Some(max)) => {
                write!(f, " min: {} mean: {:.2} max: {}", min, mean, max)
            }
            _ => write!(f, " (no valid data)"),
        }
    }
}
