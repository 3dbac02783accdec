//! In-memory model of the gridded output
//!
//! [`GriddedDataset`] holds everything a [`crate::netcdf_io::GridSink`] needs
//! to serialize: named dimensions, `f32` variables with their dimension names,
//! fill conventions and attributes, and global attributes. Insertion order is
//! preserved so the output lists variables and attributes deterministically.

use crate::coordinates::{BoundsConvention, GridCoordinates};
use crate::errors::{ConvertError, Result};
use crate::provenance;
use crate::raster::{RasterBand, RasterGrid};
use chrono::{DateTime, Utc};
use ndarray::ArrayD;

/// Attribute values written to the output
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Float(f32),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        AttrValue::Float(value)
    }
}

/// Name of the fill-value attribute
pub const FILL_VALUE_ATTR: &str = "_FillValue";

/// A named, fixed-length dimension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    pub name: String,
    pub len: usize,
}

/// An `f32` variable laid out over named dimensions
#[derive(Debug, Clone)]
pub struct GridVariable {
    pub name: String,
    pub dimensions: Vec<String>,
    pub data: ArrayD<f32>,
    /// Fill value the variable is declared with
    pub fill_value: Option<f32>,
    pub attributes: Vec<(String, AttrValue)>,
}

impl GridVariable {
    pub fn new(name: &str, dimensions: &[&str], data: ArrayD<f32>) -> Self {
        Self {
            name: name.to_string(),
            dimensions: dimensions.iter().map(|d| d.to_string()).collect(),
            data,
            fill_value: None,
            attributes: Vec::new(),
        }
    }

    pub fn with_fill_value(mut self, fill_value: f32) -> Self {
        self.fill_value = Some(fill_value);
        self
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set `name`, replacing any previous value
    pub fn set_attribute(&mut self, name: &str, value: impl Into<AttrValue>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Whether an explicit `_FillValue` attribute is attached
    pub fn has_explicit_fill(&self) -> bool {
        self.attribute(FILL_VALUE_ATTR).is_some()
    }
}

/// Dimensions, variables and global attributes of one output file
#[derive(Debug, Clone, Default)]
pub struct GriddedDataset {
    pub dimensions: Vec<Dimension>,
    pub variables: Vec<GridVariable>,
    pub attributes: Vec<(String, AttrValue)>,
}

/// Options that shape the assembled dataset
#[derive(Debug, Clone, Copy)]
pub struct ConvertOptions {
    /// Grid resolution in degrees, only used in the title
    pub resolution: f64,
    pub bounds: BoundsConvention,
}

impl ConvertOptions {
    pub fn new(resolution: f64) -> Self {
        Self {
            resolution,
            bounds: BoundsConvention::default(),
        }
    }

    pub fn with_bounds(mut self, bounds: BoundsConvention) -> Self {
        self.bounds = bounds;
        self
    }
}

impl GriddedDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dimension(&mut self, name: &str, len: usize) {
        self.dimensions.push(Dimension {
            name: name.to_string(),
            len,
        });
    }

    /// Add a variable after checking its data against the declared dimensions
    pub fn add_variable(&mut self, variable: GridVariable) -> Result<()> {
        let expected = variable
            .dimensions
            .iter()
            .map(|name| {
                self.dimension(name).map(|d| d.len).ok_or_else(|| {
                    ConvertError::Generic(format!(
                        "Variable '{}' uses undefined dimension '{}'",
                        variable.name, name
                    ))
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        if variable.data.shape() != expected.as_slice() {
            return Err(ConvertError::Generic(format!(
                "Variable '{}' has shape {:?} but its dimensions require {:?}",
                variable.name,
                variable.data.shape(),
                expected
            )));
        }

        self.variables.push(variable);
        Ok(())
    }

    pub fn add_attribute(&mut self, name: &str, value: impl Into<AttrValue>) {
        self.attributes.push((name.to_string(), value.into()));
    }

    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    pub fn variable(&self, name: &str) -> Option<&GridVariable> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Assemble the biomass product from a masked biomass grid and land-fraction band.
    ///
    /// The biomass grid supplies the transform for every coordinate. Both bands
    /// must already have their no-data sentinels replaced with NaN; the
    /// sentinels still decide whether an explicit `_FillValue` is attached.
    pub fn assemble(
        biomass: &RasterGrid,
        landfrac: &RasterBand,
        options: &ConvertOptions,
        created: DateTime<Utc>,
    ) -> Result<Self> {
        let (height, width) = biomass.shape();
        let coords = GridCoordinates::from_transform(&biomass.transform, height, width, options.bounds);

        let mut ds = GriddedDataset::new();
        ds.add_dimension("lat", coords.height());
        ds.add_dimension("lon", coords.width());
        ds.add_dimension("nv", 2);

        ds.add_variable(
            GridVariable::new("lat", &["lat"], to_f32(coords.lat.into_dyn()))
                .with_attribute("units", "degrees_north")
                .with_attribute("standard_name", "latitude")
                .with_attribute("bounds", "lat_bnds"),
        )?;
        ds.add_variable(
            GridVariable::new("lon", &["lon"], to_f32(coords.lon.into_dyn()))
                .with_attribute("units", "degrees_east")
                .with_attribute("standard_name", "longitude")
                .with_attribute("bounds", "lon_bnds"),
        )?;
        ds.add_variable(GridVariable::new(
            "lat_bnds",
            &["lat", "nv"],
            to_f32(coords.lat_bnds.into_dyn()),
        ))?;
        ds.add_variable(GridVariable::new(
            "lon_bnds",
            &["lon", "nv"],
            to_f32(coords.lon_bnds.into_dyn()),
        ))?;

        ds.add_variable(data_variable(
            "biomass",
            biomass_attrs(),
            &biomass.band,
        ))?;
        ds.add_variable(data_variable(
            "landfrac",
            landfrac_attrs(),
            landfrac,
        ))?;

        ds.add_attribute("title", provenance::title(options.resolution));
        ds.add_attribute("source", provenance::SOURCE);
        ds.add_attribute("references", provenance::REFERENCES);
        ds.add_attribute("history", provenance::history(created));

        Ok(ds)
    }
}

fn biomass_attrs() -> [(&'static str, &'static str); 2] {
    [("units", "g m-2"), ("long_name", "biomass")]
}

fn landfrac_attrs() -> [(&'static str, &'static str); 2] {
    [("units", "percent"), ("long_name", "land area fraction")]
}

/// A (lat, lon) data variable declared with a NaN fill value
fn data_variable(name: &str, attrs: [(&str, &str); 2], band: &RasterBand) -> GridVariable {
    let mut var = GridVariable::new(name, &["lat", "lon"], band.data.clone().into_dyn())
        .with_fill_value(f32::NAN);
    for (key, value) in attrs {
        var.set_attribute(key, value);
    }
    if band.has_nodata() {
        var.set_attribute(FILL_VALUE_ATTR, f32::NAN);
    }
    var
}

fn to_f32(values: ArrayD<f64>) -> ArrayD<f32> {
    values.mapv(|v| v as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::AffineTransform;
    use chrono::TimeZone;
    use ndarray::{array, IxDyn};

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    fn biomass_grid(nodata: Option<f64>) -> RasterGrid {
        let mut band = RasterBand::new(array![[5.0, -9999.0], [3.0, 2.0]], nodata);
        band.mask_nodata();
        RasterGrid::new(AffineTransform::new(0.25, 0.0, -180.0, 0.0, -0.25, 90.0), band)
    }

    #[test]
    fn test_assemble_layout() {
        let landfrac = RasterBand::new(array![[100.0, 100.0], [0.0, 100.0]], None);
        let ds = GriddedDataset::assemble(
            &biomass_grid(Some(-9999.0)),
            &landfrac,
            &ConvertOptions::new(0.25),
            created(),
        )
        .unwrap();

        let dims: Vec<(&str, usize)> = ds.dimensions.iter().map(|d| (d.name.as_str(), d.len)).collect();
        assert_eq!(dims, vec![("lat", 2), ("lon", 2), ("nv", 2)]);

        let names: Vec<&str> = ds.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["lat", "lon", "lat_bnds", "lon_bnds", "biomass", "landfrac"]);

        let lat_bnds = ds.variable("lat_bnds").unwrap();
        assert_eq!(lat_bnds.dimensions, vec!["lat", "nv"]);
        assert_eq!(lat_bnds.data.shape(), &[2, 2]);

        let lat = ds.variable("lat").unwrap();
        assert_eq!(lat.attribute("units"), Some(&AttrValue::from("degrees_north")));
        assert_eq!(lat.attribute("standard_name"), Some(&AttrValue::from("latitude")));
        let lon = ds.variable("lon").unwrap();
        assert_eq!(lon.attribute("units"), Some(&AttrValue::from("degrees_east")));

        assert_eq!(
            ds.attribute("title"),
            Some(&AttrValue::from(provenance::title(0.25)))
        );
        assert!(ds.attribute("source").is_some());
        assert!(ds.attribute("references").is_some());
        assert!(ds.attribute("history").is_some());
    }

    #[test]
    fn test_fill_value_conventions() {
        let landfrac = RasterBand::new(array![[100.0, 100.0], [0.0, 100.0]], None);
        let ds = GriddedDataset::assemble(
            &biomass_grid(Some(-9999.0)),
            &landfrac,
            &ConvertOptions::new(0.1),
            created(),
        )
        .unwrap();

        let biomass = ds.variable("biomass").unwrap();
        assert!(biomass.fill_value.unwrap().is_nan());
        assert!(biomass.has_explicit_fill());
        assert_eq!(biomass.attribute("units"), Some(&AttrValue::from("g m-2")));
        assert!(biomass.data[[0, 1]].is_nan());

        let landfrac = ds.variable("landfrac").unwrap();
        assert!(landfrac.fill_value.unwrap().is_nan());
        assert!(!landfrac.has_explicit_fill());
        assert_eq!(
            landfrac.attribute("long_name"),
            Some(&AttrValue::from("land area fraction"))
        );
        assert_eq!(landfrac.data, array![[100.0f32, 100.0], [0.0, 100.0]].into_dyn());
    }

    #[test]
    fn test_mismatched_landfrac_is_rejected() {
        let landfrac = RasterBand::new(ndarray::Array2::zeros((3, 2)), None);
        let result = GriddedDataset::assemble(
            &biomass_grid(None),
            &landfrac,
            &ConvertOptions::new(0.25),
            created(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_set_attribute_replaces() {
        let mut var = GridVariable::new("x", &[], ndarray::ArrayD::zeros(IxDyn(&[])));
        var.set_attribute("units", "a");
        var.set_attribute("units", "b");
        assert_eq!(var.attributes.len(), 1);
        assert_eq!(var.attribute("units"), Some(&AttrValue::from("b")));
    }
}
