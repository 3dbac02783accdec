//! Gridded output sinks
//!
//! A [`GridSink`] serializes a [`GriddedDataset`]. [`NetCDFWriter`] writes a
//! NetCDF-4 file at a path; [`MemorySink`] keeps the dataset in memory so the
//! conversion can be inspected without touching the file system.

use crate::dataset::{AttrValue, GriddedDataset, FILL_VALUE_ATTR};
use crate::errors::Result;
use netcdf::create;
use std::{fs, path::Path};
use tracing::debug;

/// Destination for an assembled dataset
pub trait GridSink {
    fn write(&mut self, dataset: &GriddedDataset) -> Result<()>;
}

/// Writes datasets to a NetCDF-4 file, replacing any existing file
pub struct NetCDFWriter<'a> {
    output_path: &'a Path,
}

impl<'a> NetCDFWriter<'a> {
    /// Create a new NetCDF writer
    pub fn new(output_path: &'a Path) -> Self {
        Self { output_path }
    }
}

impl GridSink for NetCDFWriter<'_> {
    fn write(&mut self, dataset: &GriddedDataset) -> Result<()> {
        if self.output_path.exists() {
            fs::remove_file(self.output_path)?;
        }

        let mut file = create(self.output_path)?;

        // Define dimensions
        for dim in &dataset.dimensions {
            file.add_dimension(&dim.name, dim.len)?;
        }

        for var in &dataset.variables {
            let dim_refs: Vec<&str> = var.dimensions.iter().map(|s| s.as_str()).collect();
            let mut nc_var = file.add_variable::<f32>(&var.name, &dim_refs)?;

            // Declaring the fill value already writes `_FillValue`
            if let Some(fv) = var.fill_value {
                nc_var.set_fill_value(fv)?;
            }

            for (name, value) in &var.attributes {
                if name == FILL_VALUE_ATTR && var.fill_value.is_some() {
                    continue;
                }
                match value {
                    AttrValue::Str(val) => {
                        nc_var.put_attribute(name, val.as_str())?;
                    }
                    AttrValue::Float(val) => {
                        nc_var.put_attribute(name, *val)?;
                    }
                }
            }

            let values: Vec<f32> = var.data.iter().cloned().collect();
            nc_var.put_values(&values, ..)?;
            debug!(variable = %var.name, shape = ?var.data.shape(), "wrote variable");
        }

        for (name, value) in &dataset.attributes {
            match value {
                AttrValue::Str(val) => {
                    file.add_attribute(name, val.as_str())?;
                }
                AttrValue::Float(val) => {
                    file.add_attribute(name, *val)?;
                }
            }
        }

        // The file is closed when `file` is dropped
        Ok(())
    }
}

/// Keeps the last written dataset in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub dataset: Option<GriddedDataset>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_dataset(self) -> Option<GriddedDataset> {
        self.dataset
    }
}

impl GridSink for MemorySink {
    fn write(&mut self, dataset: &GriddedDataset) -> Result<()> {
        self.dataset = Some(dataset.clone());
        Ok(())
    }
}
