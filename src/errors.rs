//! Centralized error handling for biomass2nc
//!
//! Every fallible operation in the crate returns [`Result`], so raster, NetCDF
//! and I/O failures surface through one error type with their source attached.

use std::fmt;
use std::path::PathBuf;

/// Main error type for conversion operations
#[derive(Debug)]
pub enum ConvertError {
    /// GDAL failed to open or decode a raster
    RasterError(gdal::errors::GdalError),

    /// NetCDF file operation errors
    NetCDFError(netcdf::Error),

    /// I/O operation errors
    IoError(std::io::Error),

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// No raster was registered for a path (in-memory reader)
    RasterNotFound { path: PathBuf },

    /// Generic error for anything else
    Generic(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::RasterError(e) => write!(f, "Raster error: {}", e),
            ConvertError::NetCDFError(e) => write!(f, "NetCDF error: {}", e),
            ConvertError::IoError(e) => write!(f, "I/O error: {}", e),
            ConvertError::ArrayError(e) => write!(f, "Array error: {}", e),
            ConvertError::RasterNotFound { path } => {
                write!(f, "Raster '{}' not found", path.display())
            }
            ConvertError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::RasterError(e) => Some(e),
            ConvertError::NetCDFError(e) => Some(e),
            ConvertError::IoError(e) => Some(e),
            ConvertError::ArrayError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<gdal::errors::GdalError> for ConvertError {
    fn from(error: gdal::errors::GdalError) -> Self {
        ConvertError::RasterError(error)
    }
}

impl From<netcdf::Error> for ConvertError {
    fn from(error: netcdf::Error) -> Self {
        ConvertError::NetCDFError(error)
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(error: std::io::Error) -> Self {
        ConvertError::IoError(error)
    }
}

impl From<ndarray::ShapeError> for ConvertError {
    fn from(error: ndarray::ShapeError) -> Self {
        ConvertError::ArrayError(error)
    }
}

impl From<String> for ConvertError {
    fn from(error: String) -> Self {
        ConvertError::Generic(error)
    }
}

impl From<&str> for ConvertError {
    fn from(error: &str) -> Self {
        ConvertError::Generic(error.to_string())
    }
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
