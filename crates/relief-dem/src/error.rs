//! Error types for the DEM crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when working with DEM data.
///
/// Only failures to access the tile folder itself abort a batch load;
/// anything local to one tile or one point is degraded to a logged skip
/// or a `None` result instead.
#[derive(Debug, Error)]
pub enum DemError {
    /// I/O error reading the tile folder.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The tile folder does not exist or is not a directory.
    #[error("DEM tile folder not found: {0}")]
    TileFolderNotFound(PathBuf),

    /// A raster file could not be opened or decoded.
    #[error("Raster error: {0}")]
    Raster(#[from] relief_raster::RasterError),

    /// A reprojection pair could not be set up or a footprint corner
    /// could not be transformed.
    #[error("Reprojection error: {0}")]
    Crs(#[from] relief_crs::CrsError),
}
