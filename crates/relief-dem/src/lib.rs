//! # relief-dem
//!
//! Ground-elevation lookup for arbitrary (latitude, longitude) points
//! from a local folder of heterogeneous DEM GeoTIFF tiles.
//!
//! ## Overview
//!
//! Two dataset families are recognized by file name:
//!
//! - **Fine-grid tiles** named like `swissalti3d_2573-1085_0.5_2056_5728.tif`:
//!   a regional high-resolution dataset carrying two grid cell indices
//!   and a resolution tag in meters (`0.5`, `2`, ...). Tiles may be in a
//!   projected reference system (swisstopo ships LV95, EPSG:2056).
//! - **Coarse-grid tiles** named like `ASTGTMV3_N46E008_dem.tif`: the
//!   global ASTER 30 m dataset in 1°×1° WGS84 cells, used only as a
//!   fallback when no fine-grid tile covers the queried area.
//!
//! For each batch of query points the [`DemManager`] scans the folder,
//! keeps only the finest file per fine-grid cell, loads the tiles whose
//! footprint overlaps the batch extent, and falls back to the coarse
//! tier when no fine tile matched. Queries probe the loaded tiles in
//! order and skip past nodata hits, so overlapping tiles act as
//! redundant sources.
//!
//! Sampling is nearest-pixel (no interpolation) and files are never
//! renamed or modified.
//!
//! ## Example
//!
//! ```no_run
//! use relief_dem::DemManager;
//!
//! let mut manager = DemManager::new("dem_data");
//! manager.load_tiles_for_points(&[(46.95, 7.44), (46.96, 7.45)])?;
//!
//! match manager.elevation(46.95, 7.44) {
//!     Some(elevation) => println!("Elevation: {elevation} m"),
//!     None => println!("No data"),
//! }
//! # Ok::<(), relief_dem::DemError>(())
//! ```

mod classify;
mod error;
mod footprint;
mod manager;
mod select;
mod tile;

pub use classify::{classify, TileName};
pub use error::DemError;
pub use footprint::{TileFootprint, DEFAULT_EPSILON_DEG};
pub use manager::DemManager;
pub use tile::DemTile;

/// Result type for DEM operations.
pub type Result<T> = std::result::Result<T, DemError>;
