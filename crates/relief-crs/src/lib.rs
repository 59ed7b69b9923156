//! # relief-crs
//!
//! Point reprojection between coordinate reference systems, identified
//! by EPSG code.
//!
//! This crate is the reprojection side of the `relief` workspace. It
//! wraps [`proj4rs`] (pure Rust, no system PROJ installation) behind a
//! [`CoordTransformer`] that owns a source/target projection pair and
//! handles the degree/radian convention at geographic ends. Axis order
//! is always x-first (longitude, latitude for geographic systems),
//! matching the affine model of georeferenced rasters.
//!
//! The reference geographic system used throughout the workspace is
//! named explicitly as [`EPSG_WGS84`] rather than assumed by
//! convention.
//!
//! ## Example
//!
//! ```
//! use relief_crs::{CoordTransformer, EPSG_WGS84};
//!
//! // Swiss LV95 to WGS84 geographic.
//! let to_wgs84 = CoordTransformer::new(2056, EPSG_WGS84)?;
//! let (lon, lat) = to_wgs84.transform(2_600_000.0, 1_200_000.0)?;
//! assert!((lat - 46.95).abs() < 0.01);
//! # Ok::<(), relief_crs::CrsError>(())
//! ```

mod epsg;
mod transform;

pub use epsg::{is_geographic, proj_string, EPSG_WGS84};
pub use transform::{CoordTransformer, CrsError};

/// Result type for reprojection operations.
pub type Result<T> = std::result::Result<T, CrsError>;
