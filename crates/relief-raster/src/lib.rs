//! # relief-raster
//!
//! GeoTIFF access for DEM rasters.
//!
//! This crate is the raster side of the `relief` workspace: it opens a
//! georeferenced TIFF and exposes the pieces elevation sampling needs,
//! without interpreting them:
//!
//! - the six-coefficient affine transform between pixel and ground
//!   coordinates ([`GeoTransform`]),
//! - raster dimensions in pixels,
//! - the native coordinate reference system as an EPSG code, read from
//!   the GeoTIFF key directory,
//! - the nodata sentinel, if the file declares one,
//! - single-pixel value reads.
//!
//! A minimal writer ([`write_geotiff`]) is included so tests and tooling
//! can fabricate small tiles instead of shipping binary fixtures.
//!
//! ## Example
//!
//! ```no_run
//! use relief_raster::GeoTiff;
//!
//! let tiff = GeoTiff::open("dem_data/swissalti3d_2056-1166_0.5_2056_5728.tif")?;
//! let (width, height) = tiff.dimensions();
//! println!("{}x{} pixels, EPSG:{:?}", width, height, tiff.epsg());
//! let value = tiff.read_pixel(0, 0);
//! # Ok::<(), relief_raster::RasterError>(())
//! ```

mod dataset;
mod error;
mod geotransform;
mod write;

pub use dataset::GeoTiff;
pub use error::RasterError;
pub use geotransform::GeoTransform;
pub use write::write_geotiff;

/// Result type for raster operations.
pub type Result<T> = std::result::Result<T, RasterError>;
