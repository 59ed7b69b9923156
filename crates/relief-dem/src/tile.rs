//! Single loaded DEM tile with elevation sampling.

use crate::footprint::TileFootprint;
use crate::Result;
use relief_crs::{CoordTransformer, EPSG_WGS84};
use relief_raster::{GeoTiff, GeoTransform};
use std::path::Path;
use tracing::debug;

/// A DEM tile opened from a GeoTIFF file.
///
/// Holds the decoded raster, the affine transform between pixel and
/// native ground coordinates, the reprojection into the tile's native
/// reference system when that system is not already WGS84 geographic,
/// and the tile's WGS84 footprint.
///
/// The underlying raster data is released when the tile is dropped,
/// which the manager does wholesale on every batch reload.
#[derive(Debug)]
pub struct DemTile {
    raster: GeoTiff,
    transform: GeoTransform,
    width: u32,
    height: u32,
    /// WGS84 -> native, present only when the tile is not geographic.
    to_native: Option<CoordTransformer>,
    nodata: Option<f32>,
    footprint: TileFootprint,
}

impl DemTile {
    /// Open a tile and compute its WGS84 footprint.
    ///
    /// The footprint is the min/max of the four grid corners, each
    /// reprojected native→WGS84 when the tile's CRS requires it, then
    /// expanded by `epsilon_deg` on every side. A tile without a CRS
    /// geokey is treated as already geographic.
    pub fn open<P: AsRef<Path>>(path: P, epsilon_deg: f64) -> Result<Self> {
        let raster = GeoTiff::open(path)?;
        let transform = raster.geo_transform();
        let (width, height) = raster.dimensions();

        let native_epsg = raster.epsg().filter(|&code| code != EPSG_WGS84);
        let (to_native, to_wgs84) = match native_epsg {
            Some(code) => (
                Some(CoordTransformer::new(EPSG_WGS84, code)?),
                Some(CoordTransformer::new(code, EPSG_WGS84)?),
            ),
            None => (None, None),
        };

        let corners = transform.grid_corners(width, height);
        let mut corners_wgs84 = [(0.0, 0.0); 4];
        for (slot, &(x, y)) in corners_wgs84.iter_mut().zip(corners.iter()) {
            *slot = match &to_wgs84 {
                Some(t) => t.transform(x, y)?,
                None => (x, y),
            };
        }
        let footprint = TileFootprint::from_corners(&corners_wgs84, epsilon_deg);
        let nodata = raster.nodata();

        Ok(Self {
            raster,
            transform,
            width,
            height,
            to_native,
            nodata,
            footprint,
        })
    }

    /// Path of the underlying GeoTIFF.
    pub fn path(&self) -> &Path {
        self.raster.path()
    }

    /// The tile's expanded WGS84 footprint.
    pub fn footprint(&self) -> TileFootprint {
        self.footprint
    }

    /// Raster dimensions in pixels as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check if a WGS84 coordinate falls within the expanded footprint.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.footprint.contains(lat, lon)
    }

    /// Sample the elevation at a WGS84 coordinate.
    ///
    /// Nearest-pixel sampling: the point is reprojected into the
    /// tile's native system if needed, pushed through the inverse
    /// affine transform, and rounded to the nearest pixel with
    /// `floor(v + 0.5)` (ties round up).
    ///
    /// Returns `None` when the pixel falls outside the raster grid,
    /// the read yields nothing, the value equals the nodata sentinel,
    /// or the reprojection fails. None of these abort the query; the
    /// caller simply moves on to the next candidate tile.
    pub fn elevation(&self, lat: f64, lon: f64) -> Option<f32> {
        let (x, y) = match &self.to_native {
            Some(to_native) => match to_native.transform(lon, lat) {
                Ok(point) => point,
                Err(e) => {
                    debug!("Reprojection miss at ({}, {}): {}", lat, lon, e);
                    return None;
                }
            },
            None => (lon, lat),
        };

        let px_f = (x - self.transform.origin_x) / self.transform.pixel_width;
        let py_f = (y - self.transform.origin_y) / self.transform.pixel_height;

        // Nearest pixel; ties round up.
        let px = (px_f + 0.5).floor();
        let py = (py_f + 0.5).floor();

        if px < 0.0 || py < 0.0 || px >= f64::from(self.width) || py >= f64::from(self.height) {
            return None;
        }

        let value = self.raster.read_pixel(px as u32, py as u32)?;
        if let Some(nodata) = self.nodata {
            if value == nodata {
                return None;
            }
        }
        Some(value)
    }

    /// Approximate ground resolution in meters as (x, y), measured at
    /// the footprint center.
    pub fn resolution_meters(&self) -> (f64, f64) {
        let lat_range = self.footprint.max_lat - self.footprint.min_lat;
        let lon_range = self.footprint.max_lon - self.footprint.min_lon;
        let lon_deg = lon_range / f64::from(self.width);
        let lat_deg = lat_range / f64::from(self.height);

        let center_lat = (self.footprint.min_lat + self.footprint.max_lat) / 2.0;

        // 1 degree of latitude is ~111,320 m; longitude shrinks by cos(lat).
        let meters_per_deg_lat = 111_320.0;
        let meters_per_deg_lon = 111_320.0 * center_lat.to_radians().cos();

        (lon_deg * meters_per_deg_lon, lat_deg * meters_per_deg_lat)
    }
}
