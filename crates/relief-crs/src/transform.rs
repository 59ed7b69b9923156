//! Reusable point transformer between two reference systems.

use crate::epsg::{is_geographic, proj_string};
use proj4rs::proj::Proj;
use thiserror::Error;

/// Errors raised while setting up or running a reprojection.
#[derive(Debug, Error)]
pub enum CrsError {
    /// The EPSG code is not in the supported registry.
    #[error("EPSG:{0} is not supported")]
    UnsupportedEpsg(u32),

    /// The projection definition failed to initialize.
    #[error("Cannot initialize EPSG:{epsg}: {message}")]
    Init {
        /// EPSG code of the failing definition.
        epsg: u32,
        /// Underlying projection error.
        message: String,
    },

    /// A point could not be transformed.
    #[error("Transform EPSG:{from} -> EPSG:{to} failed: {message}")]
    Transform {
        /// Source EPSG code.
        from: u32,
        /// Target EPSG code.
        to: u32,
        /// Underlying projection error.
        message: String,
    },
}

/// A prepared transformation between a source and a target reference
/// system.
///
/// Geographic ends take and yield degrees with x-first axis order
/// (longitude, latitude); the radian convention of the underlying
/// projection engine is handled internally.
pub struct CoordTransformer {
    source: Proj,
    target: Proj,
    source_epsg: u32,
    target_epsg: u32,
    source_geographic: bool,
    target_geographic: bool,
}

impl std::fmt::Debug for CoordTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoordTransformer")
            .field("source_epsg", &self.source_epsg)
            .field("target_epsg", &self.target_epsg)
            .finish_non_exhaustive()
    }
}

impl CoordTransformer {
    /// Prepare a transformer between two EPSG codes.
    pub fn new(source_epsg: u32, target_epsg: u32) -> crate::Result<Self> {
        let source = init_proj(source_epsg)?;
        let target = init_proj(target_epsg)?;

        Ok(Self {
            source,
            target,
            source_epsg,
            target_epsg,
            source_geographic: is_geographic(source_epsg),
            target_geographic: is_geographic(target_epsg),
        })
    }

    /// EPSG code of the source system.
    pub fn source_epsg(&self) -> u32 {
        self.source_epsg
    }

    /// EPSG code of the target system.
    pub fn target_epsg(&self) -> u32 {
        self.target_epsg
    }

    /// Transform a single point from the source to the target system.
    pub fn transform(&self, x: f64, y: f64) -> crate::Result<(f64, f64)> {
        let (in_x, in_y) = if self.source_geographic {
            (x.to_radians(), y.to_radians())
        } else {
            (x, y)
        };

        let mut point = (in_x, in_y, 0.0);
        proj4rs::transform::transform(&self.source, &self.target, &mut point).map_err(|e| {
            CrsError::Transform {
                from: self.source_epsg,
                to: self.target_epsg,
                message: e.to_string(),
            }
        })?;

        if self.target_geographic {
            Ok((point.0.to_degrees(), point.1.to_degrees()))
        } else {
            Ok((point.0, point.1))
        }
    }
}

fn init_proj(epsg: u32) -> crate::Result<Proj> {
    let definition = proj_string(epsg).ok_or(CrsError::UnsupportedEpsg(epsg))?;
    Proj::from_proj_string(definition).map_err(|e| CrsError::Init {
        epsg,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSG_WGS84;
    use approx::assert_relative_eq;

    #[test]
    fn test_lv95_origin_to_wgs84() {
        // Bern old observatory: LV95 (2600000, 1200000), the projection
        // center. Official WGS84 position: 46°57'03.9"N 7°26'19.1"E.
        let t = CoordTransformer::new(2056, EPSG_WGS84).unwrap();
        let (lon, lat) = t.transform(2_600_000.0, 1_200_000.0).unwrap();

        assert_relative_eq!(lon, 7.43864, epsilon = 1e-3);
        assert_relative_eq!(lat, 46.95108, epsilon = 1e-3);
    }

    #[test]
    fn test_roundtrip_lv95() {
        let fwd = CoordTransformer::new(EPSG_WGS84, 2056).unwrap();
        let inv = CoordTransformer::new(2056, EPSG_WGS84).unwrap();

        let (e, n) = fwd.transform(8.54, 47.38).unwrap();
        // Zurich area lands well inside the LV95 grid.
        assert!(e > 2_600_000.0 && e < 2_800_000.0, "easting {}", e);
        assert!(n > 1_200_000.0 && n < 1_300_000.0, "northing {}", n);

        let (lon, lat) = inv.transform(e, n).unwrap();
        assert_relative_eq!(lon, 8.54, epsilon = 1e-6);
        assert_relative_eq!(lat, 47.38, epsilon = 1e-6);
    }

    #[test]
    fn test_unsupported_code() {
        let err = CoordTransformer::new(99999, EPSG_WGS84).unwrap_err();
        assert!(matches!(err, CrsError::UnsupportedEpsg(99999)));
    }
}
