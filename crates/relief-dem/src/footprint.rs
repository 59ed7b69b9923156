//! Geographic tile footprints.

/// Default footprint expansion in degrees.
///
/// Absorbs floating-point and reprojection rounding at tile edges so a
/// point on a shared boundary is claimed by both neighbors.
pub const DEFAULT_EPSILON_DEG: f64 = 1e-6;

/// A geographic bounding box in WGS84 degrees.
///
/// Used both for tile footprints (expanded by an epsilon at
/// construction) and for the extent of a query batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileFootprint {
    /// South edge.
    pub min_lat: f64,
    /// North edge.
    pub max_lat: f64,
    /// West edge.
    pub min_lon: f64,
    /// East edge.
    pub max_lon: f64,
}

impl TileFootprint {
    /// Create a footprint from explicit edges.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Bounding box of a set of `(lon, lat)` corner points, expanded by
    /// `epsilon_deg` on every side.
    ///
    /// Returns a non-degenerate box for any non-degenerate corner set.
    pub fn from_corners(corners: &[(f64, f64)], epsilon_deg: f64) -> Self {
        let mut min_lon = f64::INFINITY;
        let mut max_lon = f64::NEG_INFINITY;
        let mut min_lat = f64::INFINITY;
        let mut max_lat = f64::NEG_INFINITY;

        for &(lon, lat) in corners {
            min_lon = min_lon.min(lon);
            max_lon = max_lon.max(lon);
            min_lat = min_lat.min(lat);
            max_lat = max_lat.max(lat);
        }

        Self {
            min_lat: min_lat - epsilon_deg,
            max_lat: max_lat + epsilon_deg,
            min_lon: min_lon - epsilon_deg,
            max_lon: max_lon + epsilon_deg,
        }
    }

    /// Bounding box over a batch of `(lat, lon)` query points, or
    /// `None` for an empty batch.
    pub fn of_points(points: &[(f64, f64)]) -> Option<Self> {
        let (&(first_lat, first_lon), rest) = points.split_first()?;

        let mut bbox = Self::new(first_lat, first_lat, first_lon, first_lon);
        for &(lat, lon) in rest {
            bbox.min_lat = bbox.min_lat.min(lat);
            bbox.max_lat = bbox.max_lat.max(lat);
            bbox.min_lon = bbox.min_lon.min(lon);
            bbox.max_lon = bbox.max_lon.max(lon);
        }
        Some(bbox)
    }

    /// Check if a coordinate falls within the box (edges inclusive).
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }

    /// Check bounding-box overlap with another box (touching counts).
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.max_lat < other.min_lat
            || self.min_lat > other.max_lat
            || self.max_lon < other.min_lon
            || self.min_lon > other.max_lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_corners_expands() {
        let corners = [(8.0, 47.0), (9.0, 47.0), (8.0, 46.0), (9.0, 46.0)];
        let fp = TileFootprint::from_corners(&corners, 1e-6);

        assert_relative_eq!(fp.min_lat, 46.0 - 1e-6);
        assert_relative_eq!(fp.max_lat, 47.0 + 1e-6);
        assert_relative_eq!(fp.min_lon, 8.0 - 1e-6);
        assert_relative_eq!(fp.max_lon, 9.0 + 1e-6);

        // A boundary point within epsilon is still inside.
        assert!(fp.contains(46.0 - 5e-7, 8.5));
        assert!(!fp.contains(46.0 - 1e-5, 8.5));
    }

    #[test]
    fn test_contains() {
        let fp = TileFootprint::new(46.0, 47.0, 8.0, 9.0);
        assert!(fp.contains(46.5, 8.5));
        assert!(fp.contains(46.0, 8.0)); // corner
        assert!(fp.contains(47.0, 9.0)); // corner
        assert!(!fp.contains(45.9, 8.5));
        assert!(!fp.contains(47.1, 8.5));
        assert!(!fp.contains(46.5, 7.9));
        assert!(!fp.contains(46.5, 9.1));
    }

    #[test]
    fn test_intersects() {
        let a = TileFootprint::new(46.0, 47.0, 8.0, 9.0);

        let overlapping = TileFootprint::new(46.5, 47.5, 8.5, 9.5);
        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));

        let touching = TileFootprint::new(47.0, 48.0, 8.0, 9.0);
        assert!(a.intersects(&touching));

        let north = TileFootprint::new(47.5, 48.5, 8.0, 9.0);
        assert!(!a.intersects(&north));

        let east = TileFootprint::new(46.0, 47.0, 9.5, 10.5);
        assert!(!a.intersects(&east));
    }

    #[test]
    fn test_of_points() {
        assert_eq!(TileFootprint::of_points(&[]), None);

        let bbox = TileFootprint::of_points(&[(46.5, 8.5), (46.2, 8.9), (46.8, 8.1)]).unwrap();
        assert_relative_eq!(bbox.min_lat, 46.2);
        assert_relative_eq!(bbox.max_lat, 46.8);
        assert_relative_eq!(bbox.min_lon, 8.1);
        assert_relative_eq!(bbox.max_lon, 8.9);

        let single = TileFootprint::of_points(&[(46.5, 8.5)]).unwrap();
        assert_relative_eq!(single.min_lat, single.max_lat);
        assert_relative_eq!(single.min_lon, single.max_lon);
    }
}
