//! Tile file-name classification.
//!
//! Two naming conventions are recognized:
//!
//! - Fine grid: `<prefix>_<grid_x>-<grid_y>_<resolution>_<n>_<m>.tif`,
//!   e.g. `swissalti3d_2573-1085_0.5_2056_5728.tif`. The resolution tag
//!   is in meters; `0.5` is finer than `2`.
//! - Coarse grid: `ASTGTMV<version>_N<lat>E<lon>_dem.tif`, e.g.
//!   `ASTGTMV3_N46E008_dem.tif`. The two-digit latitude and three-digit
//!   longitude name the southwest corner of a 1°×1° cell.
//!
//! Names matching neither pattern are not errors; they are simply
//! excluded from consideration.

use crate::footprint::TileFootprint;
use regex::Regex;
use std::sync::OnceLock;

/// Ground resolution of coarse-grid (ASTER) tiles in meters.
const COARSE_RESOLUTION_M: f64 = 30.0;

/// Structured descriptor parsed from a recognized tile file name.
#[derive(Debug, Clone, PartialEq)]
pub enum TileName {
    /// Fine-grid tile: regional high-resolution dataset.
    Fine {
        /// First grid cell index.
        grid_x: u32,
        /// Second grid cell index.
        grid_y: u32,
        /// Resolution tag in meters; smaller is finer.
        resolution_m: f64,
    },
    /// Coarse-grid tile: global 1°×1° fallback dataset.
    Coarse {
        /// Latitude of the cell's southwest corner in degrees north.
        lat_deg: i32,
        /// Longitude of the cell's southwest corner in degrees east.
        lon_deg: i32,
    },
}

impl TileName {
    /// Nominal resolution of the named dataset in meters.
    pub fn resolution_m(&self) -> f64 {
        match self {
            TileName::Fine { resolution_m, .. } => *resolution_m,
            TileName::Coarse { .. } => COARSE_RESOLUTION_M,
        }
    }

    /// Footprint known from the name alone, without opening the file.
    ///
    /// Only coarse-grid cells have one: `[lat, lat+1] × [lon, lon+1]`,
    /// unexpanded. Fine-grid footprints require the file's
    /// georeferencing.
    pub fn nominal_footprint(&self) -> Option<TileFootprint> {
        match *self {
            TileName::Fine { .. } => None,
            TileName::Coarse { lat_deg, lon_deg } => Some(TileFootprint::new(
                f64::from(lat_deg),
                f64::from(lat_deg + 1),
                f64::from(lon_deg),
                f64::from(lon_deg + 1),
            )),
        }
    }
}

fn fine_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // <grid_x>-<grid_y>, decimal resolution, two trailing integer
        // fields before the extension.
        Regex::new(r"_(\d+)-(\d+)_([0-9]+(?:\.[0-9]+)?)_\d+_\d+\.tif$").unwrap()
    })
}

fn coarse_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^ASTGTMV\d+_N(\d{2})E(\d{3})_dem\.tif$").unwrap())
}

/// Classify a file name into a [`TileName`], or `None` if it matches
/// neither recognized pattern.
///
/// The fine-grid pattern is tried first; a name matches at most one
/// family.
pub fn classify(name: &str) -> Option<TileName> {
    if let Some(caps) = fine_pattern().captures(name) {
        let grid_x = caps.get(1)?.as_str().parse().ok()?;
        let grid_y = caps.get(2)?.as_str().parse().ok()?;
        let resolution_m = caps.get(3)?.as_str().parse().ok()?;
        return Some(TileName::Fine {
            grid_x,
            grid_y,
            resolution_m,
        });
    }

    if let Some(caps) = coarse_pattern().captures(name) {
        let lat_deg = caps.get(1)?.as_str().parse().ok()?;
        let lon_deg = caps.get(2)?.as_str().parse().ok()?;
        return Some(TileName::Coarse { lat_deg, lon_deg });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_fine_half_meter() {
        let name = classify("grid_12-07_0.5_1_1.tif").unwrap();
        assert_eq!(
            name,
            TileName::Fine {
                grid_x: 12,
                grid_y: 7,
                resolution_m: 0.5,
            }
        );
        assert_eq!(name.resolution_m(), 0.5);
        assert_eq!(name.nominal_footprint(), None);
    }

    #[test]
    fn test_classify_fine_integer_resolution() {
        let name = classify("grid_12-07_2_1_1.tif").unwrap();
        assert_eq!(
            name,
            TileName::Fine {
                grid_x: 12,
                grid_y: 7,
                resolution_m: 2.0,
            }
        );
    }

    #[test]
    fn test_classify_swisstopo_name() {
        let name = classify("swissalti3d_2573-1085_0.5_2056_5728.tif").unwrap();
        assert_eq!(
            name,
            TileName::Fine {
                grid_x: 2573,
                grid_y: 1085,
                resolution_m: 0.5,
            }
        );
    }

    #[test]
    fn test_classify_coarse() {
        let name = classify("ASTGTMV3_N46E008_dem.tif").unwrap();
        assert_eq!(
            name,
            TileName::Coarse {
                lat_deg: 46,
                lon_deg: 8,
            }
        );
        assert_eq!(name.resolution_m(), 30.0);
    }

    #[test]
    fn test_coarse_nominal_footprint() {
        let name = classify("ASTGTMV003_N47E012_dem.tif").unwrap();
        let footprint = name.nominal_footprint().unwrap();
        assert_eq!(footprint, TileFootprint::new(47.0, 48.0, 12.0, 13.0));
    }

    #[test]
    fn test_unrecognized_names() {
        assert_eq!(classify("readme.txt"), None);
        assert_eq!(classify("USGS_13_n48w123_20240327.tif"), None);
        assert_eq!(classify("random.tif"), None);
        // Southern/western coarse cells are not part of the collection.
        assert_eq!(classify("ASTGTMV3_S46W008_dem.tif"), None);
        // Missing trailing fields on the fine pattern.
        assert_eq!(classify("grid_12-07_0.5.tif"), None);
    }

    #[test]
    fn test_fine_pattern_takes_priority() {
        // A fine-grid match wins even when embedded in an exotic prefix.
        let name = classify("ASTGTM_extract_3-4_2_9_9.tif").unwrap();
        assert!(matches!(name, TileName::Fine { grid_x: 3, grid_y: 4, .. }));
    }
}
