//! DEM manager: batch tile loading and per-point elevation queries.

use crate::footprint::{TileFootprint, DEFAULT_EPSILON_DEG};
use crate::select::select_tiles;
use crate::tile::DemTile;
use crate::{DemError, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Manager owning the tiles loaded for the current query batch.
///
/// Each call to [`load_tiles_for_points`](Self::load_tiles_for_points)
/// re-runs tile selection over the folder and replaces the loaded set
/// wholesale; there is no incremental reuse across batches. Queries
/// probe the loaded tiles in selection order and skip past nodata
/// results, so overlapping tiles of differing validity act as
/// redundant sources.
///
/// # Example
///
/// ```no_run
/// use relief_dem::DemManager;
///
/// let mut manager = DemManager::new("dem_data");
/// let count = manager.load_tiles_for_points(&[(46.5, 8.5)])?;
/// println!("Loaded {count} tiles");
///
/// match manager.elevation(46.5, 8.5) {
///     Some(elevation) => println!("Elevation: {elevation} m"),
///     None => println!("No data"),
/// }
/// # Ok::<(), relief_dem::DemError>(())
/// ```
#[derive(Debug)]
pub struct DemManager {
    folder: PathBuf,
    epsilon_deg: f64,
    tiles: Vec<DemTile>,
}

impl DemManager {
    /// Create a manager over a folder of DEM GeoTIFF files.
    ///
    /// The folder is only read when tiles are loaded; it is never
    /// written to.
    pub fn new<P: Into<PathBuf>>(folder: P) -> Self {
        Self::with_epsilon(folder, DEFAULT_EPSILON_DEG)
    }

    /// Create a manager with a custom footprint expansion epsilon.
    pub fn with_epsilon<P: Into<PathBuf>>(folder: P, epsilon_deg: f64) -> Self {
        Self {
            folder: folder.into(),
            epsilon_deg,
            tiles: Vec::new(),
        }
    }

    /// The tile folder this manager reads from.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Select and load the tiles relevant to a batch of `(lat, lon)`
    /// query points, replacing any previously loaded set.
    ///
    /// Returns the number of tiles loaded. Zero is a normal outcome
    /// (no tile overlaps the batch extent, or the batch is empty);
    /// only a missing or unreadable tile folder is an error.
    pub fn load_tiles_for_points(&mut self, points: &[(f64, f64)]) -> Result<usize> {
        // Release the previous batch before opening anything new.
        self.tiles.clear();

        let Some(query) = TileFootprint::of_points(points) else {
            return Ok(0);
        };
        if !self.folder.is_dir() {
            return Err(DemError::TileFolderNotFound(self.folder.clone()));
        }

        self.tiles = select_tiles(&self.folder, &query, self.epsilon_deg)?;
        info!(
            "Loaded {} DEM tiles for a batch of {} points",
            self.tiles.len(),
            points.len()
        );
        Ok(self.tiles.len())
    }

    /// Query the elevation at a WGS84 coordinate, in meters.
    ///
    /// Probes the loaded tiles in order; the first tile that contains
    /// the point and yields a non-missing value wins. A containing tile
    /// that answers nodata does not short-circuit the probe.
    pub fn elevation(&self, lat: f64, lon: f64) -> Option<f32> {
        for tile in &self.tiles {
            if tile.contains(lat, lon) {
                if let Some(elevation) = tile.elevation(lat, lon) {
                    return Some(elevation);
                }
            }
        }
        None
    }

    /// The tiles loaded for the current batch, in probe order.
    pub fn tiles(&self) -> &[DemTile] {
        &self.tiles
    }

    /// Number of tiles loaded for the current batch.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch_clears_tiles() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = DemManager::new(dir.path());
        assert_eq!(manager.load_tiles_for_points(&[]).unwrap(), 0);
        assert_eq!(manager.tile_count(), 0);
    }

    #[test]
    fn test_missing_folder_is_fatal() {
        let mut manager = DemManager::new("/definitely/not/here");
        let err = manager.load_tiles_for_points(&[(46.5, 8.5)]).unwrap_err();
        assert!(matches!(err, DemError::TileFolderNotFound(_)));
    }

    #[test]
    fn test_query_with_no_tiles_is_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = DemManager::new(dir.path());
        assert_eq!(manager.load_tiles_for_points(&[(46.5, 8.5)]).unwrap(), 0);
        assert_eq!(manager.elevation(46.5, 8.5), None);
    }
}
