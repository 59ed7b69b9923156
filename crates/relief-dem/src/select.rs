//! Tile selection for a query batch.
//!
//! Policy, in order:
//!
//! 1. Group fine-grid files by grid cell and keep only the finest
//!    resolution per cell; coarser duplicates are never opened.
//! 2. Open each survivor and keep it if its footprint overlaps the
//!    query extent.
//! 3. Only if step 2 selected nothing, fall back to coarse-grid tiles
//!    whose nominal 1°×1° cell overlaps the query extent, and open
//!    those. The fallback is all-or-nothing at the batch level: fine
//!    coverage of any part of the extent suppresses it entirely.
//!
//! A tile that fails to open is logged and dropped; it never aborts
//! the batch. The resulting order is deterministic: fine tiles in grid
//! cell order, or coarse tiles in file-name order.

use crate::classify::{classify, TileName};
use crate::footprint::TileFootprint;
use crate::tile::DemTile;
use crate::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub(crate) fn select_tiles(
    folder: &Path,
    query: &TileFootprint,
    epsilon_deg: f64,
) -> Result<Vec<DemTile>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(folder)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "tif"))
        .collect();
    // File-name order keeps grouping and fallback order deterministic.
    paths.sort();

    let mut fine_groups: BTreeMap<(u32, u32), Vec<(f64, PathBuf)>> = BTreeMap::new();
    let mut coarse_candidates: Vec<(TileFootprint, PathBuf)> = Vec::new();

    for path in paths {
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        match classify(name) {
            Some(TileName::Fine {
                grid_x,
                grid_y,
                resolution_m,
            }) => {
                fine_groups
                    .entry((grid_x, grid_y))
                    .or_default()
                    .push((resolution_m, path));
            }
            Some(name @ TileName::Coarse { .. }) => {
                // Footprint known without opening the file.
                if let Some(footprint) = name.nominal_footprint() {
                    coarse_candidates.push((footprint, path));
                }
            }
            None => debug!("Ignoring unrecognized file name: {}", name),
        }
    }

    let mut selected = Vec::new();

    for ((grid_x, grid_y), mut entries) in fine_groups {
        // Stable sort: resolution ascending, file-name ties already in
        // directory order.
        entries.sort_by(|a, b| a.0.total_cmp(&b.0));
        let Some((resolution_m, path)) = entries.into_iter().next() else {
            continue;
        };

        match DemTile::open(&path, epsilon_deg) {
            Ok(tile) => {
                if tile.footprint().intersects(query) {
                    debug!(
                        "Selected fine tile ({}, {}) at {} m: {}",
                        grid_x,
                        grid_y,
                        resolution_m,
                        path.display()
                    );
                    selected.push(tile);
                } else {
                    debug!(
                        "Fine tile ({}, {}) outside query extent: {}",
                        grid_x,
                        grid_y,
                        path.display()
                    );
                }
            }
            Err(e) => warn!("Skipping fine tile {}: {}", path.display(), e),
        }
    }

    if selected.is_empty() {
        for (footprint, path) in coarse_candidates {
            if !footprint.intersects(query) {
                continue;
            }
            match DemTile::open(&path, epsilon_deg) {
                Ok(tile) => {
                    debug!("Selected coarse fallback tile: {}", path.display());
                    selected.push(tile);
                }
                Err(e) => warn!("Skipping coarse tile {}: {}", path.display(), e),
            }
        }
    }

    Ok(selected)
}
