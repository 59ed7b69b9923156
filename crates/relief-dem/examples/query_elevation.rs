//! Example: Query elevation from a folder of DEM tiles.
//!
//! Usage: cargo run --example query_elevation -- <lat> <lon> [dem_dir]

use relief_dem::DemManager;
use std::env;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <lat> <lon> [dem_dir]", args[0]);
        eprintln!("Example: {} 46.9480 7.4474 ./dem_data", args[0]);
        std::process::exit(1);
    }

    let lat: f64 = args[1].parse().expect("Invalid latitude");
    let lon: f64 = args[2].parse().expect("Invalid longitude");
    let dem_dir = args.get(3).map(|s| s.as_str()).unwrap_or("dem_data");

    let mut manager = DemManager::new(dem_dir);
    let count = manager
        .load_tiles_for_points(&[(lat, lon)])
        .expect("Failed to load DEM tiles");

    println!("Loaded {} tiles from {}", count, dem_dir);
    for tile in manager.tiles() {
        let (res_x, res_y) = tile.resolution_meters();
        println!(
            "  {} ({:.1} x {:.1} m/px)",
            tile.path().display(),
            res_x,
            res_y
        );
    }

    match manager.elevation(lat, lon) {
        Some(elevation) => println!("Elevation at ({}, {}): {:.2} m", lat, lon, elevation),
        None => println!("No data at ({}, {})", lat, lon),
    }
}
