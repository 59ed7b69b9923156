//! EPSG code registry for the reference systems DEM collections use.

/// WGS84 geographic coordinates (longitude/latitude in degrees).
///
/// This is the common reference system every tile footprint and query
/// point is expressed in.
pub const EPSG_WGS84: u32 = 4326;

/// Proj-string definition for a supported EPSG code.
///
/// The table covers the systems that actually occur in the supported
/// DEM collections: WGS84 geographic (ASTER), Web Mercator, and the
/// Swiss LV95/LV03 grids (swissALTI3D and predecessors).
pub fn proj_string(epsg: u32) -> Option<&'static str> {
    match epsg {
        4326 => Some("+proj=longlat +datum=WGS84 +no_defs"),
        4258 => Some("+proj=longlat +ellps=GRS80 +no_defs"),
        3857 => Some(
            "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 \
             +x_0=0 +y_0=0 +k=1 +units=m +no_defs",
        ),
        // Swiss LV95 (CH1903+)
        2056 => Some(
            "+proj=somerc +lat_0=46.95240555555556 +lon_0=7.439583333333333 \
             +k_0=1 +x_0=2600000 +y_0=1200000 +ellps=bessel \
             +towgs84=674.374,15.056,405.346,0,0,0,0 +units=m +no_defs",
        ),
        // Swiss LV03 (CH1903)
        21781 => Some(
            "+proj=somerc +lat_0=46.95240555555556 +lon_0=7.439583333333333 \
             +k_0=1 +x_0=600000 +y_0=200000 +ellps=bessel \
             +towgs84=674.374,15.056,405.346,0,0,0,0 +units=m +no_defs",
        ),
        _ => None,
    }
}

/// Whether an EPSG code denotes a geographic (degree-based) system.
pub fn is_geographic(epsg: u32) -> bool {
    matches!(epsg, 4326 | 4258)
}
