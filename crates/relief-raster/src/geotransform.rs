//! Affine georeferencing for rasters.

/// Affine transformation coefficients mapping pixel indices to ground
/// coordinates.
///
/// Converts between pixel coordinates (col, row) and native ground
/// coordinates (x, y):
///
/// ```text
/// x = origin_x + col * pixel_width + row * row_rotation
/// y = origin_y + col * col_rotation + row * pixel_height
/// ```
///
/// For north-up images `row_rotation` and `col_rotation` are 0 and
/// `pixel_height` is negative (y decreases as rows go south).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoTransform {
    /// X coordinate of the upper-left corner.
    pub origin_x: f64,
    /// Y coordinate of the upper-left corner.
    pub origin_y: f64,
    /// Pixel width (cell size in X direction).
    pub pixel_width: f64,
    /// Pixel height (cell size in Y direction, usually negative).
    pub pixel_height: f64,
    /// Rotation about the X axis (usually 0).
    pub row_rotation: f64,
    /// Rotation about the Y axis (usually 0).
    pub col_rotation: f64,
}

impl GeoTransform {
    /// Create a new north-up transform (no rotation).
    pub fn new(origin_x: f64, origin_y: f64, pixel_width: f64, pixel_height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            pixel_width,
            pixel_height,
            row_rotation: 0.0,
            col_rotation: 0.0,
        }
    }

    /// Create from a GDAL-style array
    /// `[origin_x, pixel_width, row_rotation, origin_y, col_rotation, pixel_height]`.
    pub fn from_gdal(coeffs: [f64; 6]) -> Self {
        Self {
            origin_x: coeffs[0],
            pixel_width: coeffs[1],
            row_rotation: coeffs[2],
            origin_y: coeffs[3],
            col_rotation: coeffs[4],
            pixel_height: coeffs[5],
        }
    }

    /// Convert to a GDAL-style array.
    pub fn to_gdal(&self) -> [f64; 6] {
        [
            self.origin_x,
            self.pixel_width,
            self.row_rotation,
            self.origin_y,
            self.col_rotation,
            self.pixel_height,
        ]
    }

    /// Ground coordinates of the top-left corner of a pixel.
    pub fn pixel_to_geo_corner(&self, col: f64, row: f64) -> (f64, f64) {
        let x = self.origin_x + col * self.pixel_width + row * self.row_rotation;
        let y = self.origin_y + col * self.col_rotation + row * self.pixel_height;
        (x, y)
    }

    /// The four grid corners of a `width` x `height` raster in native
    /// ground coordinates: top-left, top-right, bottom-left, bottom-right.
    pub fn grid_corners(&self, width: u32, height: u32) -> [(f64, f64); 4] {
        let (w, h) = (f64::from(width), f64::from(height));
        [
            self.pixel_to_geo_corner(0.0, 0.0),
            self.pixel_to_geo_corner(w, 0.0),
            self.pixel_to_geo_corner(0.0, h),
            self.pixel_to_geo_corner(w, h),
        ]
    }

    /// Check if this is a north-up transform (no rotation).
    pub fn is_north_up(&self) -> bool {
        self.row_rotation.abs() < 1e-10
            && self.col_rotation.abs() < 1e-10
            && self.pixel_height < 0.0
    }
}

impl Default for GeoTransform {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0, -1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gdal_roundtrip() {
        let coeffs = [2600000.0, 0.5, 0.0, 1200000.0, 0.0, -0.5];
        let gt = GeoTransform::from_gdal(coeffs);
        assert_eq!(gt.to_gdal(), coeffs);
        assert!(gt.is_north_up());
    }

    #[test]
    fn test_grid_corners_north_up() {
        let gt = GeoTransform::new(8.0, 47.0, 0.25, -0.25);
        let corners = gt.grid_corners(4, 4);

        assert_relative_eq!(corners[0].0, 8.0);
        assert_relative_eq!(corners[0].1, 47.0);
        assert_relative_eq!(corners[1].0, 9.0);
        assert_relative_eq!(corners[1].1, 47.0);
        assert_relative_eq!(corners[2].0, 8.0);
        assert_relative_eq!(corners[2].1, 46.0);
        assert_relative_eq!(corners[3].0, 9.0);
        assert_relative_eq!(corners[3].1, 46.0);
    }

    #[test]
    fn test_rotated_is_not_north_up() {
        let mut gt = GeoTransform::new(0.0, 0.0, 1.0, -1.0);
        gt.row_rotation = 0.1;
        assert!(!gt.is_north_up());
    }
}
