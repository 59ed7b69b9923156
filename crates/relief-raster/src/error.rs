//! Error types for raster access.

use thiserror::Error;

/// Errors that can occur when reading or writing GeoTIFF files.
#[derive(Debug, Error)]
pub enum RasterError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TIFF decoding or encoding error.
    #[error("TIFF error: {0}")]
    Tiff(#[from] tiff::TiffError),

    /// The file carries no usable georeferencing tags.
    #[error("No georeferencing in GeoTIFF: {0}")]
    MissingGeoreference(String),

    /// Pixel buffer does not match the declared raster dimensions.
    #[error("Pixel buffer length {actual} does not match {width}x{height} raster")]
    InvalidDimensions {
        /// Raster width in pixels.
        width: u32,
        /// Raster height in pixels.
        height: u32,
        /// Length of the supplied buffer.
        actual: usize,
    },
}
