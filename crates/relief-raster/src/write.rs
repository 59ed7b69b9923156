//! Minimal GeoTIFF writer.
//!
//! Writes a single-band 32-bit float raster with the tag set the reader
//! understands: ModelPixelScale (33550), ModelTiepoint (33922), a
//! GeoKeyDirectory (34735) carrying the CRS code, and GDAL_NODATA
//! (42113). Enough for tests and small tooling; not a general-purpose
//! GeoTIFF encoder.

use crate::{GeoTransform, RasterError, Result};
use std::path::Path;
use tiff::encoder::colortype::Gray32Float;
use tiff::encoder::TiffEncoder;
use tiff::tags::Tag;

/// Write a single-band `f32` GeoTIFF.
///
/// `data` is row-major, north to south, and must contain exactly
/// `width * height` samples. The transform must be north-up (the tag
/// pair used here cannot express rotation). When `epsg` is 4326 the
/// GeoKey directory marks the file geographic, otherwise projected.
pub fn write_geotiff<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    transform: &GeoTransform,
    epsg: Option<u32>,
    nodata: Option<f32>,
    data: &[f32],
) -> Result<()> {
    if data.len() != width as usize * height as usize {
        return Err(RasterError::InvalidDimensions {
            width,
            height,
            actual: data.len(),
        });
    }

    let file = std::fs::File::create(path.as_ref())?;
    let mut encoder = TiffEncoder::new(file)?;
    let mut image = encoder.new_image::<Gray32Float>(width, height)?;

    let scale = [transform.pixel_width, transform.pixel_height.abs(), 0.0];
    image
        .encoder()
        .write_tag(Tag::ModelPixelScaleTag, &scale[..])?;

    let tiepoint = [0.0, 0.0, 0.0, transform.origin_x, transform.origin_y, 0.0];
    image
        .encoder()
        .write_tag(Tag::ModelTiepointTag, &tiepoint[..])?;

    let geokeys = geokey_directory(epsg);
    image
        .encoder()
        .write_tag(Tag::GeoKeyDirectoryTag, geokeys.as_slice())?;

    if let Some(nodata) = nodata {
        let ascii = format!("{}", nodata);
        image
            .encoder()
            .write_tag(Tag::GdalNodata, ascii.as_str())?;
    }

    image.write_data(data)?;
    Ok(())
}

/// Build the GeoKey directory entries for an optional CRS code.
fn geokey_directory(epsg: Option<u32>) -> Vec<u16> {
    // Header: version 1.1.0 plus key count; keys must stay sorted by id.
    match epsg {
        Some(4326) => vec![
            1, 1, 0, 3, //
            1024, 0, 1, 2, // GTModelTypeGeoKey = ModelTypeGeographic
            1025, 0, 1, 1, // GTRasterTypeGeoKey = RasterPixelIsArea
            2048, 0, 1, 4326, // GeographicTypeGeoKey
        ],
        Some(code) => vec![
            1, 1, 0, 3, //
            1024, 0, 1, 1, // GTModelTypeGeoKey = ModelTypeProjected
            1025, 0, 1, 1, // GTRasterTypeGeoKey = RasterPixelIsArea
            3072, 0, 1, code as u16, // ProjectedCSTypeGeoKey
        ],
        None => vec![
            1, 1, 0, 1, //
            1025, 0, 1, 1, // GTRasterTypeGeoKey = RasterPixelIsArea
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let gt = GeoTransform::default();
        let err = write_geotiff(dir.path().join("bad.tif"), 3, 3, &gt, None, None, &[0.0; 4]);
        assert!(matches!(
            err,
            Err(RasterError::InvalidDimensions { actual: 4, .. })
        ));
    }

    #[test]
    fn test_geokey_directory_shapes() {
        let geo = geokey_directory(Some(4326));
        assert_eq!(geo[3], 3);
        assert!(geo.chunks(4).any(|k| k[0] == 2048 && k[3] == 4326));

        let proj = geokey_directory(Some(2056));
        assert!(proj.chunks(4).any(|k| k[0] == 3072 && k[3] == 2056));

        let none = geokey_directory(None);
        assert_eq!(none[3], 1);
    }
}
