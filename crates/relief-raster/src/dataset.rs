//! Opened GeoTIFF dataset.

use crate::{GeoTransform, RasterError, Result};
use std::path::{Path, PathBuf};
use tiff::decoder::{Decoder, DecodingResult, Limits};
use tiff::tags::Tag;

// GeoKey ids carrying the CRS code.
const KEY_GEOGRAPHIC_TYPE: u32 = 2048;
const KEY_PROJECTED_CS_TYPE: u32 = 3072;

/// An opened GeoTIFF with its pixel data and georeferencing metadata.
///
/// Pixel values are held in row-major order (north to south, west to
/// east) and converted to `f32` regardless of the on-disk sample format,
/// as elevation rasters come both as float and integer grids.
#[derive(Debug)]
pub struct GeoTiff {
    path: PathBuf,
    data: Vec<f32>,
    width: u32,
    height: u32,
    transform: GeoTransform,
    epsg: Option<u32>,
    nodata: Option<f32>,
}

impl GeoTiff {
    /// Open a GeoTIFF file and decode its single band into memory.
    ///
    /// Fails if the file cannot be read, is not a decodable TIFF, or
    /// carries no recognizable georeferencing tags.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let mut decoder = Decoder::new(file)?;

        // Allow large DEM files: swisstopo 0.5 m tiles reach 2000x2000
        // pixels per km and ASTER tiles are 3601x3601.
        let mut limits = Limits::default();
        limits.decoding_buffer_size = 1024 * 1024 * 1024;
        limits.intermediate_buffer_size = 1024 * 1024 * 1024;
        limits.ifd_value_size = 1024 * 1024 * 1024;
        decoder = decoder.with_limits(limits);

        let (width, height) = decoder.dimensions()?;
        let transform = read_geotransform(&mut decoder)
            .ok_or_else(|| RasterError::MissingGeoreference(path.display().to_string()))?;
        let epsg = read_epsg(&mut decoder);
        let nodata = read_nodata(&mut decoder);
        let data = decode_band(&mut decoder)?;

        if data.len() != width as usize * height as usize {
            return Err(RasterError::InvalidDimensions {
                width,
                height,
                actual: data.len(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            data,
            width,
            height,
            transform,
            epsg,
            nodata,
        })
    }

    /// Path this dataset was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The affine transform between pixel and native ground coordinates.
    pub fn geo_transform(&self) -> GeoTransform {
        self.transform
    }

    /// Raster dimensions in pixels as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// EPSG code of the native coordinate reference system, if the file
    /// declares one in its GeoKey directory.
    pub fn epsg(&self) -> Option<u32> {
        self.epsg
    }

    /// Nodata sentinel value, if the file declares one.
    pub fn nodata(&self) -> Option<f32> {
        self.nodata
    }

    /// Read a single pixel value. Returns `None` outside the raster grid.
    pub fn read_pixel(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.data.get(idx).copied()
    }
}

/// Read the affine transform from GeoTIFF tags.
///
/// Tries ModelPixelScale + ModelTiepoint first, then falls back to the
/// full ModelTransformation matrix.
fn read_geotransform<R: std::io::Read + std::io::Seek>(
    decoder: &mut Decoder<R>,
) -> Option<GeoTransform> {
    let scale = decoder.get_tag_f64_vec(Tag::ModelPixelScaleTag);
    let tiepoint = decoder.get_tag_f64_vec(Tag::ModelTiepointTag);

    if let (Ok(scale), Ok(tie)) = (scale, tiepoint) {
        if scale.len() >= 2 && tie.len() >= 6 {
            // Tiepoint is [i, j, k, x, y, z]: pixel (i, j) sits at ground (x, y).
            let origin_x = tie[3] - tie[0] * scale[0];
            let origin_y = tie[4] + tie[1] * scale[1];
            return Some(GeoTransform::new(origin_x, origin_y, scale[0], -scale[1]));
        }
    }

    // ModelTransformation: row-major 4x4 matrix.
    if let Ok(m) = decoder.get_tag_f64_vec(Tag::ModelTransformationTag) {
        if m.len() >= 8 {
            return Some(GeoTransform::from_gdal([m[3], m[0], m[1], m[7], m[4], m[5]]));
        }
    }

    None
}

/// Read the CRS code from the GeoKey directory.
///
/// The directory is a flat array of u16 values: a four-entry header
/// (version, revision, minor, key count) followed by one
/// (key id, tag location, count, value) quadruple per key. A key whose
/// tag location is 0 stores its value inline.
fn read_epsg<R: std::io::Read + std::io::Seek>(decoder: &mut Decoder<R>) -> Option<u32> {
    let dir = decoder
        .get_tag_u32_vec(Tag::GeoKeyDirectoryTag)
        .ok()?;
    if dir.len() < 4 {
        return None;
    }

    let num_keys = dir[3] as usize;
    for i in 0..num_keys {
        let base = 4 + i * 4;
        if base + 4 > dir.len() {
            break;
        }
        let key_id = dir[base];
        let location = dir[base + 1];
        let value = dir[base + 3];

        if location == 0 && value > 0 {
            match key_id {
                KEY_PROJECTED_CS_TYPE | KEY_GEOGRAPHIC_TYPE => return Some(value),
                _ => {}
            }
        }
    }
    None
}

/// Read the nodata sentinel from the GDAL_NODATA ASCII tag.
fn read_nodata<R: std::io::Read + std::io::Seek>(decoder: &mut Decoder<R>) -> Option<f32> {
    let raw = decoder
        .get_tag_ascii_string(Tag::GdalNodata)
        .ok()?;
    raw.trim_end_matches('\0').trim().parse().ok()
}

/// Decode the image band into `f32` samples.
fn decode_band<R: std::io::Read + std::io::Seek>(decoder: &mut Decoder<R>) -> Result<Vec<f32>> {
    let result = decoder.read_image()?;

    Ok(match result {
        DecodingResult::F32(data) => data,
        DecodingResult::F64(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::I8(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::I16(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::I32(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::I64(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::U8(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::U16(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::U32(data) => data.into_iter().map(|v| v as f32).collect(),
        DecodingResult::U64(data) => data.into_iter().map(|v| v as f32).collect(),
    })
}
