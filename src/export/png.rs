//! PNG export for rendered frames and raw noise fields.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageBuffer, ImageEncoder, Rgb};
use thiserror::Error;

use crate::field::NoiseField;
use crate::render::{PixelBuffer, BYTES_PER_PIXEL};

/// Errors that can occur during PNG export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid value range: min ({0}) >= max ({1})")]
    InvalidRange(f32, f32),
}

/// Options for PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Exports a pixel buffer as an 8-bit RGB PNG.
///
/// Only the first three bytes of each pixel are written; the fourth byte is
/// dropped.
pub fn export_pixels_png(
    buffer: &PixelBuffer,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), ExportError> {
    let (width, height) = (buffer.width(), buffer.height());

    let rgb: Vec<u8> = buffer
        .as_bytes()
        .chunks_exact(BYTES_PER_PIXEL)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_raw(width, height, rgb)
        .ok_or_else(|| {
            ExportError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("pixel buffer does not hold {}x{} pixels", width, height),
            ))
        })?;

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    encoder.write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)?;

    Ok(())
}

/// Exports a noise field as a 16-bit grayscale PNG.
///
/// Values are normalized with `(v - min) / (max - min)`, clamped to
/// `[0, 1]` and scaled to the full u16 range.
pub fn export_field_png_u16(
    field: &NoiseField,
    path: &Path,
    min_value: f32,
    max_value: f32,
    options: &PngExportOptions,
) -> Result<(), ExportError> {
    if min_value >= max_value {
        return Err(ExportError::InvalidRange(min_value, max_value));
    }

    let (width, height) = (field.width(), field.height());
    let range = max_value - min_value;

    let levels: Vec<u16> = field
        .values()
        .iter()
        .map(|&v| (((v - min_value) / range).clamp(0.0, 1.0) * 65535.0) as u16)
        .collect();

    let file = File::create(path)?;
    let encoder = PngEncoder::new_with_quality(BufWriter::new(file), options.compression, options.filter);
    let byte_slice: &[u8] = bytemuck::cast_slice(&levels);
    encoder.write_image(byte_slice, width, height, image::ExtendedColorType::L16)?;

    Ok(())
}

/// Exports a field using its own min and max as the normalization range.
pub fn export_field_png_auto(
    field: &NoiseField,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), ExportError> {
    let (min, max) = field.value_range();
    export_field_png_u16(field, path, min, max, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::Gradient;
    use crate::render::lookup_and_draw;
    use tempfile::tempdir;

    fn ramp_field(width: u32, height: u32) -> NoiseField {
        let values = (0..width * height)
            .map(|i| (i % width) as f32 / (width - 1) as f32 * 255.0)
            .collect();
        NoiseField::from_values(width, height, values).unwrap()
    }

    #[test]
    fn test_export_pixels_png() {
        let field = ramp_field(32, 16);
        let buffer = lookup_and_draw(&field, &Gradient::ocean_land());

        let dir = tempdir().unwrap();
        let path = dir.path().join("frame.png");
        export_pixels_png(&buffer, &path, &PngExportOptions::default()).unwrap();

        assert!(path.exists());
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_export_field_png_u16() {
        let field = ramp_field(16, 8);
        let dir = tempdir().unwrap();
        let path = dir.path().join("field.png");

        export_field_png_u16(&field, &path, 0.0, 255.0, &PngExportOptions::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_export_field_png_u16_levels() {
        let field = NoiseField::from_values(3, 1, vec![-10.0, 127.5, 300.0]).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("levels.png");

        export_field_png_u16(&field, &path, 0.0, 255.0, &PngExportOptions::default()).unwrap();

        let decoded = image::open(&path).unwrap().to_luma16();
        assert_eq!(decoded.dimensions(), (3, 1));
        let levels: Vec<u16> = decoded.pixels().map(|p| p.0[0]).collect();
        assert_eq!(levels, vec![0, 32767, 65535]);
    }

    #[test]
    fn test_export_field_png_auto() {
        let field = ramp_field(8, 8);
        let dir = tempdir().unwrap();
        let path = dir.path().join("auto.png");

        export_field_png_auto(&field, &path, &PngExportOptions::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_invalid_range() {
        let field = NoiseField::new(4, 4);
        let dir = tempdir().unwrap();
        let path = dir.path().join("flat.png");

        let result = export_field_png_u16(&field, &path, 1.0, -1.0, &PngExportOptions::default());
        assert!(matches!(result, Err(ExportError::InvalidRange(_, _))));

        // A flat field has no usable auto range either.
        let result = export_field_png_auto(&field, &path, &PngExportOptions::default());
        assert!(matches!(result, Err(ExportError::InvalidRange(_, _))));
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let buffer = PixelBuffer::new(4, 4);
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("frame.png");

        let result = export_pixels_png(&buffer, &path, &PngExportOptions::default());
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
