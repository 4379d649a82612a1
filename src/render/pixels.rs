//! Pixel buffer and gradient lookup.

use thiserror::Error;

use crate::field::NoiseField;
use crate::gradient::Gradient;

/// Bytes per pixel in a [`PixelBuffer`]. Only the first three are written.
pub const BYTES_PER_PIXEL: usize = 4;

/// Errors that can occur while drawing a field.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("Field is {field_w}x{field_h} but pixel buffer is {buf_w}x{buf_h}")]
    SizeMismatch {
        field_w: u32,
        field_h: u32,
        buf_w: u32,
        buf_h: u32,
    },
}

/// Packed pixels with a 4-byte stride: R, G, B, then one byte drawing
/// leaves untouched.
///
/// The layout matches a streaming `RGBA8888`/`ABGR8888` texture, so
/// `as_bytes` can be uploaded directly with a pitch of `width * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a zero-filled buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * BYTES_PER_PIXEL],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn pitch(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// The RGB bytes of pixel `(x, y)`, or `None` outside the buffer.
    pub fn rgb(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let p = ((y as usize) * (self.width as usize) + (x as usize)) * BYTES_PER_PIXEL;
        Some([self.pixels[p], self.pixels[p + 1], self.pixels[p + 2]])
    }

    /// Colors every pixel from the matching field sample.
    ///
    /// The field must have the same dimensions as the buffer.
    pub fn draw(&mut self, field: &NoiseField, gradient: &Gradient) -> Result<(), RenderError> {
        if field.width() != self.width || field.height() != self.height {
            return Err(RenderError::SizeMismatch {
                field_w: field.width(),
                field_h: field.height(),
                buf_w: self.width,
                buf_h: self.height,
            });
        }
        draw_samples(field.values(), gradient, &mut self.pixels);
        Ok(())
    }
}

/// Maps a sample to a gradient index.
///
/// The sample is truncated toward zero and then clamped to `[0, 255]`, so
/// any magnitude lands inside the table. NaN maps to 0.
#[inline]
pub fn gradient_index(value: f32) -> u8 {
    (value as i32).clamp(0, 255) as u8
}

/// Colors `field` through `gradient` into a new buffer of the same size.
pub fn lookup_and_draw(field: &NoiseField, gradient: &Gradient) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(field.width(), field.height());
    draw_samples(field.values(), gradient, &mut buffer.pixels);
    buffer
}

fn draw_samples(values: &[f32], gradient: &Gradient, pixels: &mut [u8]) {
    for (&v, px) in values.iter().zip(pixels.chunks_exact_mut(BYTES_PER_PIXEL)) {
        let c = gradient.get(gradient_index(v));
        px[0] = c.r;
        px[1] = c.g;
        px[2] = c.b;
    }
}
