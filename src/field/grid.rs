//! NoiseField data structure.

use serde::{Deserialize, Serialize};

use crate::noise::NoiseStats;

/// A 2D grid of scalar noise values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseField {
    width: u32,
    height: u32,
    /// Sample values stored in row-major order.
    values: Vec<f32>,
}

impl NoiseField {
    /// Creates a zero-filled field.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; (width as usize) * (height as usize)],
        }
    }

    /// Wraps existing row-major values. Returns `None` if the length does
    /// not match `width * height`.
    pub fn from_values(width: u32, height: u32, values: Vec<f32>) -> Option<Self> {
        if values.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self { width, height, values })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of samples (`width * height`).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// Row-major index of `(x, y)`.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Sample at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values.get(self.index(x, y)).copied()
    }

    /// Computes the min and max sample of this field alone.
    pub fn value_range(&self) -> (f32, f32) {
        let mut min = f32::MAX;
        let mut max = f32::MIN;

        for &v in &self.values {
            min = min.min(v);
            max = max.max(v);
        }

        (min, max)
    }

    /// Applies `v' = v*scale - min*scale` to every sample.
    ///
    /// `min` is the cumulative minimum held by `stats`, not this field's own
    /// minimum, so fields generated after the extrema widened will not start
    /// at zero.
    pub fn rescale_in_place(&mut self, scale: f32, stats: &NoiseStats) {
        let offset = stats.min() * scale;

        for v in &mut self.values {
            *v = *v * scale - offset;
        }
    }
}
