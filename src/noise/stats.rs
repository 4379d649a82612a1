//! Running extrema of generated noise values.

/// Cumulative min/max over every sample recorded since creation or the last
/// [`reset`](NoiseStats::reset).
///
/// The bounds are not reset between fields. Rescaling a new field therefore
/// uses the extrema of everything generated so far, which makes output drift
/// as parameters change between generations. Call `reset` to start fresh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseStats {
    min: f32,
    max: f32,
}

impl Default for NoiseStats {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseStats {
    /// Creates an empty accumulator (`min = f32::MAX`, `max = -f32::MAX`).
    pub fn new() -> Self {
        Self {
            min: f32::MAX,
            max: -f32::MAX,
        }
    }

    /// Widens the bounds to include `value`. NaN is ignored.
    #[inline]
    pub fn record(&mut self, value: f32) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Widens the bounds to include everything `other` has seen.
    pub fn merge(&mut self, other: &NoiseStats) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns true if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Returns `(min, max)`, or `None` before anything was recorded.
    pub fn range(&self) -> Option<(f32, f32)> {
        (!self.is_empty()).then_some((self.min, self.max))
    }

    /// Returns `target_range / (max - min)`.
    ///
    /// At least one field must have been recorded first. On an empty
    /// accumulator the denominator overflows to `-inf` and the scale
    /// collapses to `-0.0`; a flat field (`max == min`) yields `inf`.
    pub fn compute_scale(&self, target_range: f32) -> f32 {
        target_range / (self.max - self.min)
    }
}
