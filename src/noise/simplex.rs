//! Coherent 2D noise primitive.

use glam::Vec2;
use simdnoise::NoiseBuilder;

/// A deterministic, continuous 2D noise function.
///
/// Implementations should return values in roughly `[-1, 1]`. The fractal
/// accumulators scale the input position themselves, so `sample` is always
/// called with the already-scaled coordinate.
pub trait CoherentNoise {
    /// Samples the noise at `pos`.
    fn sample(&self, pos: Vec2) -> f32;
}

/// Peak magnitude of a raw simdnoise 2D gradient sample is about 0.0221.
/// Multiplying by this brings `SimplexNoise` output into roughly `[-1, 1]`.
pub const SIMPLEX_SCALE: f32 = 45.0;

/// 2D simplex noise backed by simdnoise, scaled by [`SIMPLEX_SCALE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimplexNoise {
    seed: i32,
}

impl SimplexNoise {
    /// Creates a simplex source with the given seed.
    pub fn new(seed: i32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> i32 {
        self.seed
    }
}

impl CoherentNoise for SimplexNoise {
    fn sample(&self, pos: Vec2) -> f32 {
        // A 1x1 grid at the requested offset; frequency stays at 1.0 because
        // the caller has already applied the octave frequency.
        let mut settings = NoiseBuilder::gradient_2d_offset(pos.x, 1, pos.y, 1);
        settings.with_seed(self.seed).with_freq(1.0);
        let (values, _, _) = settings.generate();
        values.first().map_or(0.0, |v| v * SIMPLEX_SCALE)
    }
}
