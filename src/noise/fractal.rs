//! Multi-octave fractal noise: fractal Brownian motion (fBm) and turbulence.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::simplex::CoherentNoise;

/// How each octave sample is combined into the running sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseMode {
    /// Signed octave samples (smooth, cloud-like).
    Fbm,
    /// Absolute-valued octave samples (sharp, ridged).
    #[default]
    Turbulence,
}

impl NoiseMode {
    pub fn name(&self) -> &'static str {
        match self {
            NoiseMode::Fbm => "fbm",
            NoiseMode::Turbulence => "turbulence",
        }
    }
}

/// Parameters for multi-octave noise accumulation.
///
/// Nothing here is validated: zero or negative `octaves` produce a zero
/// sum, and negative `frequency` or `lacunarity` simply mirror the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseParams {
    /// Number of octaves to accumulate.
    pub octaves: i32,
    /// Spatial frequency of the first octave.
    pub frequency: f32,
    /// Frequency multiplier per octave.
    pub lacunarity: f32,
    /// Amplitude multiplier per octave.
    pub gain: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self::turbulence_demo()
    }
}

impl NoiseParams {
    /// Three sparse, rapidly fading octaves. Pairs well with turbulence.
    pub fn turbulence_demo() -> Self {
        Self {
            octaves: 3,
            frequency: 0.01,
            lacunarity: 3.0,
            gain: 0.2,
        }
    }

    /// Low-frequency fBm where later octaves grow instead of fade.
    pub fn clouds() -> Self {
        Self {
            octaves: 3,
            frequency: 0.009,
            lacunarity: 0.5,
            gain: 3.0,
        }
    }
}

/// Iterator over the amplitude-scaled contribution of each octave at one
/// position, in octave order.
pub struct Octaves<'a, N: ?Sized> {
    source: &'a N,
    mode: NoiseMode,
    pos: Vec2,
    remaining: i32,
    frequency: f32,
    amplitude: f32,
    lacunarity: f32,
    gain: f32,
}

impl<'a, N: CoherentNoise + ?Sized> Octaves<'a, N> {
    pub fn new(source: &'a N, mode: NoiseMode, pos: Vec2, params: &NoiseParams) -> Self {
        Self {
            source,
            mode,
            pos,
            remaining: params.octaves,
            frequency: params.frequency,
            amplitude: 1.0,
            lacunarity: params.lacunarity,
            gain: params.gain,
        }
    }
}

impl<N: CoherentNoise + ?Sized> Iterator for Octaves<'_, N> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.remaining <= 0 {
            return None;
        }
        self.remaining -= 1;

        let n = self.source.sample(self.pos * self.frequency) * self.amplitude;
        self.frequency *= self.lacunarity;
        self.amplitude *= self.gain;

        Some(match self.mode {
            NoiseMode::Fbm => n,
            NoiseMode::Turbulence => n.abs(),
        })
    }
}

/// Samples multi-octave noise at `pos` (in grid units).
///
/// The result is the raw octave sum and is not normalized to any range.
pub fn sample_fractal<N: CoherentNoise + ?Sized>(
    source: &N,
    mode: NoiseMode,
    pos: Vec2,
    params: &NoiseParams,
) -> f32 {
    Octaves::new(source, mode, pos, params).fold(0.0f32, |sum, n| sum + n)
}
