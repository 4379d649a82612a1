//! Noise generation module for 2D scalar fields.
//!
//! Uses simdnoise for the underlying simplex primitive and layers octaves
//! on top of it as fractal Brownian motion or turbulence.

mod fractal;
mod simplex;
mod stats;
mod tweak;

pub use fractal::{sample_fractal, NoiseMode, NoiseParams, Octaves};
pub use simplex::{CoherentNoise, SimplexNoise, SIMPLEX_SCALE};
pub use stats::NoiseStats;
pub use tweak::{Direction, Tweak, TweakParam, TweakParseError};
