//! Procedural 2D noise field generator.
//!
//! This crate layers octaves of simplex noise into fractal Brownian motion
//! or turbulence fields, rescales them into a byte range against cumulative
//! extrema, and colorizes them through 256-entry gradients into packed
//! pixel buffers.

pub mod noise;
pub mod field;
pub mod gradient;
pub mod render;
pub mod export;

pub use noise::{CoherentNoise, NoiseMode, NoiseParams, NoiseStats, SimplexNoise, Tweak};
pub use field::{generate, generate_parallel, NoiseField};
pub use gradient::{Color, Gradient, GradientStops};
pub use render::{lookup_and_draw, NoiseRenderer, PixelBuffer, RenderConfig};
pub use export::{export_field_png_u16, export_pixels_png, PngExportOptions};
