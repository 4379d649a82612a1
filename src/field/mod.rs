//! Noise field module.
//!
//! Provides the row-major `NoiseField` grid and the passes that fill and
//! rescale it.

mod grid;
mod generate;

pub use grid::NoiseField;
pub use generate::{generate, generate_parallel};
