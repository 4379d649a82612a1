//! Rendering module: turns noise fields into packed pixels.

mod config;
mod pixels;
mod renderer;

pub use config::{ConfigError, RenderConfig, MAX_DIMENSION};
pub use pixels::{gradient_index, lookup_and_draw, PixelBuffer, RenderError, BYTES_PER_PIXEL};
pub use renderer::{Frame, NoiseRenderer, TARGET_RANGE};
