//! Configuration for rendering noise frames.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gradient::GradientStops;
use crate::noise::{NoiseMode, NoiseParams};

/// Largest width or height accepted by [`RenderConfig::validate`].
pub const MAX_DIMENSION: u32 = 8192;

/// Errors that can occur while loading or validating a render config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid dimensions {0}x{1}: both must be between 1 and {max}", max = MAX_DIMENSION)]
    InvalidDimensions(u32, u32),
}

/// Everything needed to render one noise frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Octave accumulation mode.
    pub mode: NoiseMode,
    /// Seed for the simplex primitive.
    pub seed: i32,
    /// Octave parameters.
    pub params: NoiseParams,
    /// Gradient anchor colors.
    pub stops: GradientStops,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::turbulence_demo()
    }
}

impl RenderConfig {
    /// 800x600 turbulence through the ocean/land dual gradient.
    pub fn turbulence_demo() -> Self {
        Self {
            width: 800,
            height: 600,
            mode: NoiseMode::Turbulence,
            seed: 0,
            params: NoiseParams::turbulence_demo(),
            stops: GradientStops::ocean_land(),
        }
    }

    /// 800x600 fBm clouds on a blue-to-white sky.
    pub fn clouds() -> Self {
        Self {
            width: 800,
            height: 600,
            mode: NoiseMode::Fbm,
            seed: 0,
            params: NoiseParams::clouds(),
            stops: GradientStops::sky(),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks output dimensions only. Noise parameters are never rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = |d: u32| (1..=MAX_DIMENSION).contains(&d);
        if !ok(self.width) || !ok(self.height) {
            return Err(ConfigError::InvalidDimensions(self.width, self.height));
        }
        Ok(())
    }
}
