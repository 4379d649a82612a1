//! 8-bit RGB colors and channel interpolation.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel linear blend toward `other`; see [`lerp_channel`].
    pub fn lerp(self, other: Color, pct: f32) -> Color {
        Color {
            r: lerp_channel(self.r, other.r, pct),
            g: lerp_channel(self.g, other.g, pct),
            b: lerp_channel(self.b, other.b, pct),
        }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// `a + pct * (b - a)` computed in f32 and truncated (not rounded) to u8.
#[inline]
pub fn lerp_channel(a: u8, b: u8, pct: f32) -> u8 {
    (a as f32 + pct * (b as f32 - a as f32)) as u8
}
