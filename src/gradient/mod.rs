//! Color gradients used to colorize rescaled noise.
//!
//! A gradient is a fixed 256-entry lookup table built by linear
//! interpolation between two or four anchor colors.

mod color;

pub use color::{lerp_channel, Color};

use serde::{Deserialize, Serialize};

/// Number of entries in every gradient.
pub const GRADIENT_SIZE: usize = 256;

/// Anchor colors a gradient is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GradientStops {
    /// Straight blend from `start` at index 0 to `end` at index 255.
    Two { start: Color, end: Color },
    /// Two blends sharing the table. The lower half runs `low_start` to
    /// `low_end`; the upper half runs `high_start` toward `high_end`.
    Dual {
        low_start: Color,
        low_end: Color,
        high_start: Color,
        high_end: Color,
    },
}

impl GradientStops {
    /// Deep blue to light blue for low values, green to white for high.
    pub fn ocean_land() -> Self {
        GradientStops::Dual {
            low_start: Color::new(0, 0, 175),
            low_end: Color::new(80, 160, 244),
            high_start: Color::new(12, 192, 75),
            high_end: Color::new(255, 255, 255),
        }
    }

    /// Pure blue to white.
    pub fn sky() -> Self {
        GradientStops::Two {
            start: Color::new(0, 0, 255),
            end: Color::new(255, 255, 255),
        }
    }
}

/// A 256-entry color lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    colors: [Color; GRADIENT_SIZE],
}

impl Gradient {
    /// Builds a gradient from either stop configuration.
    pub fn build(stops: &GradientStops) -> Self {
        match *stops {
            GradientStops::Two { start, end } => Self::two_color(start, end),
            GradientStops::Dual {
                low_start,
                low_end,
                high_start,
                high_end,
            } => Self::dual(low_start, low_end, high_start, high_end),
        }
    }

    /// Interpolates from `start` at index 0 to `end` at index 255.
    pub fn two_color(start: Color, end: Color) -> Self {
        let mut colors = [Color::default(); GRADIENT_SIZE];
        for (i, c) in colors.iter_mut().enumerate() {
            let pct = i as f32 / 255.0;
            *c = start.lerp(end, pct);
        }
        Self { colors }
    }

    /// Builds the four-stop gradient.
    ///
    /// For `pct = i / 255`: below 0.5 the lower pair is blended with
    /// `pct * 2`; from 0.5 up the upper pair is blended with
    /// `pct * 1.5 - 0.5`. The upper half therefore starts about a quarter
    /// of the way from `high_start` to `high_end` rather than at
    /// `high_start`. Visual output depends on this exact formula.
    pub fn dual(low_start: Color, low_end: Color, high_start: Color, high_end: Color) -> Self {
        let mut colors = [Color::default(); GRADIENT_SIZE];
        for (i, c) in colors.iter_mut().enumerate() {
            let pct = i as f32 / 255.0;
            *c = if pct < 0.5 {
                low_start.lerp(low_end, pct * 2.0)
            } else {
                high_start.lerp(high_end, pct * 1.5 - 0.5)
            };
        }
        Self { colors }
    }

    pub fn ocean_land() -> Self {
        Self::build(&GradientStops::ocean_land())
    }

    pub fn sky() -> Self {
        Self::build(&GradientStops::sky())
    }

    /// Color at `index`. The `u8` index keeps lookups inside the table.
    #[inline]
    pub fn get(&self, index: u8) -> Color {
        self.colors[index as usize]
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_color_black_to_white() {
        let g = Gradient::two_color(Color::new(0, 0, 0), Color::new(255, 255, 255));
        assert_eq!(g.colors().len(), GRADIENT_SIZE);
        assert_eq!(g.get(0), Color::new(0, 0, 0));
        assert_eq!(g.get(255), Color::new(255, 255, 255));

        let mid = g.get(128);
        for channel in mid.to_array() {
            assert!((127..=128).contains(&channel), "midpoint channel {}", channel);
        }
    }

    #[test]
    fn test_two_color_is_monotonic() {
        let g = Gradient::two_color(Color::new(10, 200, 0), Color::new(250, 20, 100));
        for pair in g.colors().windows(2) {
            assert!(pair[1].r >= pair[0].r);
            assert!(pair[1].g <= pair[0].g);
            assert!(pair[1].b >= pair[0].b);
        }
    }

    #[test]
    fn test_dual_gradient_formula() {
        let a = Color::new(0, 0, 255);
        let b = Color::new(255, 255, 255);
        let c = Color::new(12, 192, 75);
        let d = Color::new(255, 255, 255);
        let g = Gradient::dual(a, b, c, d);

        assert_eq!(g.get(0), a);
        assert_eq!(g.get(255), d);

        // Last entry of the lower half is almost at `b`.
        let low_end = g.get(127);
        assert!((253..=254).contains(&low_end.r));
        assert!((253..=254).contains(&low_end.g));
        assert_eq!(low_end.b, 255);

        // First entry of the upper half is already ~25% of the way to `d`,
        // not at `c` as a symmetric split would give.
        assert_eq!(g.get(128), Color::new(73, 207, 120));
    }

    #[test]
    fn test_dual_gradient_matches_formula_everywhere() {
        let (a, b, c, d) = (
            Color::new(0, 0, 175),
            Color::new(80, 160, 244),
            Color::new(12, 192, 75),
            Color::new(255, 255, 255),
        );
        let g = Gradient::dual(a, b, c, d);
        for i in 0..GRADIENT_SIZE {
            let pct = i as f32 / 255.0;
            let expected = if pct < 0.5 {
                a.lerp(b, pct * 2.0)
            } else {
                c.lerp(d, pct * 1.5 - 0.5)
            };
            assert_eq!(g.get(i as u8), expected, "index {}", i);
        }
    }

    #[test]
    fn test_build_dispatches_on_stops() {
        assert_eq!(
            Gradient::build(&GradientStops::sky()),
            Gradient::two_color(Color::new(0, 0, 255), Color::new(255, 255, 255))
        );
        assert_eq!(Gradient::ocean_land().get(0), Color::new(0, 0, 175));
    }

    #[test]
    fn test_stops_serde() {
        let json = serde_json::to_string(&GradientStops::sky()).unwrap();
        assert!(json.contains("\"kind\":\"two\""));
        let back: GradientStops = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GradientStops::sky());
    }
}
