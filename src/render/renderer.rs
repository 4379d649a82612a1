//! Frame rendering: generate, rescale and colorize in one call.

use crate::field::{generate, generate_parallel, NoiseField};
use crate::gradient::Gradient;
use crate::noise::{CoherentNoise, NoiseMode, NoiseParams, NoiseStats, SimplexNoise};

use super::config::RenderConfig;
use super::pixels::{lookup_and_draw, PixelBuffer};

/// Byte range noise is rescaled into before gradient lookup.
pub const TARGET_RANGE: f32 = 255.0;

/// One rendered frame.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The field after rescaling; values index the gradient.
    pub field: NoiseField,
    /// Colorized pixels.
    pub pixels: PixelBuffer,
    /// Scale that was applied to the raw field.
    pub scale: f32,
}

/// Renders noise frames while keeping cumulative extrema between them.
///
/// Successive frames rescale against every value generated since the last
/// [`reset_stats`](NoiseRenderer::reset_stats), so tweaking parameters
/// shifts the color mapping of later frames.
pub struct NoiseRenderer<N = SimplexNoise> {
    source: N,
    mode: NoiseMode,
    width: u32,
    height: u32,
    gradient: Gradient,
    stats: NoiseStats,
    parallel: bool,
}

impl NoiseRenderer<SimplexNoise> {
    /// Creates a simplex-backed renderer from a config.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(
            SimplexNoise::new(config.seed),
            config.mode,
            config.width,
            config.height,
            Gradient::build(&config.stops),
        )
    }
}

impl<N: CoherentNoise + Sync> NoiseRenderer<N> {
    pub fn new(source: N, mode: NoiseMode, width: u32, height: u32, gradient: Gradient) -> Self {
        Self {
            source,
            mode,
            width,
            height,
            gradient,
            stats: NoiseStats::new(),
            parallel: false,
        }
    }

    /// Selects rayon row-parallel generation.
    pub fn set_parallel(&mut self, parallel: bool) -> &mut Self {
        self.parallel = parallel;
        self
    }

    pub fn set_mode(&mut self, mode: NoiseMode) -> &mut Self {
        self.mode = mode;
        self
    }

    pub fn stats(&self) -> &NoiseStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Renders one frame and returns only its pixels.
    pub fn render(&mut self, params: &NoiseParams) -> PixelBuffer {
        self.render_frame(params).pixels
    }

    /// Generates a field, rescales it into `[0, 255]` against the cumulative
    /// extrema and colorizes it.
    pub fn render_frame(&mut self, params: &NoiseParams) -> Frame {
        let mut field = if self.parallel {
            generate_parallel(&self.source, self.mode, self.width, self.height, params, &mut self.stats)
        } else {
            generate(&self.source, self.mode, self.width, self.height, params, &mut self.stats)
        };

        let scale = self.stats.compute_scale(TARGET_RANGE);
        field.rescale_in_place(scale, &self.stats);
        let pixels = lookup_and_draw(&field, &self.gradient);

        log::debug!(
            "rendered frame: extrema=[{:.4}, {:.4}] scale={:.4}",
            self.stats.min(),
            self.stats.max(),
            scale
        );

        Frame { field, pixels, scale }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::Color;
    use glam::Vec2;

    /// Echoes the scaled x coordinate, so a field is a horizontal ramp.
    struct RampX;

    impl CoherentNoise for RampX {
        fn sample(&self, pos: Vec2) -> f32 {
            pos.x
        }
    }

    fn gray() -> Gradient {
        Gradient::two_color(Color::new(0, 0, 0), Color::new(255, 255, 255))
    }

    fn ramp_params(frequency: f32) -> NoiseParams {
        NoiseParams {
            octaves: 1,
            frequency,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }

    #[test]
    fn test_render_frame_spans_gradient() {
        let mut renderer = NoiseRenderer::new(RampX, NoiseMode::Fbm, 4, 1, gray());
        let frame = renderer.render_frame(&ramp_params(1.0));

        assert_eq!(frame.scale, 85.0);
        assert_eq!(frame.field.values(), &[0.0, 85.0, 170.0, 255.0]);
        assert_eq!(frame.pixels.rgb(0, 0), Some([0, 0, 0]));
        assert_eq!(frame.pixels.rgb(3, 0), Some([255, 255, 255]));
    }

    #[test]
    fn test_extrema_drift_between_frames() {
        let mut renderer = NoiseRenderer::new(RampX, NoiseMode::Fbm, 4, 1, gray());
        renderer.render(&ramp_params(2.0));
        let second = renderer.render_frame(&ramp_params(1.0));

        // The first frame widened the extrema to [0, 6], so the second
        // frame's maximum (3) only reaches the middle of the gradient.
        assert_eq!(renderer.stats().range(), Some((0.0, 6.0)));
        assert_eq!(second.field.values()[3], 127.5);
        assert_eq!(second.pixels.rgb(3, 0), Some(gray().get(127).to_array()));
    }

    #[test]
    fn test_reset_stats_restores_full_range() {
        let mut renderer = NoiseRenderer::new(RampX, NoiseMode::Fbm, 4, 1, gray());
        renderer.render(&ramp_params(2.0));
        renderer.reset_stats();
        let frame = renderer.render_frame(&ramp_params(1.0));
        assert_eq!(frame.field.values()[3], 255.0);
    }

    #[test]
    fn test_parallel_renderer_matches_sequential() {
        let config = RenderConfig {
            width: 48,
            height: 32,
            ..RenderConfig::turbulence_demo()
        };
        let mut seq = NoiseRenderer::from_config(&config);
        let mut par = NoiseRenderer::from_config(&config);
        par.set_parallel(true);

        assert_eq!(seq.render(&config.params), par.render(&config.params));
        assert_eq!(seq.stats(), par.stats());
    }

    #[test]
    fn test_zero_octaves_frame() {
        let mut renderer = NoiseRenderer::new(RampX, NoiseMode::Turbulence, 3, 2, gray());
        let params = NoiseParams {
            octaves: 0,
            ..ramp_params(1.0)
        };
        let frame = renderer.render_frame(&params);

        // Flat field: scale is infinite and 0 * inf is NaN, which maps to
        // gradient index 0.
        assert!(frame.scale.is_infinite());
        assert!(frame.field.values().iter().all(|v| v.is_nan()));
        assert!((0..3).all(|x| frame.pixels.rgb(x, 1) == Some([0, 0, 0])));
    }
}
