//! Noise field generation using fractal noise.

use glam::Vec2;
use rayon::prelude::*;

use crate::noise::{sample_fractal, CoherentNoise, NoiseMode, NoiseParams, NoiseStats};
use super::grid::NoiseField;

/// Generates a `width` x `height` field of multi-octave noise.
///
/// Cell `(x, y)` is sampled at grid position `(x, y)`; the octave frequency
/// is applied inside the accumulator. Every cell is recorded into `stats`
/// as it is produced, widening the cumulative extrema.
///
/// # Arguments
/// * `source` - The coherent noise primitive
/// * `mode` - fBm or turbulence accumulation
/// * `width`, `height` - Grid dimensions
/// * `params` - Octave parameters (not validated)
/// * `stats` - Cumulative extrema, updated in place
pub fn generate<N: CoherentNoise + ?Sized>(
    source: &N,
    mode: NoiseMode,
    width: u32,
    height: u32,
    params: &NoiseParams,
    stats: &mut NoiseStats,
) -> NoiseField {
    let mut field = NoiseField::new(width, height);
    let values = field.values_mut();

    let mut i = 0;
    for y in 0..height {
        for x in 0..width {
            let v = sample_fractal(source, mode, Vec2::new(x as f32, y as f32), params);
            values[i] = v;
            stats.record(v);
            i += 1;
        }
    }

    log::debug!(
        "generated {}x{} {} field (octaves={}, frequency={}, lacunarity={}, gain={})",
        width,
        height,
        mode.name(),
        params.octaves,
        params.frequency,
        params.lacunarity,
        params.gain,
    );

    field
}

/// Generates the same field as [`generate`], splitting rows across rayon
/// workers.
///
/// Each worker tracks its own partial extrema; they are merged into `stats`
/// after all rows are done.
pub fn generate_parallel<N: CoherentNoise + Sync + ?Sized>(
    source: &N,
    mode: NoiseMode,
    width: u32,
    height: u32,
    params: &NoiseParams,
    stats: &mut NoiseStats,
) -> NoiseField {
    let mut field = NoiseField::new(width, height);
    if field.is_empty() {
        return field;
    }

    let partial = field
        .values_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .map(|(y, row)| {
            let mut local = NoiseStats::new();
            for (x, value) in row.iter_mut().enumerate() {
                *value = sample_fractal(source, mode, Vec2::new(x as f32, y as f32), params);
                local.record(*value);
            }
            local
        })
        .reduce(NoiseStats::new, |mut a, b| {
            a.merge(&b);
            a
        });
    stats.merge(&partial);

    log::debug!(
        "generated {}x{} {} field in parallel (octaves={})",
        width,
        height,
        mode.name(),
        params.octaves,
    );

    field
}
