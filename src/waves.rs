use crate::config::WaveConfig;
use crate::noise::gradient_noise_3d;

/// Spatial frequency of the first ripple octave, in radians per world unit.
/// Subsequent octaves double it.
pub const SMALL_WAVE_BASE_FREQUENCY: f32 = 3.0;

/// Ripple layer count. Frequency doubles and amplitude halves per layer.
pub const SMALL_WAVE_OCTAVES: u32 = 4;

/// Vertical displacement of the water surface at planar position (x, z) and
/// time t. Pure function: two sin calls for the primary swell plus one noise
/// evaluation per octave, no allocation, safe to call per vertex on a dense
/// grid every frame.
///
/// Ripple octaves subtract `|noise|` so ridges pull the surface downward,
/// carving the choppy troughs between swells.
pub fn elevation(x: f32, z: f32, t: f32, cfg: &WaveConfig) -> f32 {
    let phase = t * cfg.big_wave_speed;
    let mut e = (x * cfg.big_wave_frequency.0 + phase).sin()
        * (z * cfg.big_wave_frequency.1 + phase).sin()
        * cfg.big_wave_elevation;

    let mut freq = SMALL_WAVE_BASE_FREQUENCY;
    let mut amp = cfg.small_wave_elevation;
    for i in 0..SMALL_WAVE_OCTAVES {
        let n = gradient_noise_3d(
            x * freq,
            z * freq,
            t * cfg.small_wave_speed,
            cfg.seed.wrapping_add(i),
        );
        e -= n.abs() * amp;
        freq *= 2.0;
        amp *= 0.5;
    }
    e
}

/// Blend weight in [0, 1] for the depth gradient, from a raw elevation.
/// 0 maps to the depth color, 1 to the surface color.
#[inline]
pub fn mix_factor(e: f32, cfg: &WaveConfig) -> f32 {
    ((e * cfg.elevation_multiplier + cfg.color_offset) * cfg.color_multiplier).clamp(0.0, 1.0)
}

/// Two-color lerp, exact at both endpoints (m=0 gives depth, m=1 surface).
#[inline]
pub fn blend(depth: [f32; 3], surface: [f32; 3], m: f32) -> [f32; 3] {
    let inv = 1.0 - m;
    [
        depth[0] * inv + surface[0] * m,
        depth[1] * inv + surface[1] * m,
        depth[2] * inv + surface[2] * m,
    ]
}

/// Water color at (x, z, t): depth gradient driven by the local elevation.
/// Channels are always within [0, 1] for normalized endpoint colors.
pub fn shade(x: f32, z: f32, t: f32, cfg: &WaveConfig) -> [f32; 3] {
    let m = mix_factor(elevation(x, z, t, cfg), cfg);
    blend(cfg.depth_color, cfg.surface_color, m)
}
