/// All tunable wave/shading parameters — exposed as sliders in the frontend.
///
/// Amplitudes, speeds and multipliers are expected non-negative and colors
/// normalized RGB; out-of-range values still produce a defined (if odd)
/// image, so nothing here validates.
#[derive(Clone, Debug)]
pub struct WaveConfig {
    // Primary swell
    pub big_wave_elevation: f32,
    pub big_wave_frequency: (f32, f32),
    pub big_wave_speed: f32,

    // Ripple layers (4 octaves, frequency doubling, amplitude halving)
    pub small_wave_elevation: f32,
    pub small_wave_speed: f32,

    // Depth gradient
    pub elevation_multiplier: f32,
    pub depth_color: [f32; 3],
    pub surface_color: [f32; 3],
    pub color_offset: f32,
    pub color_multiplier: f32,

    // Noise lattice seed
    pub seed: u32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            big_wave_elevation: 0.07,
            big_wave_frequency: (3.0, 1.5),
            big_wave_speed: 1.5,
            small_wave_elevation: 0.15,
            small_wave_speed: 0.4,
            elevation_multiplier: 3.0,
            depth_color: [0.016, 0.224, 0.443],
            surface_color: [0.302, 0.788, 1.0],
            color_offset: 0.1,
            color_multiplier: 3.0,
            seed: 0,
        }
    }
}
