pub mod config;
pub mod grid;
pub mod noise;
pub mod render;
pub mod rng;
pub mod waves;

use std::time::Instant;

use config::WaveConfig;
use grid::Grid;

/// One rendered water frame: the sampled displacement field plus the shaded
/// RGBA image.
pub struct Frame {
    pub w: usize,
    pub h: usize,
    pub elevation: Grid<f32>,
    pub rgba: Vec<u8>,
}

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Render one frame at time t over a square world patch of the given extent.
///
/// All samples within the frame see the same t and the same config snapshot;
/// animation is the caller advancing t monotonically between calls.
pub fn render_frame(
    t: f32,
    w: usize,
    h: usize,
    extent: f32,
    cfg: &WaveConfig,
) -> (Frame, Vec<Timing>) {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    // 1. Displacement field (per-vertex pass)
    let ts = Instant::now();
    let elevation = render::build_elevation(w, h, t, extent, cfg);
    timings.push(Timing {
        name: "elevation",
        ms: ts.elapsed().as_secs_f64() * 1000.0,
    });

    // 2. Depth-gradient shading (per-fragment pass)
    let ts = Instant::now();
    let rgba = render::render_surface(&elevation, cfg);
    timings.push(Timing {
        name: "shade",
        ms: ts.elapsed().as_secs_f64() * 1000.0,
    });

    timings.push(Timing {
        name: "TOTAL",
        ms: total_start.elapsed().as_secs_f64() * 1000.0,
    });

    (
        Frame {
            w,
            h,
            elevation,
            rgba,
        },
        timings,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_has_expected_shape() {
        let cfg = WaveConfig::default();
        let (frame, timings) = render_frame(0.5, 20, 12, 4.0, &cfg);
        assert_eq!(frame.w, 20);
        assert_eq!(frame.h, 12);
        assert_eq!(frame.elevation.data.len(), 20 * 12);
        assert_eq!(frame.rgba.len(), 20 * 12 * 4);
        assert!(timings.iter().any(|t| t.name == "TOTAL"));
    }

    #[test]
    fn same_time_same_config_same_pixels() {
        let cfg = WaveConfig::default();
        let (a, _) = render_frame(1.25, 16, 16, 4.0, &cfg);
        let (b, _) = render_frame(1.25, 16, 16, 4.0, &cfg);
        assert_eq!(a.rgba, b.rgba);
    }
}
