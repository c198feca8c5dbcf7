use rayon::prelude::*;

use crate::config::WaveConfig;
use crate::grid::Grid;
use crate::waves;

/// Map a pixel column/row to a world coordinate on a square patch of the
/// given extent centered on the origin.
#[inline]
fn to_world(i: usize, n: usize, extent: f32) -> f32 {
    (i as f32 / n as f32 - 0.5) * extent
}

/// Sample the displacement field on a w×h grid at time t. One elevation call
/// per cell, rows evaluated in parallel — this is the per-vertex pass.
pub fn build_elevation(
    w: usize,
    h: usize,
    t: f32,
    extent: f32,
    cfg: &WaveConfig,
) -> Grid<f32> {
    let mut grid = Grid::new(w, h);

    grid.data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| {
            let z = to_world(y, h, extent);
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = waves::elevation(to_world(x, w, extent), z, t, cfg);
            }
        });

    grid
}

#[inline]
fn to_rgba8(c: [f32; 3]) -> [u8; 4] {
    [
        (c[0].clamp(0.0, 1.0) * 255.0).round() as u8,
        (c[1].clamp(0.0, 1.0) * 255.0).round() as u8,
        (c[2].clamp(0.0, 1.0) * 255.0).round() as u8,
        255,
    ]
}

/// Render the depth-gradient water color from a sampled elevation field.
/// This is the per-fragment pass: mix factor + two-color blend per pixel.
pub fn render_surface(elev: &Grid<f32>, cfg: &WaveConfig) -> Vec<u8> {
    let w = elev.w;
    let mut rgba = vec![0u8; w * elev.h * 4];

    rgba.par_chunks_mut(w * 4)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..w {
                let m = waves::mix_factor(elev.get(x, y), cfg);
                let color = to_rgba8(waves::blend(cfg.depth_color, cfg.surface_color, m));
                row[x * 4..x * 4 + 4].copy_from_slice(&color);
            }
        });

    rgba
}

/// Diagnostic: grayscale heightmap of the displacement field.
pub fn render_heightmap(elev: &Grid<f32>) -> Vec<u8> {
    let min_e = elev.data.iter().cloned().fold(f32::INFINITY, f32::min);
    let max_e = elev.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let range = (max_e - min_e).max(1e-6);
    let w = elev.w;
    let h = elev.h;
    let mut rgba = vec![0u8; w * h * 4];
    for i in 0..w * h {
        let t = (elev.data[i] - min_e) / range;
        let v = (t * 255.0).clamp(0.0, 255.0) as u8;
        rgba[i * 4..i * 4 + 4].copy_from_slice(&[v, v, v, 255]);
    }
    rgba
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevation_field_matches_pointwise_calls() {
        let cfg = WaveConfig::default();
        let grid = build_elevation(16, 16, 0.8, 4.0, &cfg);
        for &(x, y) in &[(0usize, 0usize), (5, 9), (15, 15)] {
            let wx = to_world(x, 16, 4.0);
            let wz = to_world(y, 16, 4.0);
            assert_eq!(
                grid.get(x, y).to_bits(),
                waves::elevation(wx, wz, 0.8, &cfg).to_bits()
            );
        }
    }

    #[test]
    fn elevation_field_is_reproducible() {
        let cfg = WaveConfig::default();
        let a = build_elevation(32, 32, 1.3, 4.0, &cfg);
        let b = build_elevation(32, 32, 1.3, 4.0, &cfg);
        assert_eq!(a.data, b.data);
    }

    #[test]
    fn surface_layer_has_rgba_shape() {
        let cfg = WaveConfig::default();
        let grid = build_elevation(24, 16, 0.0, 4.0, &cfg);
        let rgba = render_surface(&grid, &cfg);
        assert_eq!(rgba.len(), 24 * 16 * 4);
        for px in rgba.chunks_exact(4) {
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn flat_surface_renders_uniform_color() {
        let cfg = WaveConfig {
            big_wave_elevation: 0.0,
            small_wave_elevation: 0.0,
            ..WaveConfig::default()
        };
        let grid = build_elevation(8, 8, 2.0, 4.0, &cfg);
        let rgba = render_surface(&grid, &cfg);
        let first = &rgba[0..4];
        for px in rgba.chunks_exact(4) {
            assert_eq!(px, first);
        }
    }

    #[test]
    fn heightmap_spans_full_gray_range() {
        let mut grid = Grid::new(2, 1);
        grid.set(0, 0, -1.0);
        grid.set(1, 0, 1.0);
        let rgba = render_heightmap(&grid);
        assert_eq!(&rgba[0..4], &[0, 0, 0, 255]);
        assert_eq!(&rgba[4..8], &[255, 255, 255, 255]);
    }
}
