use crate::rng::hash3;

#[inline]
fn smootherstep(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// 3D gradient noise (Perlin-style). The third axis carries animation time,
/// so ripples drift instead of scrolling along a grid direction.
///
/// Exactly zero at integer lattice points. Output is approximately [-1, 1].
#[inline]
pub fn gradient_noise_3d(x: f32, y: f32, z: f32, seed: u32) -> f32 {
    let ix = x.floor() as i32;
    let iy = y.floor() as i32;
    let iz = z.floor() as i32;
    let fx = x - ix as f32;
    let fy = y - iy as f32;
    let fz = z - iz as f32;
    let sx = smootherstep(fx);
    let sy = smootherstep(fy);
    let sz = smootherstep(fz);

    #[inline]
    fn grad(hash: u32, dx: f32, dy: f32, dz: f32) -> f32 {
        // 12 cube-edge gradients, last 4 arms repeat to fill the &15 range.
        match hash & 15 {
            0 => dx + dy,
            1 => -dx + dy,
            2 => dx - dy,
            3 => -dx - dy,
            4 => dx + dz,
            5 => -dx + dz,
            6 => dx - dz,
            7 => -dx - dz,
            8 => dy + dz,
            9 => -dy + dz,
            10 => dy - dz,
            11 => -dy - dz,
            12 => dx + dy,
            13 => -dx + dy,
            14 => -dy + dz,
            _ => -dy - dz,
        }
    }

    let v000 = grad(hash3(ix, iy, iz, seed), fx, fy, fz);
    let v100 = grad(hash3(ix + 1, iy, iz, seed), fx - 1.0, fy, fz);
    let v010 = grad(hash3(ix, iy + 1, iz, seed), fx, fy - 1.0, fz);
    let v110 = grad(hash3(ix + 1, iy + 1, iz, seed), fx - 1.0, fy - 1.0, fz);
    let v001 = grad(hash3(ix, iy, iz + 1, seed), fx, fy, fz - 1.0);
    let v101 = grad(hash3(ix + 1, iy, iz + 1, seed), fx - 1.0, fy, fz - 1.0);
    let v011 = grad(hash3(ix, iy + 1, iz + 1, seed), fx, fy - 1.0, fz - 1.0);
    let v111 = grad(hash3(ix + 1, iy + 1, iz + 1, seed), fx - 1.0, fy - 1.0, fz - 1.0);

    let a = lerp(lerp(v000, v100, sx), lerp(v010, v110, sx), sy);
    let b = lerp(lerp(v001, v101, sx), lerp(v011, v111, sx), sy);
    // Scale to approximately [-1, 1] range (raw range is ~[-0.87, 0.87])
    lerp(a, b, sz) * 1.1547
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_lattice_points() {
        for &(x, y, z) in &[(0, 0, 0), (1, 0, 0), (-3, 7, 2), (100, -50, 9)] {
            let n = gradient_noise_3d(x as f32, y as f32, z as f32, 1234);
            assert_eq!(n, 0.0, "lattice point ({x},{y},{z}) must be exactly 0");
        }
    }

    #[test]
    fn deterministic() {
        let a = gradient_noise_3d(1.37, -2.9, 0.42, 7);
        let b = gradient_noise_3d(1.37, -2.9, 0.42, 7);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn bounded_and_non_constant() {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for i in 0..64 {
            for j in 0..64 {
                let n = gradient_noise_3d(i as f32 * 0.173, j as f32 * 0.291, 0.5, 99);
                min = min.min(n);
                max = max.max(n);
            }
        }
        assert!(min >= -1.01 && max <= 1.01, "range [{min}, {max}] out of bounds");
        assert!(max - min > 0.1, "noise should vary across samples");
    }

    #[test]
    fn seed_changes_field() {
        let a = gradient_noise_3d(0.4, 0.6, 0.2, 1);
        let b = gradient_noise_3d(0.4, 0.6, 0.2, 2);
        assert_ne!(a.to_bits(), b.to_bits());
    }
}
