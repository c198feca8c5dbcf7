/// Deterministic hashing based on splitmix32. No stateful RNG in inner loops.

#[inline]
pub fn splitmix32(mut x: u32) -> u32 {
    x = x.wrapping_add(0x9E3779B9);
    let mut z = x;
    z = (z ^ (z >> 16)).wrapping_mul(0x7FEB352D);
    z = (z ^ (z >> 15)).wrapping_mul(0x846CA68B);
    z ^ (z >> 16)
}

/// Hash a 3D lattice coordinate (two planar axes + time axis) into a
/// well-mixed u32 used to pick a noise gradient.
#[inline]
pub fn hash3(ix: i32, iy: i32, iz: i32, seed: u32) -> u32 {
    let x = ix as u32;
    let y = iy as u32;
    let z = iz as u32;
    let mut h = seed ^ 0x9E3779B9;
    h = splitmix32(h ^ x.wrapping_mul(0x85EBCA6B));
    h = splitmix32(h ^ y.wrapping_mul(0xC2B2AE35));
    h = splitmix32(h ^ z.wrapping_mul(0x27D4EB2F));
    h
}
