//! Gradient (Perlin) noise with quintic interpolation.

use super::hash::{grad_coord_2d, grad_coord_3d, grad_coord_4d, PRIME_W, PRIME_X, PRIME_Y, PRIME_Z};
use super::{interp_quintic, lattice, lerp, Coord, Noise};

/// Scales 2D output into approximately [-1, 1].
#[allow(clippy::excessive_precision)]
const NORMALIZE_2D: f32 = 1.4247691104677813;

/// Scales 3D and 4D output into approximately [-1, 1].
#[allow(clippy::excessive_precision)]
const NORMALIZE_3D: f32 = 0.964921414852142333984375;

/// Seeded gradient noise, usable at `Vec2`, `Vec3` and `Vec4` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerlinNoise {
    seed: u32,
}

impl PerlinNoise {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl<P: Coord> Noise<P> for PerlinNoise {
    fn generate(&self, p: P) -> f32 {
        p.perlin(self.seed as i32)
    }
}

pub fn perlin_2d(seed: i32, x: f32, y: f32) -> f32 {
    let (x0, xd0) = lattice(x);
    let (y0, yd0) = lattice(y);
    let xd1 = xd0 - 1.0;
    let yd1 = yd0 - 1.0;

    let xs = interp_quintic(xd0);
    let ys = interp_quintic(yd0);

    let x0 = x0.wrapping_mul(PRIME_X);
    let y0 = y0.wrapping_mul(PRIME_Y);
    let x1 = x0.wrapping_add(PRIME_X);
    let y1 = y0.wrapping_add(PRIME_Y);

    let xf0 = lerp(
        grad_coord_2d(seed, x0, y0, xd0, yd0),
        grad_coord_2d(seed, x1, y0, xd1, yd0),
        xs,
    );
    let xf1 = lerp(
        grad_coord_2d(seed, x0, y1, xd0, yd1),
        grad_coord_2d(seed, x1, y1, xd1, yd1),
        xs,
    );

    lerp(xf0, xf1, ys) * NORMALIZE_2D
}

pub fn perlin_3d(seed: i32, x: f32, y: f32, z: f32) -> f32 {
    let (x0, xd0) = lattice(x);
    let (y0, yd0) = lattice(y);
    let (z0, zd0) = lattice(z);
    let xd1 = xd0 - 1.0;
    let yd1 = yd0 - 1.0;
    let zd1 = zd0 - 1.0;

    let xs = interp_quintic(xd0);
    let ys = interp_quintic(yd0);
    let zs = interp_quintic(zd0);

    let x0 = x0.wrapping_mul(PRIME_X);
    let y0 = y0.wrapping_mul(PRIME_Y);
    let z0 = z0.wrapping_mul(PRIME_Z);
    let x1 = x0.wrapping_add(PRIME_X);
    let y1 = y0.wrapping_add(PRIME_Y);
    let z1 = z0.wrapping_add(PRIME_Z);

    let xf00 = lerp(
        grad_coord_3d(seed, x0, y0, z0, xd0, yd0, zd0),
        grad_coord_3d(seed, x1, y0, z0, xd1, yd0, zd0),
        xs,
    );
    let xf10 = lerp(
        grad_coord_3d(seed, x0, y1, z0, xd0, yd1, zd0),
        grad_coord_3d(seed, x1, y1, z0, xd1, yd1, zd0),
        xs,
    );
    let xf01 = lerp(
        grad_coord_3d(seed, x0, y0, z1, xd0, yd0, zd1),
        grad_coord_3d(seed, x1, y0, z1, xd1, yd0, zd1),
        xs,
    );
    let xf11 = lerp(
        grad_coord_3d(seed, x0, y1, z1, xd0, yd1, zd1),
        grad_coord_3d(seed, x1, y1, z1, xd1, yd1, zd1),
        xs,
    );

    let yf0 = lerp(xf00, xf10, ys);
    let yf1 = lerp(xf01, xf11, ys);

    lerp(yf0, yf1, zs) * NORMALIZE_3D
}

pub fn perlin_4d(seed: i32, x: f32, y: f32, z: f32, w: f32) -> f32 {
    let (x0, xd0) = lattice(x);
    let (y0, yd0) = lattice(y);
    let (z0, zd0) = lattice(z);
    let (w0, wd0) = lattice(w);

    let xd = [xd0, xd0 - 1.0];
    let yd = [yd0, yd0 - 1.0];
    let zd = [zd0, zd0 - 1.0];
    let wd = [wd0, wd0 - 1.0];

    let xs = interp_quintic(xd0);
    let ys = interp_quintic(yd0);
    let zs = interp_quintic(zd0);
    let ws = interp_quintic(wd0);

    let x0 = x0.wrapping_mul(PRIME_X);
    let y0 = y0.wrapping_mul(PRIME_Y);
    let z0 = z0.wrapping_mul(PRIME_Z);
    let w0 = w0.wrapping_mul(PRIME_W);
    let xp = [x0, x0.wrapping_add(PRIME_X)];
    let yp = [y0, y0.wrapping_add(PRIME_Y)];
    let zp = [z0, z0.wrapping_add(PRIME_Z)];
    let wp = [w0, w0.wrapping_add(PRIME_W)];

    // Corner (i, j, k, l) selects the low (0) or high (1) lattice plane per axis.
    let corner = |i: usize, j: usize, k: usize, l: usize| {
        grad_coord_4d(seed, [xp[i], yp[j], zp[k], wp[l]], xd[i], yd[j], zd[k], wd[l])
    };
    let along_x = |j, k, l| lerp(corner(0, j, k, l), corner(1, j, k, l), xs);
    let along_y = |k, l| lerp(along_x(0, k, l), along_x(1, k, l), ys);
    let along_z = |l| lerp(along_y(0, l), along_y(1, l), zs);

    lerp(along_z(0), along_z(1), ws) * NORMALIZE_3D
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3, Vec4};

    #[test]
    fn test_lattice_points_are_zero() {
        let perlin = PerlinNoise::new(69);
        assert_eq!(perlin.generate(Vec2::new(1.0, 1.0)), 0.0);
        assert_eq!(perlin.generate(Vec2::new(-4.0, 12.0)), 0.0);
        assert_eq!(perlin.generate(Vec3::new(2.0, -3.0, 5.0)), 0.0);
        assert_eq!(perlin.generate(Vec4::new(2.0, -3.0, 5.0, 8.0)), 0.0);
    }

    #[test]
    fn test_pinned_values() {
        let cases = [
            (69, Vec2::new(0.5, 0.25), 0.187_805_34),
            (69, Vec2::new(1.3, -2.7), -0.251_276_94),
            (1337, Vec2::new(12.34, 56.78), 0.491_375_98),
        ];
        for (seed, p, expected) in cases {
            let got = PerlinNoise::new(seed).generate(p);
            assert!(
                (got - expected).abs() < 1e-6,
                "seed {seed} at {p}: expected {expected}, got {got}"
            );
        }
    }

    #[test]
    fn test_determinism() {
        let a = PerlinNoise::new(42);
        let b = PerlinNoise::new(42);
        for i in 0..200 {
            let t = i as f32 * 0.173;
            let p2 = Vec2::new(t, -t * 0.7);
            let p3 = Vec3::new(t, t * 1.3, -t);
            let p4 = Vec4::new(t, t * 1.3, -t, t * 0.1);
            assert_eq!(a.generate(p2).to_bits(), b.generate(p2).to_bits());
            assert_eq!(a.generate(p3).to_bits(), b.generate(p3).to_bits());
            assert_eq!(a.generate(p4).to_bits(), b.generate(p4).to_bits());
        }
    }

    #[test]
    fn test_seed_changes_output() {
        let p = Vec2::new(0.5, 0.25);
        assert_ne!(PerlinNoise::new(1).generate(p), PerlinNoise::new(2).generate(p));
    }

    #[test]
    fn test_single_octave_range() {
        let perlin = PerlinNoise::new(3);
        let mut max_abs = 0.0f32;
        for i in 0..100 {
            for j in 0..100 {
                let x = i as f32 * 0.137 - 6.0;
                let y = j as f32 * 0.091 - 4.0;
                let v2 = perlin.generate(Vec2::new(x, y));
                let v3 = perlin.generate(Vec3::new(x, y, x * 0.5));
                max_abs = max_abs.max(v2.abs()).max(v3.abs());
            }
        }
        assert!(max_abs <= 1.05, "max |noise| = {max_abs}");
        assert!(max_abs > 0.3, "noise is suspiciously flat: {max_abs}");
    }

    #[test]
    fn test_4d_is_finite_and_bounded() {
        let perlin = PerlinNoise::new(11);
        for i in 0..500 {
            let t = i as f32 * 0.37;
            let v = perlin.generate(Vec4::new(t, -t * 0.5, t * 0.25, 1.5));
            assert!(v.is_finite());
            assert!(v.abs() <= 2.0);
        }
    }

    #[test]
    fn test_continuous_across_cell_boundary() {
        let perlin = PerlinNoise::new(5);
        let below = perlin.generate(Vec2::new(2.0 - 1e-4, 0.4));
        let above = perlin.generate(Vec2::new(2.0 + 1e-4, 0.4));
        assert!((below - above).abs() < 1e-3);
    }
}
