//! White noise: an independent hashed value per exact coordinate.

use super::hash::{val_coord_2d, val_coord_3d, val_coord_4d, PRIME_W, PRIME_X, PRIME_Y, PRIME_Z};
use super::{Coord, Noise};

/// Seeded white noise in [-1, 1] with no spatial coherence.
///
/// Hashes the raw float bits, so `0.0` and `-0.0` are distinct inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhiteNoise {
    seed: u32,
}

impl WhiteNoise {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl<P: Coord> Noise<P> for WhiteNoise {
    fn generate(&self, p: P) -> f32 {
        p.white(self.seed as i32)
    }
}

/// Fold the high half of the float bits into the low half before priming.
#[inline(always)]
fn fold_bits(v: f32) -> i32 {
    let bits = v.to_bits() as i32;
    bits ^ (bits >> 16)
}

pub fn white_2d(seed: i32, x: f32, y: f32) -> f32 {
    val_coord_2d(
        seed,
        fold_bits(x).wrapping_mul(PRIME_X),
        fold_bits(y).wrapping_mul(PRIME_Y),
    )
}

pub fn white_3d(seed: i32, x: f32, y: f32, z: f32) -> f32 {
    val_coord_3d(
        seed,
        fold_bits(x).wrapping_mul(PRIME_X),
        fold_bits(y).wrapping_mul(PRIME_Y),
        fold_bits(z).wrapping_mul(PRIME_Z),
    )
}

pub fn white_4d(seed: i32, x: f32, y: f32, z: f32, w: f32) -> f32 {
    val_coord_4d(
        seed,
        fold_bits(x).wrapping_mul(PRIME_X),
        fold_bits(y).wrapping_mul(PRIME_Y),
        fold_bits(z).wrapping_mul(PRIME_Z),
        fold_bits(w).wrapping_mul(PRIME_W),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3, Vec4};

    #[test]
    fn test_white_noise_range_and_determinism() {
        let white = WhiteNoise::new(9);
        for i in 0..1000 {
            let t = i as f32 * 0.01;
            let v = white.generate(Vec2::new(t, 1.0 - t));
            assert!((-1.0..=1.0).contains(&v));
            assert_eq!(v.to_bits(), white.generate(Vec2::new(t, 1.0 - t)).to_bits());
        }
    }

    #[test]
    fn test_white_noise_is_not_smooth() {
        let white = WhiteNoise::new(9);
        let distinct: std::collections::HashSet<u32> = (0..64)
            .map(|i| white.generate(Vec3::new(i as f32, 0.5, 0.25)).to_bits())
            .collect();
        assert!(distinct.len() > 60);
    }

    #[test]
    fn test_white_noise_4d_depends_on_every_axis() {
        let white = WhiteNoise::new(1);
        let base = white.generate(Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_ne!(base, white.generate(Vec4::new(1.0, 2.0, 3.0, 5.0)));
        assert_ne!(base, white.generate(Vec4::new(1.0, 2.0, 7.0, 4.0)));
    }
}
