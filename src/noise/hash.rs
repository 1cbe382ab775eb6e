//! Integer lattice hashing shared by every noise kernel.
//!
//! Lattice coordinates are multiplied by a per-axis prime ("primed") before
//! hashing. All arithmetic wraps; the outputs are bit-identical across
//! platforms.

use super::gradients::{GRADIENTS_2D, GRADIENTS_3D, GRADIENTS_4D, MASK_2D, MASK_3D, MASK_4D};

pub const PRIME_X: i32 = 501125321;
pub const PRIME_Y: i32 = 1136930381;
pub const PRIME_Z: i32 = 1720413743;
pub const PRIME_W: i32 = 1066037191;

const HASH_MULTIPLIER: i32 = 0x27d4eb2d;

#[inline(always)]
pub fn hash_2d(seed: i32, x_primed: i32, y_primed: i32) -> i32 {
    (seed ^ x_primed ^ y_primed).wrapping_mul(HASH_MULTIPLIER)
}

#[inline(always)]
pub fn hash_3d(seed: i32, x_primed: i32, y_primed: i32, z_primed: i32) -> i32 {
    (seed ^ x_primed ^ y_primed ^ z_primed).wrapping_mul(HASH_MULTIPLIER)
}

#[inline(always)]
pub fn hash_4d(seed: i32, x_primed: i32, y_primed: i32, z_primed: i32, w_primed: i32) -> i32 {
    (seed ^ x_primed ^ y_primed ^ z_primed ^ w_primed).wrapping_mul(HASH_MULTIPLIER)
}

/// Map a hash to a value in [-1, 1].
#[inline(always)]
fn scramble_to_unit(hash: i32) -> f32 {
    let hash = hash.wrapping_mul(hash);
    let hash = hash ^ (hash << 19);
    hash as f32 * (1.0 / 2147483648.0)
}

#[inline(always)]
pub fn val_coord_2d(seed: i32, x_primed: i32, y_primed: i32) -> f32 {
    scramble_to_unit(hash_2d(seed, x_primed, y_primed))
}

#[inline(always)]
pub fn val_coord_3d(seed: i32, x_primed: i32, y_primed: i32, z_primed: i32) -> f32 {
    scramble_to_unit(hash_3d(seed, x_primed, y_primed, z_primed))
}

#[inline(always)]
pub fn val_coord_4d(seed: i32, x_primed: i32, y_primed: i32, z_primed: i32, w_primed: i32) -> f32 {
    scramble_to_unit(hash_4d(seed, x_primed, y_primed, z_primed, w_primed))
}

/// Table offset of the gradient selected by `hash`.
///
/// The result is always a multiple of the lane count and never points past
/// the end of the matching table.
#[inline(always)]
pub fn gradient_slot(hash: i32, mask: i32) -> usize {
    let hash = hash ^ (hash >> 15);
    (hash & mask) as usize
}

#[inline(always)]
pub fn grad_coord_2d(seed: i32, x_primed: i32, y_primed: i32, xd: f32, yd: f32) -> f32 {
    let slot = gradient_slot(hash_2d(seed, x_primed, y_primed), MASK_2D);

    xd * GRADIENTS_2D[slot] + yd * GRADIENTS_2D[slot | 1]
}

#[inline(always)]
#[allow(clippy::too_many_arguments)]
pub fn grad_coord_3d(
    seed: i32,
    x_primed: i32,
    y_primed: i32,
    z_primed: i32,
    xd: f32,
    yd: f32,
    zd: f32,
) -> f32 {
    let slot = gradient_slot(hash_3d(seed, x_primed, y_primed, z_primed), MASK_3D);

    xd * GRADIENTS_3D[slot] + yd * GRADIENTS_3D[slot | 1] + zd * GRADIENTS_3D[slot | 2]
}

#[inline(always)]
pub fn grad_coord_4d(
    seed: i32,
    primed: [i32; 4],
    xd: f32,
    yd: f32,
    zd: f32,
    wd: f32,
) -> f32 {
    let [x, y, z, w] = primed;
    let slot = gradient_slot(hash_4d(seed, x, y, z, w), MASK_4D);

    xd * GRADIENTS_4D[slot]
        + yd * GRADIENTS_4D[slot | 1]
        + zd * GRADIENTS_4D[slot | 2]
        + wd * GRADIENTS_4D[slot | 3]
}
