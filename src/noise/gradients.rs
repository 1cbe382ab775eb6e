//! Fixed gradient lookup tables.
//!
//! Contents and layout are part of the determinism contract: changing a single
//! entry changes every generated terrain.

/// 128 unit gradients, interleaved `x, y`.
#[allow(clippy::excessive_precision)]
pub static GRADIENTS_2D: [f32; 256] = [
    0.130526192220052, 0.99144486137381, 0.38268343236509, 0.923879532511287,
    0.608761429008721, 0.793353340291235, 0.793353340291235, 0.608761429008721,
    0.923879532511287, 0.38268343236509, 0.99144486137381, 0.130526192220051,
    0.99144486137381, -0.130526192220051, 0.923879532511287, -0.38268343236509,
    0.793353340291235, -0.60876142900872, 0.608761429008721, -0.793353340291235,
    0.38268343236509, -0.923879532511287, 0.130526192220052, -0.99144486137381,
    -0.130526192220052, -0.99144486137381, -0.38268343236509, -0.923879532511287,
    -0.608761429008721, -0.793353340291235, -0.793353340291235, -0.608761429008721,
    -0.923879532511287, -0.38268343236509, -0.99144486137381, -0.130526192220052,
    -0.99144486137381, 0.130526192220051, -0.923879532511287, 0.38268343236509,
    -0.793353340291235, 0.608761429008721, -0.608761429008721, 0.793353340291235,
    -0.38268343236509, 0.923879532511287, -0.130526192220052, 0.99144486137381,
    0.130526192220052, 0.99144486137381, 0.38268343236509, 0.923879532511287,
    0.608761429008721, 0.793353340291235, 0.793353340291235, 0.608761429008721,
    0.923879532511287, 0.38268343236509, 0.99144486137381, 0.130526192220051,
    0.99144486137381, -0.130526192220051, 0.923879532511287, -0.38268343236509,
    0.793353340291235, -0.60876142900872, 0.608761429008721, -0.793353340291235,
    0.38268343236509, -0.923879532511287, 0.130526192220052, -0.99144486137381,
    -0.130526192220052, -0.99144486137381, -0.38268343236509, -0.923879532511287,
    -0.608761429008721, -0.793353340291235, -0.793353340291235, -0.608761429008721,
    -0.923879532511287, -0.38268343236509, -0.99144486137381, -0.130526192220052,
    -0.99144486137381, 0.130526192220051, -0.923879532511287, 0.38268343236509,
    -0.793353340291235, 0.608761429008721, -0.608761429008721, 0.793353340291235,
    -0.38268343236509, 0.923879532511287, -0.130526192220052, 0.99144486137381,
    0.130526192220052, 0.99144486137381, 0.38268343236509, 0.923879532511287,
    0.608761429008721, 0.793353340291235, 0.793353340291235, 0.608761429008721,
    0.923879532511287, 0.38268343236509, 0.99144486137381, 0.130526192220051,
    0.99144486137381, -0.130526192220051, 0.923879532511287, -0.38268343236509,
    0.793353340291235, -0.60876142900872, 0.608761429008721, -0.793353340291235,
    0.38268343236509, -0.923879532511287, 0.130526192220052, -0.99144486137381,
    -0.130526192220052, -0.99144486137381, -0.38268343236509, -0.923879532511287,
    -0.608761429008721, -0.793353340291235, -0.793353340291235, -0.608761429008721,
    -0.923879532511287, -0.38268343236509, -0.99144486137381, -0.130526192220052,
    -0.99144486137381, 0.130526192220051, -0.923879532511287, 0.38268343236509,
    -0.793353340291235, 0.608761429008721, -0.608761429008721, 0.793353340291235,
    -0.38268343236509, 0.923879532511287, -0.130526192220052, 0.99144486137381,
    0.130526192220052, 0.99144486137381, 0.38268343236509, 0.923879532511287,
    0.608761429008721, 0.793353340291235, 0.793353340291235, 0.608761429008721,
    0.923879532511287, 0.38268343236509, 0.99144486137381, 0.130526192220051,
    0.99144486137381, -0.130526192220051, 0.923879532511287, -0.38268343236509,
    0.793353340291235, -0.60876142900872, 0.608761429008721, -0.793353340291235,
    0.38268343236509, -0.923879532511287, 0.130526192220052, -0.99144486137381,
    -0.130526192220052, -0.99144486137381, -0.38268343236509, -0.923879532511287,
    -0.608761429008721, -0.793353340291235, -0.793353340291235, -0.608761429008721,
    -0.923879532511287, -0.38268343236509, -0.99144486137381, -0.130526192220052,
    -0.99144486137381, 0.130526192220051, -0.923879532511287, 0.38268343236509,
    -0.793353340291235, 0.608761429008721, -0.608761429008721, 0.793353340291235,
    -0.38268343236509, 0.923879532511287, -0.130526192220052, 0.99144486137381,
    0.130526192220052, 0.99144486137381, 0.38268343236509, 0.923879532511287,
    0.608761429008721, 0.793353340291235, 0.793353340291235, 0.608761429008721,
    0.923879532511287, 0.38268343236509, 0.99144486137381, 0.130526192220051,
    0.99144486137381, -0.130526192220051, 0.923879532511287, -0.38268343236509,
    0.793353340291235, -0.60876142900872, 0.608761429008721, -0.793353340291235,
    0.38268343236509, -0.923879532511287, 0.130526192220052, -0.99144486137381,
    -0.130526192220052, -0.99144486137381, -0.38268343236509, -0.923879532511287,
    -0.608761429008721, -0.793353340291235, -0.793353340291235, -0.608761429008721,
    -0.923879532511287, -0.38268343236509, -0.99144486137381, -0.130526192220052,
    -0.99144486137381, 0.130526192220051, -0.923879532511287, 0.38268343236509,
    -0.793353340291235, 0.608761429008721, -0.608761429008721, 0.793353340291235,
    -0.38268343236509, 0.923879532511287, -0.130526192220052, 0.99144486137381,
    0.38268343236509, 0.923879532511287, 0.923879532511287, 0.38268343236509,
    0.923879532511287, -0.38268343236509, 0.38268343236509, -0.923879532511287,
    -0.38268343236509, -0.923879532511287, -0.923879532511287, -0.38268343236509,
    -0.923879532511287, 0.38268343236509, -0.38268343236509, 0.923879532511287,
];

/// 64 cube-edge gradients padded to four lanes, `x, y, z, 0`.
pub static GRADIENTS_3D: [f32; 256] = [
    0.0, 1.0, 1.0, 0.0, 0.0, -1.0, 1.0, 0.0,
    0.0, 1.0, -1.0, 0.0, 0.0, -1.0, -1.0, 0.0,
    1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0,
    1.0, 0.0, -1.0, 0.0, -1.0, 0.0, -1.0, 0.0,
    1.0, 1.0, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0,
    1.0, -1.0, 0.0, 0.0, -1.0, -1.0, 0.0, 0.0,
    0.0, 1.0, 1.0, 0.0, 0.0, -1.0, 1.0, 0.0,
    0.0, 1.0, -1.0, 0.0, 0.0, -1.0, -1.0, 0.0,
    1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0,
    1.0, 0.0, -1.0, 0.0, -1.0, 0.0, -1.0, 0.0,
    1.0, 1.0, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0,
    1.0, -1.0, 0.0, 0.0, -1.0, -1.0, 0.0, 0.0,
    0.0, 1.0, 1.0, 0.0, 0.0, -1.0, 1.0, 0.0,
    0.0, 1.0, -1.0, 0.0, 0.0, -1.0, -1.0, 0.0,
    1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0,
    1.0, 0.0, -1.0, 0.0, -1.0, 0.0, -1.0, 0.0,
    1.0, 1.0, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0,
    1.0, -1.0, 0.0, 0.0, -1.0, -1.0, 0.0, 0.0,
    0.0, 1.0, 1.0, 0.0, 0.0, -1.0, 1.0, 0.0,
    0.0, 1.0, -1.0, 0.0, 0.0, -1.0, -1.0, 0.0,
    1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0,
    1.0, 0.0, -1.0, 0.0, -1.0, 0.0, -1.0, 0.0,
    1.0, 1.0, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0,
    1.0, -1.0, 0.0, 0.0, -1.0, -1.0, 0.0, 0.0,
    0.0, 1.0, 1.0, 0.0, 0.0, -1.0, 1.0, 0.0,
    0.0, 1.0, -1.0, 0.0, 0.0, -1.0, -1.0, 0.0,
    1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0,
    1.0, 0.0, -1.0, 0.0, -1.0, 0.0, -1.0, 0.0,
    1.0, 1.0, 0.0, 0.0, -1.0, 1.0, 0.0, 0.0,
    1.0, -1.0, 0.0, 0.0, -1.0, -1.0, 0.0, 0.0,
    1.0, 1.0, 0.0, 0.0, 0.0, -1.0, 1.0, 0.0,
    -1.0, 1.0, 0.0, 0.0, 0.0, -1.0, -1.0, 0.0,
];

/// 32 gradients, each with exactly one zero lane.
pub static GRADIENTS_4D: [f32; 128] = [
    0.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, -1.0,
    0.0, 1.0, -1.0, 1.0, 0.0, 1.0, -1.0, -1.0,
    0.0, -1.0, 1.0, 1.0, 0.0, -1.0, 1.0, -1.0,
    0.0, -1.0, -1.0, 1.0, 0.0, -1.0, -1.0, -1.0,
    1.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0, -1.0,
    1.0, 0.0, -1.0, 1.0, 1.0, 0.0, -1.0, -1.0,
    -1.0, 0.0, 1.0, 1.0, -1.0, 0.0, 1.0, -1.0,
    -1.0, 0.0, -1.0, 1.0, -1.0, 0.0, -1.0, -1.0,
    1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0, -1.0,
    1.0, -1.0, 0.0, 1.0, 1.0, -1.0, 0.0, -1.0,
    -1.0, 1.0, 0.0, 1.0, -1.0, 1.0, 0.0, -1.0,
    -1.0, -1.0, 0.0, 1.0, -1.0, -1.0, 0.0, -1.0,
    1.0, 1.0, 1.0, 0.0, 1.0, 1.0, -1.0, 0.0,
    1.0, -1.0, 1.0, 0.0, 1.0, -1.0, -1.0, 0.0,
    -1.0, 1.0, 1.0, 0.0, -1.0, 1.0, -1.0, 0.0,
    -1.0, -1.0, 1.0, 0.0, -1.0, -1.0, -1.0, 0.0,
];

/// Gradient slot masks, applied to the mixed hash before lookup.
pub const MASK_2D: i32 = 127 << 1;
pub const MASK_3D: i32 = 63 << 2;
pub const MASK_4D: i32 = 31 << 2;
