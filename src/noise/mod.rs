//! Deterministic hash-based noise generators.
//!
//! Every generator is a pure function of its seed and the sample coordinate:
//! the same inputs return bit-identical outputs on every call and platform.

mod compat;
mod fractal;
pub mod gradients;
pub mod hash;
mod perlin;
mod white;

use std::ops::Mul;
use std::sync::Arc;

use glam::{Vec2, Vec3, Vec4};

pub use fractal::FractalNoise;
pub use perlin::{perlin_2d, perlin_3d, perlin_4d, PerlinNoise};
pub use white::{white_2d, white_3d, white_4d, WhiteNoise};

/// Scalar noise field sampled at coordinates of type `P`
pub trait Noise<P> {
    fn generate(&self, p: P) -> f32;
}

impl<P, N: Noise<P> + ?Sized> Noise<P> for &N {
    fn generate(&self, p: P) -> f32 {
        (**self).generate(p)
    }
}

impl<P, N: Noise<P> + ?Sized> Noise<P> for Box<N> {
    fn generate(&self, p: P) -> f32 {
        (**self).generate(p)
    }
}

impl<P, N: Noise<P> + ?Sized> Noise<P> for Arc<N> {
    fn generate(&self, p: P) -> f32 {
        (**self).generate(p)
    }
}

/// Noise field backed by a closure (see [`from_fn`])
#[derive(Clone, Copy, Debug)]
pub struct FnNoise<F>(pub F);

impl<P, F: Fn(P) -> f32> Noise<P> for FnNoise<F> {
    fn generate(&self, p: P) -> f32 {
        (self.0)(p)
    }
}

/// Wrap a closure as a noise field, e.g. an analytic test surface.
pub fn from_fn<P, F: Fn(P) -> f32>(f: F) -> FnNoise<F> {
    FnNoise(f)
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for glam::Vec2 {}
    impl Sealed for glam::Vec3 {}
    impl Sealed for glam::Vec4 {}
}

/// Sample coordinate accepted by the built-in lattice generators (2D, 3D and 4D).
pub trait Coord: Copy + Send + Sync + Mul<f32, Output = Self> + sealed::Sealed {
    #[doc(hidden)]
    fn perlin(self, seed: i32) -> f32;

    #[doc(hidden)]
    fn white(self, seed: i32) -> f32;
}

impl Coord for Vec2 {
    fn perlin(self, seed: i32) -> f32 {
        perlin_2d(seed, self.x, self.y)
    }

    fn white(self, seed: i32) -> f32 {
        white_2d(seed, self.x, self.y)
    }
}

impl Coord for Vec3 {
    fn perlin(self, seed: i32) -> f32 {
        perlin_3d(seed, self.x, self.y, self.z)
    }

    fn white(self, seed: i32) -> f32 {
        white_3d(seed, self.x, self.y, self.z)
    }
}

impl Coord for Vec4 {
    fn perlin(self, seed: i32) -> f32 {
        perlin_4d(seed, self.x, self.y, self.z, self.w)
    }

    fn white(self, seed: i32) -> f32 {
        white_4d(seed, self.x, self.y, self.z, self.w)
    }
}

#[inline(always)]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Quintic fade `t³(t(6t − 15) + 10)`, zero first and second derivative at 0 and 1.
#[inline(always)]
pub(crate) fn interp_quintic(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Split a coordinate into its lattice cell and the offset inside that cell.
#[inline(always)]
pub(crate) fn lattice(v: f32) -> (i32, f32) {
    let cell = v.floor();
    (cell as i32, v - cell)
}
