//! `noise::NoiseFn` adapters so the generators compose with noise-rs modules.
//!
//! Points are narrowed to `f32` before sampling; the lattice kernels are
//! single precision.

use glam::{Vec2, Vec3, Vec4};
use noise::NoiseFn;

use super::{FractalNoise, Noise, PerlinNoise, WhiteNoise};

macro_rules! impl_noise_fn {
    ($($generator:ty),*) => {$(
        impl NoiseFn<f64, 2> for $generator {
            fn get(&self, point: [f64; 2]) -> f64 {
                let [x, y] = point;
                self.generate(Vec2::new(x as f32, y as f32)) as f64
            }
        }

        impl NoiseFn<f64, 3> for $generator {
            fn get(&self, point: [f64; 3]) -> f64 {
                let [x, y, z] = point;
                self.generate(Vec3::new(x as f32, y as f32, z as f32)) as f64
            }
        }

        impl NoiseFn<f64, 4> for $generator {
            fn get(&self, point: [f64; 4]) -> f64 {
                let [x, y, z, w] = point;
                self.generate(Vec4::new(x as f32, y as f32, z as f32, w as f32)) as f64
            }
        }
    )*};
}

impl_noise_fn!(PerlinNoise, FractalNoise, WhiteNoise);
