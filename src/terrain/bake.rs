//! Height-field baking: padded noise sampling, per-vertex normals and the
//! strip-ordered vertex array.

use std::time::Instant;

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use rayon::prelude::*;

use super::grid::Grid;
use super::patch::TerrainPatch;
use super::strip::StripLayout;
use crate::error::{Result, TerrainError};
use crate::noise::Noise;
use crate::warp::Warp;

/// Vertex layout handed to the GPU uploader (altitude + encoded normal)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct StripVertex {
    /// Height above the zero plane in meters
    pub altitude: f32,
    /// `atan2(n.y, n.z)` in radians
    pub pitch: f32,
    /// `atan2(n.y, n.x)` in radians
    pub yaw: f32,
}

impl StripVertex {
    /// Pack an altitude and a normal into the vertex format.
    pub fn encode(altitude: f32, normal: Vec3) -> Self {
        Self {
            altitude,
            pitch: normal.y.atan2(normal.z),
            yaw: normal.y.atan2(normal.x),
        }
    }

    /// Reconstruct the unit normal from `(pitch, yaw)`.
    ///
    /// The encoding only keeps ratios against `n.y`, so horizontal normals
    /// (`n.y == 0`) cannot be recovered. Baked normals always have `n.y < 0`.
    pub fn decode_normal(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();

        let y = sin_yaw.signum();
        let x = y * cos_yaw / sin_yaw;
        let z = y * cos_pitch / sin_pitch;

        Vec3::new(x, y, z).normalize()
    }
}

/// Bakes `noise(warp(p)) * amplitude` into [`TerrainPatch`]es.
///
/// World axes: patch rows run along X, columns along Z. Offsets are passed as
/// `Vec2(x, z)`.
#[derive(Debug, Clone)]
pub struct HeightFieldBaker<W, N> {
    warp: W,
    noise: N,
    amplitude: f32,
    quad_size: f32,
}

impl<W, N> HeightFieldBaker<W, N> {
    pub fn new(warp: W, noise: N, amplitude: f32, quad_size: f32) -> Result<Self> {
        if !amplitude.is_finite() {
            return Err(TerrainError::InvalidAmplitude(amplitude));
        }
        if !(quad_size.is_finite() && quad_size > 0.0) {
            return Err(TerrainError::InvalidQuadSize(quad_size));
        }
        Ok(Self {
            warp,
            noise,
            amplitude,
            quad_size,
        })
    }

    pub fn warp(&self) -> &W {
        &self.warp
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn quad_size(&self) -> f32 {
        self.quad_size
    }
}

impl<W: Warp<Vec2>, N: Noise<Vec2>> HeightFieldBaker<W, N> {
    /// Altitude at a world position, before any grid interpolation.
    pub fn altitude_at(&self, world: Vec2) -> f32 {
        self.noise.generate(self.warp.transform(world)) * self.amplitude
    }

    /// Bake a `QUADS × QUADS` patch whose first vertex sits at `offset`.
    pub fn bake<const QUADS: usize>(&self, offset: Vec2) -> Result<TerrainPatch<QUADS>> {
        if QUADS == 0 {
            return Err(TerrainError::EmptyPatch);
        }
        let started = Instant::now();
        let vertices = QUADS + 1;
        let q = self.quad_size;

        // One extra sample on every side so edge vertices get central differences
        let origin = offset - Vec2::splat(q);
        let altitudes = Grid::from_fn(vertices + 2, |row, col| {
            self.altitude_at(origin + Vec2::new(row as f32, col as f32) * q)
        });

        let normals = Grid::from_fn(vertices, |row, col| {
            let top = altitudes[(row, col + 1)];
            let bottom = altitudes[(row + 2, col + 1)];
            let left = altitudes[(row + 1, col)];
            let right = altitudes[(row + 1, col + 2)];
            Vec3::new(bottom - top, -q - q, right - left).normalize()
        });

        let strip: Vec<StripVertex> = StripLayout::new(vertices)
            .iter()
            .map(|(row, col)| {
                StripVertex::encode(altitudes[(row + 1, col + 1)], normals[(row, col)])
            })
            .collect();

        log::debug!(
            "baked {QUADS}x{QUADS} patch at ({:.1}, {:.1}): {} strip vertices in {:?}",
            offset.x,
            offset.y,
            strip.len(),
            started.elapsed()
        );

        Ok(TerrainPatch::from_parts(offset, q, altitudes, normals, strip))
    }
}

impl<W, N> HeightFieldBaker<W, N>
where
    W: Warp<Vec2> + Sync,
    N: Noise<Vec2> + Sync,
{
    /// Bake one patch per offset on the rayon pool. Output order matches `offsets`.
    pub fn bake_many<const QUADS: usize>(
        &self,
        offsets: &[Vec2],
    ) -> Result<Vec<TerrainPatch<QUADS>>> {
        let started = Instant::now();
        let patches = offsets
            .par_iter()
            .map(|&offset| self.bake::<QUADS>(offset))
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "baked {} patches of {QUADS}x{QUADS} quads in {:?}",
            patches.len(),
            started.elapsed()
        );
        Ok(patches)
    }
}
