//! Baked terrain patch and its world-space height/normal queries.

use glam::{Vec2, Vec3};

use super::bake::StripVertex;
use super::grid::Grid;
use super::strip::StripLayout;

/// Height and surface normal at a world position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    /// Altitude in meters
    pub height: f32,
    /// Unit normal, as baked (points toward -Y)
    pub normal: Vec3,
}

/// A baked `QUADS × QUADS` ground tile.
///
/// Immutable after baking. Holds the padded altitude grid (`VERTICES + 2`
/// per side), the per-vertex normal grid and the strip-ordered vertex array.
/// Queries outside the tile clamp to its edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainPatch<const QUADS: usize> {
    offset: Vec2,
    quad_size: f32,
    altitudes: Grid<f32>,
    normals: Grid<Vec3>,
    vertices: Vec<StripVertex>,
}

impl<const QUADS: usize> TerrainPatch<QUADS> {
    /// Vertices per side
    pub const VERTICES: usize = QUADS + 1;

    /// Length of the strip-ordered vertex array
    pub const VERTICES_COUNT: usize =
        Self::VERTICES * Self::VERTICES + Self::VERTICES.saturating_sub(2) * QUADS;

    pub(crate) fn from_parts(
        offset: Vec2,
        quad_size: f32,
        altitudes: Grid<f32>,
        normals: Grid<Vec3>,
        vertices: Vec<StripVertex>,
    ) -> Self {
        debug_assert_eq!(altitudes.side(), Self::VERTICES + 2);
        debug_assert_eq!(normals.side(), Self::VERTICES);
        debug_assert_eq!(vertices.len(), Self::VERTICES_COUNT);
        Self {
            offset,
            quad_size,
            altitudes,
            normals,
            vertices,
        }
    }

    /// World position `(x, z)` of vertex `(0, 0)`
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn quad_size(&self) -> f32 {
        self.quad_size
    }

    /// Inclusive footprint `(min, max)` in world `(x, z)`
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let extent = QUADS as f32 * self.quad_size;
        (self.offset, self.offset + Vec2::splat(extent))
    }

    pub fn contains(&self, x: f32, z: f32) -> bool {
        let (min, max) = self.bounds();
        (min.x..=max.x).contains(&x) && (min.y..=max.y).contains(&z)
    }

    /// Bilinear altitude at world `(x, z)`.
    pub fn world_to_height(&self, x: f32, z: f32) -> f32 {
        // Padded grid: vertex (0, 0) sits at cell (1, 1)
        let (row, col) = self.local(x, z, 1.0);
        self.altitudes.bilinear(row, col)
    }

    /// Bilinear normal at world `(x, z)`, renormalized.
    pub fn world_to_normal(&self, x: f32, z: f32) -> Vec3 {
        let (row, col) = self.local(x, z, 0.0);
        self.normals.bilinear(row, col).normalize_or_zero()
    }

    pub fn sample(&self, x: f32, z: f32) -> SurfaceSample {
        SurfaceSample {
            height: self.world_to_height(x, z),
            normal: self.world_to_normal(x, z),
        }
    }

    /// Strip-ordered vertices, `VERTICES_COUNT` long
    pub fn vertices(&self) -> &[StripVertex] {
        &self.vertices
    }

    /// Raw bytes of [`Self::vertices`] for buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Padded altitude samples, `VERTICES + 2` per side
    pub fn altitude_grid(&self) -> &Grid<f32> {
        &self.altitudes
    }

    pub fn normal_grid(&self) -> &Grid<Vec3> {
        &self.normals
    }

    pub fn layout(&self) -> StripLayout {
        StripLayout::new(Self::VERTICES)
    }

    /// World `(x, z)` to fractional grid coordinates, clamped to the footprint.
    fn local(&self, x: f32, z: f32, pad: f32) -> (f32, f32) {
        let max = QUADS as f32;
        let u = ((x - self.offset.x) / self.quad_size).clamp(0.0, max);
        let v = ((z - self.offset.y) / self.quad_size).clamp(0.0, max);
        (u + pad, v + pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{from_fn, FractalNoise};
    use crate::terrain::HeightFieldBaker;
    use crate::warp::{ConstantScalarWarp, IdentityWarp};

    fn linear_patch() -> TerrainPatch<4> {
        let field = from_fn(|p: Vec2| 2.0 * p.x - 0.5 * p.y);
        let baker = HeightFieldBaker::new(IdentityWarp, field, 1.0, 2.0).unwrap();
        baker.bake::<4>(Vec2::new(10.0, -4.0)).unwrap()
    }

    fn fractal_patch() -> TerrainPatch<16> {
        let baker = HeightFieldBaker::new(
            ConstantScalarWarp::new(0.05).unwrap(),
            FractalNoise::new(69, 3, 2.0, 0.5, 0.0).unwrap(),
            4.0,
            1.0,
        )
        .unwrap();
        baker.bake::<16>(Vec2::new(-8.0, 24.0)).unwrap()
    }

    #[test]
    fn test_associated_counts() {
        assert_eq!(TerrainPatch::<1>::VERTICES, 2);
        assert_eq!(TerrainPatch::<1>::VERTICES_COUNT, 4);
        assert_eq!(TerrainPatch::<2>::VERTICES_COUNT, 11);
        assert_eq!(TerrainPatch::<3>::VERTICES_COUNT, 22);
        assert_eq!(TerrainPatch::<32>::VERTICES_COUNT, 33 * 33 + 31 * 32);
    }

    #[test]
    fn test_linear_field_reproduced_exactly() {
        let patch = linear_patch();
        for &(x, z) in &[(10.0, -4.0), (11.0, -3.0), (13.5, 1.25), (17.0, 3.0), (18.0, 4.0)] {
            let expected = 2.0 * x - 0.5 * z;
            let got = patch.world_to_height(x, z);
            assert!((got - expected).abs() < 1e-4, "({x}, {z}): {got} vs {expected}");
        }
    }

    #[test]
    fn test_single_quad_centre_is_corner_mean() {
        // Padding ring samples 100.0, so any off-by-one in the padded lookup shows up.
        let field = from_fn(|p: Vec2| match (p.x as i32, p.y as i32) {
            (5, -3) => 0.0,
            (5, -1) => 1.0,
            (7, -3) => 2.0,
            (7, -1) => 3.0,
            _ => 100.0,
        });
        let baker = HeightFieldBaker::new(IdentityWarp, field, 1.0, 2.0).unwrap();
        let patch = baker.bake::<1>(Vec2::new(5.0, -3.0)).unwrap();

        assert_eq!(patch.world_to_height(5.0, -3.0), 0.0);
        assert_eq!(patch.world_to_height(5.0, -1.0), 1.0);
        assert_eq!(patch.world_to_height(7.0, -3.0), 2.0);
        assert_eq!(patch.world_to_height(7.0, -1.0), 3.0);
        assert_eq!(patch.world_to_height(6.0, -2.0), 1.5);
        assert_eq!(patch.sample(6.0, -2.0).height, 1.5);
    }

    #[test]
    fn test_queries_clamp_to_footprint() {
        let patch = linear_patch();
        let (min, max) = patch.bounds();
        assert_eq!(min, Vec2::new(10.0, -4.0));
        assert_eq!(max, Vec2::new(18.0, 4.0));

        assert_eq!(patch.world_to_height(-100.0, -100.0), patch.world_to_height(min.x, min.y));
        assert_eq!(patch.world_to_height(500.0, 0.0), patch.world_to_height(max.x, 0.0));
        assert_eq!(patch.world_to_normal(500.0, 500.0), patch.world_to_normal(max.x, max.y));
        assert_eq!(patch.world_to_normal(-1e6, 1.0), patch.world_to_normal(min.x, 1.0));

        assert!(patch.contains(10.0, 4.0));
        assert!(!patch.contains(9.99, 0.0));
        assert!(!patch.contains(12.0, 4.01));
    }

    #[test]
    fn test_vertex_altitudes_match_height_query() {
        let patch = fractal_patch();
        let q = patch.quad_size();
        for (vertex, (row, col)) in patch.vertices().iter().zip(patch.layout().iter()) {
            let world = patch.offset() + Vec2::new(row as f32, col as f32) * q;
            assert_eq!(patch.world_to_height(world.x, world.y), vertex.altitude);
        }
    }

    #[test]
    fn test_queries_continuous_across_quads() {
        let patch = fractal_patch();
        let offset = patch.offset();
        let eps = 1e-3;
        for k in 1..16 {
            let edge = k as f32;
            for &along in &[0.3, 5.5, 11.9] {
                let x = offset.x + edge;
                let z = offset.y + along;
                let h0 = patch.world_to_height(x - eps, z);
                let h1 = patch.world_to_height(x + eps, z);
                assert!((h0 - h1).abs() < 0.05, "height jump at x = {x}: {h0} vs {h1}");

                let n0 = patch.world_to_normal(offset.x + along, offset.y + edge - eps);
                let n1 = patch.world_to_normal(offset.x + along, offset.y + edge + eps);
                assert!((n0 - n1).length() < 0.01, "normal jump at z = {}", offset.y + edge);
            }
        }
    }

    #[test]
    fn test_normal_query_is_unit_and_downward() {
        let patch = fractal_patch();
        let (min, max) = patch.bounds();
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let sample = patch.sample(min.x + (max.x - min.x) * t, max.y - (max.y - min.y) * t);
            assert!((sample.normal.length() - 1.0).abs() < 1e-5);
            assert!(sample.normal.y < 0.0);
        }
    }

    #[test]
    fn test_linear_field_normal_query() {
        // h = 2x - 0.5z with q = 2: (4q, -2q, -q) ∝ (4, -2, -1)
        let patch = linear_patch();
        let expected = Vec3::new(4.0, -2.0, -1.0).normalize();
        let normal = patch.world_to_normal(13.3, 0.7);
        assert!((normal - expected).length() < 1e-5, "got {normal}");
    }

    #[test]
    fn test_vertex_bytes_view() {
        let patch = linear_patch();
        let bytes = patch.vertex_bytes();
        assert_eq!(
            bytes.len(),
            TerrainPatch::<4>::VERTICES_COUNT * std::mem::size_of::<StripVertex>()
        );
        assert_eq!(std::mem::size_of::<StripVertex>(), 12);
        let first: &[StripVertex] = bytemuck::cast_slice(&bytes[..12]);
        assert_eq!(first[0], patch.vertices()[0]);
    }
}
