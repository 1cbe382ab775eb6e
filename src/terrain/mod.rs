//! Baked ground tiles: padded height sampling, normals, strip vertex order
//! and runtime bilinear queries.

mod bake;
mod grid;
mod patch;
mod strip;

pub use bake::{HeightFieldBaker, StripVertex};
pub use grid::Grid;
pub use patch::{SurfaceSample, TerrainPatch};
pub use strip::StripLayout;
