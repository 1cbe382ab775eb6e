//! Terrain-bake library - deterministic noise-driven ground tiles
//!
//! Bakes seeded fractal noise into strip-ordered vertex arrays and answers
//! bilinear height/normal queries against the baked grids. Nothing here
//! touches a graphics device: callers upload [`TerrainPatch::vertex_bytes`]
//! themselves.

pub mod error;
pub mod noise;
pub mod params;
pub mod terrain;
pub mod warp;

pub use error::{Result, TerrainError};
pub use self::noise::{FractalNoise, Noise, PerlinNoise, WhiteNoise};
pub use params::{FractalParams, TerrainParams};
pub use terrain::{HeightFieldBaker, StripVertex, SurfaceSample, TerrainPatch};
pub use warp::{ConstantScalarWarp, CurlWarp, IdentityWarp, Warp};
