//! Parameter definitions with physical units and documented semantics.
//!
//! Every struct has a `Default` tuned for the isometric ground tiles and a
//! `validate()` that reports the first invalid field.

mod noise;
mod terrain;

// Re-export all types
pub use self::noise::FractalParams;
pub use terrain::TerrainParams;
