//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;

use terrain_bake::{FractalParams, TerrainParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "terrain-bake")]
#[command(about = "Bake seeded ground tiles and render them to a heightmap PNG", long_about = None)]
pub struct Args {
    /// Noise seed
    #[arg(long, default_value_t = 69)]
    pub seed: u32,

    /// Fractal octave count
    #[arg(long, default_value_t = 3)]
    pub octaves: u32,

    /// Frequency multiplier between octaves
    #[arg(long, default_value_t = 2.0)]
    pub lacunarity: f32,

    /// Amplitude multiplier between octaves
    #[arg(long, default_value_t = 0.5)]
    pub gain: f32,

    /// How strongly low octaves damp high ones (0 = plain fBm)
    #[arg(long, default_value_t = 0.0)]
    pub weighted_strength: f32,

    /// Spatial frequency (cycles per meter)
    #[arg(long, default_value_t = 0.05)]
    pub frequency: f32,

    /// Altitude scale (meters)
    #[arg(long, value_name = "METERS", default_value_t = 4.0)]
    pub amplitude: f32,

    /// Quad edge length (meters)
    #[arg(long, value_name = "METERS", default_value_t = 1.0)]
    pub quad_size: f32,

    /// Tiles per side of the baked block
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    pub tiles: u32,

    /// World X of the block's first vertex (meters)
    #[arg(long, value_name = "METERS", default_value_t = 0.0, allow_negative_numbers = true)]
    pub origin_x: f32,

    /// World Z of the block's first vertex (meters)
    #[arg(long, value_name = "METERS", default_value_t = 0.0, allow_negative_numbers = true)]
    pub origin_z: f32,

    /// Heightmap pixels per quad
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub pixels_per_quad: u32,

    /// Heightmap output path
    #[arg(long, default_value = "terrain.png")]
    pub output: PathBuf,

    /// Also render the raw fractal noise over the same area
    #[arg(long, value_name = "PATH")]
    pub preview: Option<PathBuf>,

    /// Also render the curl flow directions over the same area
    #[arg(long, value_name = "PATH")]
    pub flow_map: Option<PathBuf>,

    /// Write every tile's strip vertices as raw native-endian f32 triples
    #[arg(long, value_name = "PATH")]
    pub dump_vertices: Option<PathBuf>,
}

impl Args {
    /// Terrain parameters assembled from the flags
    pub fn to_params(&self) -> TerrainParams {
        TerrainParams {
            seed: self.seed,
            amplitude_m: self.amplitude,
            quad_size_m: self.quad_size,
            frequency: self.frequency,
            fractal: FractalParams {
                octaves: self.octaves,
                lacunarity: self.lacunarity,
                gain: self.gain,
                weighted_strength: self.weighted_strength,
            },
        }
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.origin_x, self.origin_z)
    }
}
