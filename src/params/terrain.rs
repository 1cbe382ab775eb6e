//! Ground tile parameters.

use super::FractalParams;
use crate::error::{Result, TerrainError};
use crate::noise::FractalNoise;
use crate::terrain::HeightFieldBaker;
use crate::warp::ConstantScalarWarp;

/// Everything needed to bake ground tiles from a seed
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainParams {
    /// Noise seed; identical seeds bake identical terrain
    pub seed: u32,

    /// Altitude scale in meters (noise output in ~[-1, 1] is multiplied by this)
    pub amplitude_m: f32,

    /// Edge length of one grid quad in meters
    pub quad_size_m: f32,

    /// Spatial frequency applied before sampling (cycles per meter)
    pub frequency: f32,

    /// Octave layering
    pub fractal: FractalParams,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            seed: 69,
            amplitude_m: 4.0,
            quad_size_m: 1.0,
            frequency: 0.05, // ~20m between hills
            fractal: FractalParams::default(),
        }
    }
}

impl TerrainParams {
    pub fn validate(&self) -> Result<()> {
        if !self.amplitude_m.is_finite() {
            return Err(TerrainError::InvalidAmplitude(self.amplitude_m));
        }
        if !(self.quad_size_m.is_finite() && self.quad_size_m > 0.0) {
            return Err(TerrainError::InvalidQuadSize(self.quad_size_m));
        }
        if !self.frequency.is_finite() {
            return Err(TerrainError::InvalidFrequency(self.frequency));
        }
        self.fractal.validate()
    }

    pub fn warp(&self) -> Result<ConstantScalarWarp> {
        ConstantScalarWarp::new(self.frequency)
    }

    pub fn noise(&self) -> Result<FractalNoise> {
        FractalNoise::from_params(self.seed, &self.fractal)
    }

    /// Baker sampling `fractal(frequency * p) * amplitude`.
    pub fn baker(&self) -> Result<HeightFieldBaker<ConstantScalarWarp, FractalNoise>> {
        self.validate()?;
        HeightFieldBaker::new(self.warp()?, self.noise()?, self.amplitude_m, self.quad_size_m)
    }
}
