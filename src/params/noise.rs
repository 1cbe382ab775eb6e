//! Fractal noise parameters.

use crate::error::Result;
use crate::noise::FractalNoise;

/// Octave layering for [`FractalNoise`]
#[derive(Debug, Clone, PartialEq)]
pub struct FractalParams {
    /// Number of Perlin layers (must be at least 1)
    pub octaves: u32,

    /// Frequency multiplier between octaves (dimensionless, typically 2.0)
    pub lacunarity: f32,

    /// Amplitude multiplier between octaves, a.k.a. persistence (typically 0.5)
    pub gain: f32,

    /// 0.0 = plain fBm; 1.0 = each octave damped by the previous octave's value
    pub weighted_strength: f32,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: 3,
            lacunarity: 2.0,
            gain: 0.5,
            weighted_strength: 0.0,
        }
    }
}

impl FractalParams {
    /// Validate by constructing a throwaway generator (the seed is irrelevant).
    pub fn validate(&self) -> Result<()> {
        FractalNoise::from_params(0, self).map(|_| ())
    }
}
