//! Fractal Brownian motion over Perlin octaves.

use super::{lerp, Coord, Noise};
use crate::error::{Result, TerrainError};
use crate::params::FractalParams;

/// Sum of `octaves` Perlin layers at rising frequency and falling amplitude.
///
/// Octave `i` samples seed `seed + i` (wrapping) at `p * lacunarity^i`. The
/// first amplitude is the precomputed fractal bounding `1 / Σ|gain|^i`, which
/// keeps the unweighted sum inside roughly [-1, 1] for any octave count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalNoise {
    seed: u32,
    octaves: u32,
    lacunarity: f32,
    gain: f32,
    weighted_strength: f32,
    fractal_bounding: f32,
}

impl FractalNoise {
    /// Create a fractal generator, rejecting configurations that would
    /// produce NaN or infinite output.
    pub fn new(
        seed: u32,
        octaves: u32,
        lacunarity: f32,
        gain: f32,
        weighted_strength: f32,
    ) -> Result<Self> {
        if octaves == 0 {
            return Err(TerrainError::ZeroOctaves);
        }
        if !gain.is_finite() {
            return Err(TerrainError::InvalidGain(gain));
        }
        if !lacunarity.is_finite() {
            return Err(TerrainError::InvalidLacunarity(lacunarity));
        }
        if !weighted_strength.is_finite() {
            return Err(TerrainError::InvalidWeightedStrength(weighted_strength));
        }

        let fractal_bounding = fractal_bounding(octaves, gain);
        if !fractal_bounding.is_finite() || fractal_bounding <= 0.0 {
            return Err(TerrainError::DegenerateBounding { octaves, gain });
        }

        // Last octave samples at p * lacunarity^(octaves - 1)
        let last_octave = i32::try_from(octaves - 1).unwrap_or(i32::MAX);
        if !lacunarity.abs().powi(last_octave).is_finite() {
            return Err(TerrainError::LacunarityOverflow {
                octaves,
                lacunarity,
            });
        }

        Ok(Self {
            seed,
            octaves,
            lacunarity,
            gain,
            weighted_strength,
            fractal_bounding,
        })
    }

    pub fn from_params(seed: u32, params: &FractalParams) -> Result<Self> {
        Self::new(
            seed,
            params.octaves,
            params.lacunarity,
            params.gain,
            params.weighted_strength,
        )
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Amplitude of the first octave.
    pub fn fractal_bounding(&self) -> f32 {
        self.fractal_bounding
    }
}

fn fractal_bounding(octaves: u32, gain: f32) -> f32 {
    let gain = gain.abs();
    let mut amp = gain;
    let mut amp_fractal = 1.0;
    for _ in 1..octaves {
        amp_fractal += amp;
        amp *= gain;
    }
    1.0 / amp_fractal
}

impl<P: Coord> Noise<P> for FractalNoise {
    fn generate(&self, p: P) -> f32 {
        let mut p = p;
        let mut seed = self.seed as i32;
        let mut sum = 0.0;
        let mut amp = self.fractal_bounding;

        for _ in 0..self.octaves {
            let noise = p.perlin(seed);
            seed = seed.wrapping_add(1);

            sum += noise * amp;
            amp *= lerp(1.0, (noise + 1.0).clamp(0.0, 2.0) * 0.5, self.weighted_strength);

            p = p * self.lacunarity;
            amp *= self.gain;
        }

        sum
    }
}
