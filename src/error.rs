//! Construction-time errors for noise generators, warps and terrain bakes.

/// Invalid configuration detected before any sampling happens.
///
/// Every variant is deterministic: re-running with the same inputs fails the
/// same way, so callers should surface these instead of retrying.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TerrainError {
    #[error("fractal noise needs at least one octave")]
    ZeroOctaves,

    #[error("fractal gain must be finite, got {0}")]
    InvalidGain(f32),

    #[error("fractal lacunarity must be finite, got {0}")]
    InvalidLacunarity(f32),

    #[error("fractal weighted strength must be finite, got {0}")]
    InvalidWeightedStrength(f32),

    #[error("fractal bounding is degenerate for {octaves} octaves with gain {gain}")]
    DegenerateBounding { octaves: u32, gain: f32 },

    #[error("lacunarity {lacunarity} overflows f32 by octave {octaves}")]
    LacunarityOverflow { octaves: u32, lacunarity: f32 },

    #[error("warp frequency must be finite, got {0}")]
    InvalidFrequency(f32),

    #[error("quad size must be finite and positive, got {0}")]
    InvalidQuadSize(f32),

    #[error("amplitude must be finite, got {0}")]
    InvalidAmplitude(f32),

    #[error("terrain patch needs at least one quad")]
    EmptyPatch,
}

pub type Result<T> = std::result::Result<T, TerrainError>;
