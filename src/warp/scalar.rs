use std::ops::Mul;

use super::Warp;
use crate::error::{Result, TerrainError};

/// Scales every coordinate by a fixed frequency.
///
/// Changes the spatial frequency of the sampled field without touching its
/// amplitude: `frequency = 0.1` stretches features ten times wider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantScalarWarp {
    frequency: f32,
}

impl ConstantScalarWarp {
    pub fn new(frequency: f32) -> Result<Self> {
        if !frequency.is_finite() {
            return Err(TerrainError::InvalidFrequency(frequency));
        }
        Ok(Self { frequency })
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }
}

impl<P: Mul<f32, Output = P>> Warp<P> for ConstantScalarWarp {
    fn transform(&self, p: P) -> P {
        p * self.frequency
    }
}
