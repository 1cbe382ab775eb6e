//! Coordinate pre-transforms applied before noise evaluation.

mod curl;
mod scalar;

use std::sync::Arc;

pub use curl::{CurlWarp, CURL_EPSILON, DECORRELATION_OFFSET};
pub use scalar::ConstantScalarWarp;

/// Maps a sample coordinate to the coordinate the noise is actually read at
pub trait Warp<P> {
    fn transform(&self, p: P) -> P;
}

impl<P, W: Warp<P> + ?Sized> Warp<P> for &W {
    fn transform(&self, p: P) -> P {
        (**self).transform(p)
    }
}

impl<P, W: Warp<P> + ?Sized> Warp<P> for Box<W> {
    fn transform(&self, p: P) -> P {
        (**self).transform(p)
    }
}

impl<P, W: Warp<P> + ?Sized> Warp<P> for Arc<W> {
    fn transform(&self, p: P) -> P {
        (**self).transform(p)
    }
}

/// Leaves coordinates untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityWarp;

impl<P> Warp<P> for IdentityWarp {
    fn transform(&self, p: P) -> P {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_identity_passthrough() {
        let p = Vec2::new(-3.5, 8.25);
        assert_eq!(IdentityWarp.transform(p), p);
    }

    #[test]
    fn test_boxed_warp() {
        let warp: Box<dyn Warp<Vec2> + Send + Sync> =
            Box::new(ConstantScalarWarp::new(0.5).unwrap());
        assert_eq!(warp.transform(Vec2::new(4.0, -2.0)), Vec2::new(2.0, -1.0));
    }
}
