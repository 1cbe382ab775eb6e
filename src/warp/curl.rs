//! Curl-of-noise warp: a divergence-free direction field derived from a
//! scalar noise by central finite differences.

use glam::{Vec2, Vec3, Vec4};

use super::Warp;
use crate::noise::Noise;

/// Central-difference step, in post-warp coordinate units.
pub const CURL_EPSILON: f32 = 1.0e-2;

/// Shift applied to the axes a potential component does not own, so the
/// three components sample uncorrelated regions of the same noise.
pub const DECORRELATION_OFFSET: f32 = 1000.0;

/// Applies `base_warp`, then returns the unit curl of `noise` at that point.
///
/// 2D uses the rotated gradient `(∂n/∂y, −∂n/∂x)`. 3D builds a vector
/// potential from three offset samples of `noise` and takes its curl. 4D
/// does the same over `xyz`, treating `w` as a passthrough sampling axis,
/// and returns `w = 0`.
///
/// Where the field is flat (zero gradient) the result is the zero vector.
#[derive(Debug, Clone, Copy)]
pub struct CurlWarp<W, N> {
    base_warp: W,
    noise: N,
}

impl<W, N> CurlWarp<W, N> {
    pub fn new(base_warp: W, noise: N) -> Self {
        Self { base_warp, noise }
    }

    pub fn base_warp(&self) -> &W {
        &self.base_warp
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }
}

impl<W: Warp<Vec2>, N: Noise<Vec2>> Warp<Vec2> for CurlWarp<W, N> {
    fn transform(&self, p: Vec2) -> Vec2 {
        let p = self.base_warp.transform(p);
        let hx = Vec2::new(CURL_EPSILON, 0.0);
        let hy = Vec2::new(0.0, CURL_EPSILON);

        let dn_dx =
            (self.noise.generate(p + hx) - self.noise.generate(p - hx)) / (2.0 * CURL_EPSILON);
        let dn_dy =
            (self.noise.generate(p + hy) - self.noise.generate(p - hy)) / (2.0 * CURL_EPSILON);

        Vec2::new(dn_dy, -dn_dx).normalize_or_zero()
    }
}

impl<W: Warp<Vec3>, N: Noise<Vec3>> Warp<Vec3> for CurlWarp<W, N> {
    fn transform(&self, p: Vec3) -> Vec3 {
        let p = self.base_warp.transform(p);

        let potential = |q: Vec3, component: usize| {
            let mut offset = Vec3::splat(DECORRELATION_OFFSET);
            offset[component] = 0.0;
            self.noise.generate(q + offset)
        };
        let partial = |component: usize, axis: usize| {
            let mut h = Vec3::ZERO;
            h[axis] = CURL_EPSILON;
            (potential(p + h, component) - potential(p - h, component)) / (2.0 * CURL_EPSILON)
        };

        curl(partial).normalize_or_zero()
    }
}

impl<W: Warp<Vec4>, N: Noise<Vec4>> Warp<Vec4> for CurlWarp<W, N> {
    fn transform(&self, p: Vec4) -> Vec4 {
        let p = self.base_warp.transform(p);

        let potential = |q: Vec4, component: usize| {
            let mut offset = Vec4::splat(DECORRELATION_OFFSET);
            offset[component] = 0.0;
            self.noise.generate(q + offset)
        };
        let partial = |component: usize, axis: usize| {
            let mut h = Vec4::ZERO;
            h[axis] = CURL_EPSILON;
            (potential(p + h, component) - potential(p - h, component)) / (2.0 * CURL_EPSILON)
        };

        curl(partial).normalize_or_zero().extend(0.0)
    }
}

/// Curl of a vector potential given its partial derivatives
/// `partial(component, axis) = ∂ψ_component / ∂axis`.
fn curl(partial: impl Fn(usize, usize) -> f32) -> Vec3 {
    Vec3::new(
        partial(2, 1) - partial(1, 2),
        partial(0, 2) - partial(2, 0),
        partial(1, 0) - partial(0, 1),
    )
}
