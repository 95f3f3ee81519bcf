//! The geodesic engine contract: given a starting position and direction,
//! produce a lazy, piecewise-linear sequence of points along a (possibly
//! curved) path.

mod reissner;

pub use reissner::{ReissnerEngine, ReissnerPayload};

use crate::ray::{PixelTag, Ray};
use crate::vec3::Vec3;

/// A photon-propagation engine. `fire_ray` seeds a ray from a world-space
/// position and direction; `iterate_ray` advances one integration step.
///
/// Both methods take `&self`: they read the engine's fixed configuration
/// (step size, metric parameters, ...) but never mutate it, so the renderer
/// can call `iterate_ray` many thousands of times per pixel without engine
/// state getting in the way of the per-pixel scratch rays it owns locally.
/// Neither method can fail in the current engine set — numeric blow-up near
/// a coordinate singularity is the caller's responsibility to avoid (e.g. by
/// placing an absorbing sphere at the outer horizon).
pub trait Engine {
    /// Engine-private state attached to a ray (velocity, conserved
    /// quantities, ...). Opaque to everything except the engine that
    /// produced it.
    type Payload: Copy;

    fn fire_ray(&self, pos: Vec3, dir: Vec3, pixel: PixelTag) -> Ray<Self::Payload>;

    fn iterate_ray(&self, step: u32, current: &Ray<Self::Payload>) -> Ray<Self::Payload>;
}
