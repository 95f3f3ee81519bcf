//! The hit-test contract scene objects implement, operating on a segment of
//! the (possibly curved) geodesic rather than on a straight ray.

use crate::color::Color;
use crate::vec3::Vec3;

/// The outcome of testing one geodesic segment against one scene object.
///
/// `distance` is measured from the segment's start point and is only
/// meaningful when `hit` is true. When several objects report a hit on the
/// same segment, the smallest `distance` wins; ties are broken by scene-list
/// order (first object added wins).
#[derive(Debug, Clone, Copy, Default)]
pub struct HitTestResult {
    pub hit: bool,
    pub color: Color,
    pub distance: f64,
}

impl HitTestResult {
    pub fn miss() -> HitTestResult {
        HitTestResult::default()
    }

    pub fn hit(color: Color, distance: f64) -> HitTestResult {
        HitTestResult {
            hit: true,
            color,
            distance,
        }
    }
}

/// A scene primitive that can be hit-tested against a geodesic segment.
///
/// Implementations only ever need the segment's two Cartesian endpoints —
/// the renderer keeps engine-private ray state (velocity, conserved
/// quantities, ...) opaque to objects.
pub trait SceneObject: Send + Sync {
    fn hit_test(&self, prev_pos: Vec3, next_pos: Vec3) -> HitTestResult;
}
