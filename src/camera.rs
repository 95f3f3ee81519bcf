//! Pinhole camera: eye position plus a scaled image-plane basis.

use crate::vec3::Vec3;

/// A pinhole camera. `up` and `across` are pre-scaled so that for image
/// coordinates `(a, b)` in `[-0.5, 0.5]^2` the (un-normalized) ray direction
/// is `axis + across * a + up * b`.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub pos: Vec3,
    pub axis: Vec3,
    pub up: Vec3,
    pub across: Vec3,
    pub ratio: f64,
}

impl Camera {
    /// Builds a camera from a field-of-view half-angle `fov_deg` (full
    /// vertical field of view, in degrees), a forward direction `dir`, a
    /// world-up hint, an eye position, and the image `ratio` (width/height).
    pub fn new(pos: Vec3, dir: Vec3, up_hint: Vec3, fov_deg: f64, ratio: f64) -> Camera {
        let axis = dir.normalized();
        let a = (fov_deg / 2.0 * std::f64::consts::PI / 180.0).tan();
        let n = (up_hint - axis * axis.dot(&up_hint)).normalized();
        let up = n * a;
        let across = axis.cross(&n).normalized() * a * ratio;
        Camera {
            pos,
            axis,
            up,
            across,
            ratio,
        }
    }

    /// The un-normalized ray direction for image coordinates `(a, b)` in
    /// `[-0.5, 0.5]^2`.
    pub fn ray_direction(&self, a: f64, b: f64) -> Vec3 {
        (self.axis + self.across * a + self.up * b).normalized()
    }
}
