//! 3D double-precision vectors, plus spherical/Cartesian conversions used by
//! the geodesic engine.

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// A triple of `f64` components carrying an opaque integer patch id.
///
/// The patch id is not an algebraic quantity — it is not touched by dot
/// products, lengths, or normalization — it is only ever propagated through
/// binary operators from the left-hand operand. It exists so scene objects
/// that need to tag a vector (e.g. "which hemisphere patch did this point
/// land in") can do so without a side channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub e: [f64; 3],
    pub patch_id: u32,
}

pub type Point = Vec3;

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3 {
            e: [x, y, z],
            patch_id: 0,
        }
    }

    pub const fn with_patch(x: f64, y: f64, z: f64, patch_id: u32) -> Vec3 {
        Vec3 {
            e: [x, y, z],
            patch_id,
        }
    }

    pub fn x(&self) -> f64 {
        self.e[0]
    }

    pub fn y(&self) -> f64 {
        self.e[1]
    }

    pub fn z(&self) -> f64 {
        self.e[2]
    }

    pub fn dot(&self, rhs: &Vec3) -> f64 {
        self.e[0] * rhs.e[0] + self.e[1] * rhs.e[1] + self.e[2] * rhs.e[2]
    }

    pub fn cross(&self, rhs: &Vec3) -> Vec3 {
        Vec3::with_patch(
            self.e[1] * rhs.e[2] - self.e[2] * rhs.e[1],
            self.e[2] * rhs.e[0] - self.e[0] * rhs.e[2],
            self.e[0] * rhs.e[1] - self.e[1] * rhs.e[0],
            self.patch_id,
        )
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Normalizes `self` in place. Undefined (produces NaNs) for a zero
    /// vector — callers are responsible for not normalizing one.
    pub fn normalize_mut(&mut self) {
        let len = self.length();
        self.e[0] /= len;
        self.e[1] /= len;
        self.e[2] /= len;
    }

    /// Returns a normalized copy of `self`. Undefined for a zero vector.
    pub fn normalized(mut self) -> Vec3 {
        self.normalize_mut();
        self
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        &self.e[index]
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.e[index]
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::with_patch(-self.e[0], -self.e[1], -self.e[2], self.patch_id)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::with_patch(
            self.e[0] + rhs.e[0],
            self.e[1] + rhs.e[1],
            self.e[2] + rhs.e[2],
            self.patch_id,
        )
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::with_patch(
            self.e[0] - rhs.e[0],
            self.e[1] - rhs.e[1],
            self.e[2] - rhs.e[2],
            self.patch_id,
        )
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::with_patch(self.e[0] * rhs, self.e[1] * rhs, self.e[2] * rhs, self.patch_id)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;
    fn div(self, rhs: f64) -> Vec3 {
        self * (1.0 / rhs)
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Vec3::new(0.0, 0.0, 0.0)
    }
}

/// Converts a position given in spherical coordinates `(r, theta, phi)`
/// (theta = polar angle from +z, phi = azimuth from +x) to Cartesian.
pub fn spherical_to_cartesian(p: Vec3) -> Vec3 {
    let (r, theta, phi) = (p.x(), p.y(), p.z());
    Vec3::new(
        r * theta.sin() * phi.cos(),
        r * theta.sin() * phi.sin(),
        r * theta.cos(),
    )
}

/// Converts a Cartesian position to spherical coordinates `(r, theta, phi)`
/// with `phi` normalized into `[0, 2*PI)`.
pub fn cartesian_to_spherical(p: Vec3) -> Vec3 {
    let r = p.length();
    let rho = (p.x() * p.x() + p.y() * p.y()).sqrt();
    let theta = rho.atan2(p.z());
    let phi = p.y().atan2(p.x()) + std::f64::consts::PI;
    Vec3::new(r, theta, phi)
}
