//! The Reissner–Nordström engine: integrates null geodesics of a charged,
//! spherically symmetric spacetime.
//!
//! ```text
//! ds^2 = -(1 - rg/r + rq^2/r^2) dt^2 + dr^2 / (1 - rg/r + rq^2/r^2)
//!        + r^2 (d(theta)^2 + sin^2(theta) d(phi)^2)
//! ```

use super::Engine;
use crate::ray::{PixelTag, Ray};
use crate::vec3::{spherical_to_cartesian, Vec3};

/// Engine-private state carried on a Reissner ray: its Cartesian velocity and
/// the conserved quantity `C = |pos x v|^2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReissnerPayload {
    pub velocity: Vec3,
    pub conserved: f64,
}

/// A Reissner–Nordström geodesic engine.
///
/// `rg` is the gravitational radius, `rq` is the charge radius (stored
/// squared), `d_lambda` is the affine step, `omega` is a speed scale applied
/// to the initial local-frame direction.
pub struct ReissnerEngine {
    rg: f64,
    rq2: f64,
    d_lambda: f64,
    omega: f64,
}

impl ReissnerEngine {
    pub fn new(rg: f64, rq: f64, d_lambda: f64, omega: f64) -> ReissnerEngine {
        ReissnerEngine {
            rg,
            rq2: rq * rq,
            d_lambda,
            omega,
        }
    }

    pub fn rg(&self) -> f64 {
        self.rg
    }

    pub fn rq2(&self) -> f64 {
        self.rq2
    }

    /// The outer horizon radius `r+ = (rg + sqrt(rg^2 - 4*rq^2)) / 2`, or
    /// `0.0` when the discriminant is negative (no horizon for this charge).
    pub fn outer_horizon(&self) -> f64 {
        let discriminant = self.rg * self.rg - 4.0 * self.rq2;
        if discriminant < 0.0 {
            0.0
        } else {
            (self.rg + discriminant.sqrt()) / 2.0
        }
    }
}

impl Engine for ReissnerEngine {
    type Payload = ReissnerPayload;

    /// `pos` is a position in spherical coordinates `(r, theta, phi)`; `dir`
    /// is a direction in the local orthonormal frame `(e_r, e_theta, e_phi)`.
    fn fire_ray(&self, pos: Vec3, dir: Vec3, pixel: PixelTag) -> Ray<ReissnerPayload> {
        let (r, theta, phi) = (pos.x(), pos.y(), pos.z());
        let (ct, st) = (theta.cos(), theta.sin());
        let (cp, sp) = (phi.cos(), phi.sin());
        let f = (1.0 - self.rg / r + self.rq2 / (r * r)).sqrt();

        let (d_r, d_theta, d_phi) = (dir.x(), dir.y(), dir.z());
        let velocity = Vec3::new(
            -d_r * sp - (d_phi * ct + d_theta * f * st) * cp,
            d_r * cp - (d_phi * ct + d_theta * f * st) * sp,
            d_phi * st - d_theta * f * ct,
        ) * self.omega;

        let cartesian_pos = spherical_to_cartesian(pos);
        let conserved = cartesian_pos.cross(&velocity).length_squared();

        Ray::new(
            pixel,
            cartesian_pos,
            ReissnerPayload {
                velocity,
                conserved,
            },
        )
    }

    fn iterate_ray(&self, _step: u32, current: &Ray<ReissnerPayload>) -> Ray<ReissnerPayload> {
        let r = current.pos.length();
        let ddr = current.payload.conserved / (r * r * r * r)
            * (-1.5 * self.rg + 2.0 * self.rq2 / r);
        let radial = current.pos / r;

        let velocity = current.payload.velocity + radial * ddr * self.d_lambda;
        let pos = current.pos + current.payload.velocity * self.d_lambda;

        Ray::new(
            current.pixel,
            pos,
            ReissnerPayload {
                velocity,
                conserved: current.payload.conserved,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_space_is_straight_line() {
        let engine = ReissnerEngine::new(0.0, 0.0, 0.01, 1.0);
        let pixel = PixelTag { x: 0, y: 0 };
        let start = engine.fire_ray(Vec3::new(7.0, std::f64::consts::FRAC_PI_2, 0.0), Vec3::new(0.0, 1.0, 0.0), pixel);

        let v0 = start.payload.velocity;
        let p0 = start.pos;
        let mut current = start;
        for step in 0..50 {
            current = engine.iterate_ray(step, &current);
        }
        let expected = p0 + v0 * (0.01 * 50.0);
        assert!((current.pos.x() - expected.x()).abs() < 1e-9);
        assert!((current.pos.y() - expected.y()).abs() < 1e-9);
        assert!((current.pos.z() - expected.z()).abs() < 1e-9);
    }

    #[test]
    fn conserved_quantity_matches_cross_product_at_fire() {
        let engine = ReissnerEngine::new(0.5, 0.2, 0.01, 1.0);
        let pixel = PixelTag { x: 1, y: 1 };
        let ray = engine.fire_ray(
            Vec3::new(5.0, 1.1, 0.4),
            Vec3::new(0.1, 0.9, 0.2),
            pixel,
        );
        let cross_len2 = ray.pos.cross(&ray.payload.velocity).length_squared();
        assert!((ray.payload.conserved - cross_len2).abs() < 1e-9);
    }

    #[test]
    fn conserved_quantity_is_approximately_preserved() {
        let engine = ReissnerEngine::new(0.5, 0.1, 0.001, 1.0);
        let pixel = PixelTag { x: 0, y: 0 };
        let mut ray = engine.fire_ray(
            Vec3::new(5.0, std::f64::consts::FRAC_PI_2, 0.0),
            Vec3::new(0.0, 0.3, 0.95),
            pixel,
        );
        let c0 = ray.payload.conserved;
        for step in 0..200 {
            ray = engine.iterate_ray(step, &ray);
        }
        let c_now = ray.pos.cross(&ray.payload.velocity).length_squared();
        assert!((c_now - c0).abs() / c0 < 1e-2);
    }

    #[test]
    fn outer_horizon_matches_formula() {
        // rg = 0.5, rq = 0.2 => rq^2 = 0.04, discriminant = 0.25 - 0.16 = 0.09.
        let engine = ReissnerEngine::new(0.5, 0.2, 0.01, 1.0);
        let expected = (0.5 + 0.09f64.sqrt()) / 2.0;
        assert!((engine.outer_horizon() - expected).abs() < 1e-12);
    }

    #[test]
    fn outer_horizon_is_zero_when_overcharged() {
        // rq^2 > rg^2 / 4 has no real horizon.
        let engine = ReissnerEngine::new(0.5, 1.0, 0.01, 1.0);
        assert_eq!(engine.outer_horizon(), 0.0);
    }
}
