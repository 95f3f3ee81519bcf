use crate::color::Color;
use crate::hit::{HitTestResult, SceneObject};
use crate::utils::PI;
use crate::vec3::Vec3;

/// A flat annulus lying in the object's equatorial (z = 0) plane, checkered
/// into `div` angular wedges of two colors.
pub struct Disc {
    pub center: Vec3,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub color1: Color,
    pub color2: Color,
    pub div: u32,
}

impl Disc {
    pub fn new(
        center: Vec3,
        inner_radius: f64,
        outer_radius: f64,
        color1: Color,
        color2: Color,
        div: u32,
    ) -> Disc {
        Disc {
            center,
            inner_radius,
            outer_radius,
            color1,
            color2,
            div,
        }
    }
}

impl SceneObject for Disc {
    fn hit_test(&self, prev_pos: Vec3, next_pos: Vec3) -> HitTestResult {
        let p1 = prev_pos - self.center;
        let p2 = next_pos - self.center;

        if (p1.z() > 0.0) == (p2.z() > 0.0) {
            return HitTestResult::miss();
        }

        let l = p1.z() / (p1.z() - p2.z());
        let p = p1 + (p2 - p1) * l;
        let radius = (p.x() * p.x() + p.y() * p.y()).sqrt();

        if radius <= self.inner_radius || radius >= self.outer_radius {
            return HitTestResult::miss();
        }

        let wedge = (((p.y().atan2(p.x()) + PI) / (2.0 * PI / self.div as f64)) as i64) & 1;
        let color = if wedge != 0 { self.color1 } else { self.color2 };
        let distance = l * (next_pos - prev_pos).length();

        HitTestResult::hit(color, distance)
    }
}
