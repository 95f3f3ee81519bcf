use crate::color::Color;
use crate::hit::{HitTestResult, SceneObject};
use crate::vec3::Vec3;

/// A solid sphere of uniform color.
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    pub color: Color,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64, color: Color) -> Sphere {
        Sphere {
            center,
            radius,
            color,
        }
    }
}

impl SceneObject for Sphere {
    fn hit_test(&self, prev_pos: Vec3, next_pos: Vec3) -> HitTestResult {
        let r1 = (prev_pos - self.center).length();
        let r2 = (next_pos - self.center).length();

        if r1 < self.radius && r2 > self.radius {
            HitTestResult::hit(self.color, self.radius - r1)
        } else if r1 > self.radius && r2 < self.radius {
            HitTestResult::hit(self.color, r1 - self.radius)
        } else {
            HitTestResult::miss()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_crossing_sphere_reports_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 0.0), 1.0, Color::new(255, 0, 0));
        let prev = Vec3::new(0.0, 0.0, 2.0);
        let next = Vec3::new(0.0, 0.0, 0.5);
        let result = sphere.hit_test(prev, next);
        assert!(result.hit);
        assert!((result.distance - 1.0).abs() < 1e-9);
    }

    #[test]
    fn segment_entirely_outside_misses() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 0.0), 1.0, Color::new(255, 0, 0));
        let result = sphere.hit_test(Vec3::new(5.0, 0.0, 0.0), Vec3::new(4.0, 0.0, 0.0));
        assert!(!result.hit);
    }

    #[test]
    fn hit_symmetry_on_endpoint_swap() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 0.0), 1.0, Color::new(0, 255, 0));
        let prev = Vec3::new(0.0, 0.0, 3.0);
        let next = Vec3::new(0.0, 0.0, 0.5);
        let forward = sphere.hit_test(prev, next);
        let backward = sphere.hit_test(next, prev);
        assert!(forward.hit && backward.hit);
        let segment_len = (next - prev).length();
        assert!((backward.distance - (segment_len - forward.distance)).abs() < 1e-9);
    }
}
