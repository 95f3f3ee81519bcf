use crate::color::Color;
use crate::hit::{HitTestResult, SceneObject};
use crate::utils::PI;
use crate::vec3::{cartesian_to_spherical, Vec3};

/// A sphere checkered into `theta_div` x `phi_div` patches of two colors.
pub struct StripedSphere {
    pub center: Vec3,
    pub radius: f64,
    pub color1: Color,
    pub color2: Color,
    pub phi_div: u32,
    pub theta_div: u32,
}

impl StripedSphere {
    pub fn new(
        center: Vec3,
        radius: f64,
        color1: Color,
        color2: Color,
        phi_div: u32,
        theta_div: u32,
    ) -> StripedSphere {
        StripedSphere {
            center,
            radius,
            color1,
            color2,
            phi_div,
            theta_div,
        }
    }

    fn checker_color(&self, theta: f64, phi: f64) -> Color {
        let theta_patch = PI / self.theta_div as f64;
        let phi_patch = 2.0 * PI / self.phi_div as f64;
        let i = (theta / theta_patch) as i64 & 1;
        let j = (phi / phi_patch) as i64 & 1;
        if (i ^ j) != 0 {
            self.color1
        } else {
            self.color2
        }
    }
}

impl SceneObject for StripedSphere {
    fn hit_test(&self, prev_pos: Vec3, next_pos: Vec3) -> HitTestResult {
        let pos1 = prev_pos - self.center;
        let pos2 = next_pos - self.center;

        let a = pos1.length_squared() + pos2.length_squared() - 2.0 * pos1.dot(&pos2);
        let b = 2.0 * (pos1.dot(&pos2) - pos1.length_squared());
        let c = pos1.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 || a == 0.0 {
            return HitTestResult::miss();
        }

        let l = (-b - discriminant.sqrt()) / (2.0 * a);
        if !(0.0..=1.0).contains(&l) {
            return HitTestResult::miss();
        }

        let hit_point = pos1 + (pos2 - pos1) * l;
        let spherical = cartesian_to_spherical(hit_point);
        let distance = l * (next_pos - prev_pos).length();

        HitTestResult::hit(self.checker_color(spherical.y(), spherical.z()), distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_division_is_always_one_color() {
        let sphere = StripedSphere::new(
            Vec3::new(0.0, 0.0, 0.0),
            1.0,
            Color::new(255, 0, 0),
            Color::new(0, 255, 0),
            1,
            1,
        );
        let samples = [
            (Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, 0.5)),
            (Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.5, 0.0, 0.0)),
            (Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.5, 0.0)),
        ];
        let mut seen = None;
        for (prev, next) in samples {
            let result = sphere.hit_test(prev, next);
            assert!(result.hit);
            if let Some(c) = seen {
                assert_eq!(c, result.color);
            }
            seen = Some(result.color);
        }
    }

    #[test]
    fn crossing_segment_reports_hit_within_segment() {
        let sphere = StripedSphere::new(
            Vec3::new(0.0, 0.0, 0.0),
            1.0,
            Color::new(255, 0, 0),
            Color::new(0, 0, 0),
            4,
            4,
        );
        let result = sphere.hit_test(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, 0.5));
        assert!(result.hit);
        assert!(result.distance > 0.0 && result.distance < 1.5);
    }

    #[test]
    fn segment_missing_sphere_reports_no_hit() {
        let sphere = StripedSphere::new(
            Vec3::new(0.0, 0.0, 0.0),
            1.0,
            Color::new(255, 0, 0),
            Color::new(0, 0, 0),
            4,
            4,
        );
        let result = sphere.hit_test(Vec3::new(5.0, 0.0, 0.0), Vec3::new(4.0, 0.0, 0.0));
        assert!(!result.hit);
    }
}
