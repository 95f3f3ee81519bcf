use crate::color::Color;
use crate::hit::{HitTestResult, SceneObject};
use crate::utils::PI;
use crate::vec3::{cartesian_to_spherical, Vec3};
use image::{ImageResult, RgbaImage};

/// A sphere textured with an equirectangularly-mapped bitmap, sampled with
/// bilinear interpolation.
pub struct TexturedSphere {
    pub center: Vec3,
    pub radius: f64,
    pub phase: f64,
    texture: RgbaImage,
}

impl TexturedSphere {
    pub fn new(center: Vec3, radius: f64, phase: f64, texture: RgbaImage) -> TexturedSphere {
        TexturedSphere {
            center,
            radius,
            phase,
            texture,
        }
    }

    /// Loads the texture bitmap from disk. A missing or unreadable file is a
    /// hard error surfaced by the `image` crate's loader, propagated as-is.
    pub fn from_path(
        center: Vec3,
        radius: f64,
        phase: f64,
        path: impl AsRef<std::path::Path>,
    ) -> ImageResult<TexturedSphere> {
        let texture = image::open(path)?.to_rgba8();
        Ok(TexturedSphere::new(center, radius, phase, texture))
    }

    /// Samples the texture at equirectangular coordinates derived from
    /// `theta`/`phi`, bilinearly interpolating the four surrounding texels.
    ///
    /// The interpolation accumulates in `f64`, not an unsigned integer
    /// accumulator, so a negative intermediate term never wraps.
    fn sample(&self, theta: f64, phi: f64) -> Color {
        let (width, height) = (self.texture.width(), self.texture.height());
        let mut phi_wrapped = (phi + self.phase) % (2.0 * PI);
        if phi_wrapped < 0.0 {
            phi_wrapped += 2.0 * PI;
        }

        let u = phi_wrapped * width as f64 / (2.0 * PI);
        let v = (1.0 - theta.cos()) / 2.0 * height as f64;

        let x0 = u.floor() as i64;
        let y0 = v.floor() as i64;
        let fx = u - x0 as f64;
        let fy = v - y0 as f64;

        let wrap_x = |x: i64| -> u32 { x.rem_euclid(width as i64) as u32 };
        let clamp_y = |y: i64| -> u32 { y.clamp(0, height as i64 - 1) as u32 };

        let texel = |x: i64, y: i64| -> [f64; 4] {
            let p = self.texture.get_pixel(wrap_x(x), clamp_y(y));
            [p[0] as f64, p[1] as f64, p[2] as f64, p[3] as f64]
        };

        let t00 = texel(x0, y0);
        let t10 = texel(x0 + 1, y0);
        let t01 = texel(x0, y0 + 1);
        let t11 = texel(x0 + 1, y0 + 1);

        let mut out = [0.0f64; 4];
        for c in 0..4 {
            let top = t00[c] * (1.0 - fx) + t10[c] * fx;
            let bottom = t01[c] * (1.0 - fx) + t11[c] * fx;
            out[c] = (top * (1.0 - fy) + bottom * fy).round().clamp(0.0, 255.0);
        }

        Color::rgba(out[0] as u8, out[1] as u8, out[2] as u8, out[3] as u8)
    }
}

impl SceneObject for TexturedSphere {
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

        HitTestResult::hit(self.sample(spherical.y(), spherical.z()), distance)
    }
}
