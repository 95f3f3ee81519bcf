//! The ray-marcher: walks the geodesic one integration step at a time,
//! querying every scene object for a hit on the current segment.

use crate::camera::Camera;
use crate::color::{Color, ColorMixer};
use crate::engine::Engine;
use crate::hit::SceneObject;
use crate::ray::PixelTag;
use crate::scene::Scene;
use crate::screen::Screen;

/// Default per-pixel integration step cap (spec default: 10,000; callers
/// needing finer-grained lensing near a photon sphere may raise this to the
/// ~200,000 range).
pub const DEFAULT_MAX_STEPS: u32 = 10_000;

/// Drives one engine through the scene, pixel by pixel, scanline by
/// scanline. Owns the scene and rendering parameters; `Screen` and `Camera`
/// are supplied per call, matching their externally-owned, renderer-borrowed
/// lifetimes.
pub struct Renderer<E: Engine> {
    engine: E,
    scene: Scene,
    max_steps: u32,
    anti_alias: bool,
    background: Color,
    camera: Option<Camera>,
    render_y: u32,
}

impl<E: Engine> Renderer<E> {
    pub fn new(engine: E) -> Renderer<E> {
        Renderer {
            engine,
            scene: Scene::new(),
            max_steps: DEFAULT_MAX_STEPS,
            anti_alias: false,
            background: Color::default(),
            camera: None,
            render_y: 0,
        }
    }

    pub fn add_object(&mut self, object: Box<dyn SceneObject>) {
        self.scene.add_object(object);
    }

    pub fn set_max_steps(&mut self, max_steps: u32) {
        self.max_steps = max_steps;
    }

    pub fn set_anti_alias(&mut self, anti_alias: bool) {
        self.anti_alias = anti_alias;
    }

    /// Sets the color written for a pixel whose integration cap is exhausted
    /// without any object ever reporting a hit. Scenes that include an
    /// enclosing "sky" object never observe this; it exists for scenes that
    /// don't.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn anti_alias(&self) -> bool {
        self.anti_alias
    }

    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// Binds the camera for a fresh render pass and rewinds the row cursor.
    pub fn start_render(&mut self, camera: Camera) {
        self.camera = Some(camera);
        self.render_y = 0;
    }

    /// Rewinds the row cursor without rebinding the camera, for re-rendering
    /// the same frame (e.g. after `screen.clear()`).
    pub fn reset_render(&mut self) {
        self.render_y = 0;
    }

    /// Renders up to `rows` additional scanlines into `screen`. Returns
    /// `true` if rows remain, `false` once the image is complete. Safe to
    /// call repeatedly; progress is monotonic.
    pub fn step_render(&mut self, screen: &mut Screen, rows: u32) -> bool {
        let (width, height) = (screen.width(), screen.height());
        let mut remaining = rows;
        while self.render_y < height && remaining > 0 {
            for x in 0..width {
                let color = self.calculate_pixel(x, self.render_y, width, height);
                screen.set_pixel(x, self.render_y, color);
            }
            self.render_y += 1;
            remaining -= 1;
        }
        self.render_y < height
    }

    fn calculate_pixel(&self, x: u32, y: u32, width: u32, height: u32) -> Color {
        let a = x as f64 / width as f64 - 0.5;
        let b = 0.5 - y as f64 / height as f64;

        if !self.anti_alias {
            return self.calculate_point(x, y, a, b);
        }

        let (da, db) = (0.25 / width as f64, 0.25 / height as f64);
        let mut mixer = ColorMixer::new();
        mixer.add_sample(self.calculate_point(x, y, a - da, b - db));
        mixer.add_sample(self.calculate_point(x, y, a - da, b + db));
        mixer.add_sample(self.calculate_point(x, y, a + da, b + db));
        mixer.add_sample(self.calculate_point(x, y, a + da, b - db));
        mixer.finish()
    }

    /// Fires a ray for pixel `(x, y)` at image coordinates `(a, b)` and walks
    /// it against the scene until a hit, or until `max_steps` is exhausted.
    ///
    /// `prev`/`next` below are the two-slot sliding window spec.md describes:
    /// plain stack locals reused step to step, since `Ray<E::Payload>` is
    /// plain-old-data and the engine itself holds no mutable per-ray state.
    fn calculate_point(&self, x: u32, y: u32, a: f64, b: f64) -> Color {
        let camera = self
            .camera
            .as_ref()
            .expect("calculate_point called before start_render");
        let pixel = PixelTag { x, y };
        let dir = camera.ray_direction(a, b);

        let mut prev = self.engine.fire_ray(camera.pos, dir, pixel);
        let mut next = self.engine.iterate_ray(0, &prev);

        for step in 0..self.max_steps {
            let mut best: Option<(Color, f64)> = None;
            for object in self.scene.objects() {
                let result = object.hit_test(prev.pos, next.pos);
                let is_closer = match best {
                    Some((_, d)) => result.distance < d,
                    None => true,
                };
                if result.hit && is_closer {
                    best = Some((result.color, result.distance));
                }
            }
            if let Some((color, _)) = best {
                return color;
            }
            let advanced = self.engine.iterate_ray(step, &next);
            prev = next;
            next = advanced;
        }

        self.background
    }
}
