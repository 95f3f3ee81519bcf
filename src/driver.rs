//! The ambient driver loop wrapping a [`Renderer`]: a cooperative,
//! scanline-granularity pass/quit loop, plus frame-level parallelism across
//! independent renders.

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::camera::Camera;
use crate::engine::Engine;
use crate::renderer::Renderer;
use crate::screen::Screen;

/// Wraps a [`Renderer`] with the quit flag and pass/continuation loop that
/// a driving program (a windowed UI, a batch animation exporter, ...) needs.
///
/// The renderer itself stays single-threaded and cooperative; `run` only
/// ever yields control back to its caller between scanlines, matching
/// `stepRender`'s suspension points.
pub struct RenderDriver<E: Engine> {
    renderer: Renderer<E>,
    quit: AtomicBool,
}

impl<E: Engine> RenderDriver<E> {
    pub fn new(renderer: Renderer<E>) -> RenderDriver<E> {
        RenderDriver {
            renderer,
            quit: AtomicBool::new(false),
        }
    }

    pub fn renderer(&self) -> &Renderer<E> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer<E> {
        &mut self.renderer
    }

    /// Sets the quit flag. Safe to call from another thread (e.g. a UI
    /// event loop) while `run` is in progress; observed with relaxed
    /// ordering, same as the core's treatment of cancellation.
    pub fn request_quit(&self) {
        self.quit.store(true, Ordering::Relaxed);
    }

    pub fn has_quit(&self) -> bool {
        self.quit.load(Ordering::Relaxed)
    }

    /// Runs the driver loop to completion, calling `on_dirty` after every
    /// scanline and `on_done` between passes. `on_done` returning `false`
    /// (or the quit flag being set) ends the loop; returning `true` starts
    /// another pass over the same camera after `reset_render`, which is how
    /// an `onDone` callback that mutates scene parameters drives an
    /// animation loop one frame at a time.
    pub fn run(
        &mut self,
        screen: &mut Screen,
        camera: Camera,
        mut on_dirty: impl FnMut(&Screen),
        mut on_done: impl FnMut() -> bool,
    ) {
        self.renderer.start_render(camera);
        loop {
            while !self.has_quit() && self.renderer.step_render(screen, 1) {
                on_dirty(screen);
            }
            self.renderer.reset_render();
            if self.has_quit() || !on_done() {
                break;
            }
        }
    }
}

/// Renders a batch of independent frames concurrently. Parallelism is at
/// the frame level, not the pixel level: each frame's `Renderer` runs to
/// completion single-threaded on its own worker, preserving `stepRender`'s
/// determinism within a frame while using all cores across frames.
///
/// `build` is called once per frame (on the worker that renders it) to
/// produce a fresh `Renderer`, the `Camera` to bind, and the output
/// dimensions; this keeps per-frame scene construction local to its worker
/// rather than requiring every frame's scene up front.
pub fn render_frames_parallel<E, F>(frame_count: usize, build: F) -> Vec<Screen>
where
    E: Engine,
    F: Fn(usize) -> (Renderer<E>, Camera, u32, u32) + Sync,
{
    (0..frame_count)
        .into_par_iter()
        .map(|frame| {
            let (mut renderer, camera, width, height) = build(frame);
            let mut screen = Screen::new(width, height);
            renderer.start_render(camera);
            while renderer.step_render(&mut screen, height) {}
            screen
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::engine::ReissnerEngine;
    use crate::objects::Sphere;
    use crate::vec3::Vec3;

    fn flat_camera(ratio: f64) -> Camera {
        Camera::new(
            Vec3::new(7.0, std::f64::consts::FRAC_PI_2, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            90.0,
            ratio,
        )
    }

    fn sky_renderer() -> Renderer<ReissnerEngine> {
        let mut renderer = Renderer::new(ReissnerEngine::new(0.0, 0.0, 0.01, 1.0));
        renderer.add_object(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, 0.0),
            10.0,
            Color::new(50, 50, 50),
        )));
        renderer
    }

    #[test]
    fn run_completes_single_pass_without_quit() {
        let mut driver = RenderDriver::new(sky_renderer());
        let mut screen = Screen::new(8, 8);
        let mut dirty_calls = 0;
        driver.run(
            &mut screen,
            flat_camera(1.0),
            |_| dirty_calls += 1,
            || false,
        );
        assert_eq!(dirty_calls, 8);
        assert!(!driver.has_quit());
        for pixel in screen.pixels() {
            assert_eq!(*pixel, Color::new(50, 50, 50));
        }
    }

    #[test]
    fn run_stops_immediately_when_quit_is_set_first() {
        let mut driver = RenderDriver::new(sky_renderer());
        driver.request_quit();
        let mut screen = Screen::new(4, 4);
        let mut dirty_calls = 0;
        driver.run(&mut screen, flat_camera(1.0), |_| dirty_calls += 1, || true);
        assert_eq!(dirty_calls, 0);
    }

    #[test]
    fn run_repeats_passes_while_on_done_returns_true() {
        let mut driver = RenderDriver::new(sky_renderer());
        let mut screen = Screen::new(4, 4);
        let mut passes = 0;
        driver.run(
            &mut screen,
            flat_camera(1.0),
            |_| {},
            || {
                passes += 1;
                passes < 3
            },
        );
        assert_eq!(passes, 3);
    }

    #[test]
    fn render_frames_parallel_renders_each_frame_independently() {
        let screens = render_frames_parallel(3, |frame| {
            let mut renderer = Renderer::new(ReissnerEngine::new(0.0, 0.0, 0.01, 1.0));
            let shade = 50 + frame as u8 * 10;
            renderer.add_object(Box::new(Sphere::new(
                Vec3::new(0.0, 0.0, 0.0),
                10.0,
                Color::new(shade, shade, shade),
            )));
            (renderer, flat_camera(1.0), 6, 6)
        });

        assert_eq!(screens.len(), 3);
        for (frame, screen) in screens.iter().enumerate() {
            let shade = 50 + frame as u8 * 10;
            for pixel in screen.pixels() {
                assert_eq!(*pixel, Color::new(shade, shade, shade));
            }
        }
    }
}
