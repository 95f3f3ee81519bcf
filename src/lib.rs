mod camera;
mod color;
mod configuration;
mod driver;
mod engine;
mod hit;
mod ray;
mod renderer;
mod scene;
mod screen;
mod vec3;
pub mod objects;
pub mod utils;

pub use camera::Camera;
pub use color::{Color, ColorMixer, WideColor};
pub use configuration::{load_configuration, load_configuration_from, RenderSettings};
pub use driver::{render_frames_parallel, RenderDriver};
pub use engine::{Engine, ReissnerEngine, ReissnerPayload};
pub use hit::{HitTestResult, SceneObject};
pub use ray::{PixelTag, Ray};
pub use renderer::{Renderer, DEFAULT_MAX_STEPS};
pub use scene::Scene;
pub use screen::Screen;
pub use vec3::{cartesian_to_spherical, spherical_to_cartesian, Point, Vec3};
