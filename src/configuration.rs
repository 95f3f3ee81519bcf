//! Scene/render settings loaded from a YAML configuration file via `config`
//! and `serde`, mirroring the layered `ImageSettings` pattern: a raw
//! `#[derive(Deserialize)]` struct with string-tolerant numeric fields, and
//! a derived public struct that fills in computed values (here, pixel
//! width from height and aspect ratio).

use config::ConfigError;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
struct RenderSettingsImpl {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    aspect_ratio: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    height: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    max_steps: u32,
    anti_alias: bool,

    #[serde(deserialize_with = "deserialize_number_from_string")]
    rg: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    rq: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    d_lambda: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    omega: f64,

    #[serde(deserialize_with = "deserialize_number_from_string")]
    fov_deg: f64,
    eye: [f64; 3],
    forward: [f64; 3],
    world_up: [f64; 3],

    #[serde(default)]
    background: Option<[u8; 3]>,
}

/// Fully resolved render settings: engine parameters, camera placement, and
/// the ray-marcher's limits, ready to construct a `ReissnerEngine`,
/// `Camera`, and `Renderer` from.
#[derive(Clone)]
pub struct RenderSettings {
    pub aspect_ratio: f64,
    pub width: u32,
    pub height: u32,
    pub max_steps: u32,
    pub anti_alias: bool,

    pub rg: f64,
    pub rq: f64,
    pub d_lambda: f64,
    pub omega: f64,

    /// Camera eye position, given in the same spherical `(r, theta, phi)`
    /// convention the engine's `fire_ray` expects.
    pub eye: [f64; 3],
    pub forward: [f64; 3],
    pub world_up: [f64; 3],
    pub fov_deg: f64,

    /// Written when a pixel's integration cap is exhausted without a hit;
    /// defaults to opaque black when absent from the file.
    pub background: [u8; 3],
}

impl RenderSettings {
    fn new(settings: RenderSettingsImpl) -> RenderSettings {
        RenderSettings {
            aspect_ratio: settings.aspect_ratio,
            width: (settings.height as f64 * settings.aspect_ratio) as u32,
            height: settings.height,
            max_steps: settings.max_steps,
            anti_alias: settings.anti_alias,
            rg: settings.rg,
            rq: settings.rq,
            d_lambda: settings.d_lambda,
            omega: settings.omega,
            eye: settings.eye,
            forward: settings.forward,
            world_up: settings.world_up,
            fov_deg: settings.fov_deg,
            background: settings.background.unwrap_or([0, 0, 0]),
        }
    }
}

/// Loads `configuration/base.yaml` under the current directory.
pub fn load_configuration() -> Result<RenderSettings, ConfigError> {
    load_configuration_from(
        std::env::current_dir()
            .expect("failed to determine the current directory")
            .join("configuration")
            .join("base.yaml"),
    )
}

/// Loads render settings from an explicit file path, for callers that don't
/// want the current-directory convention (e.g. tests, or an alternate scene
/// file per animation frame).
pub fn load_configuration_from(
    path: impl Into<std::path::PathBuf>,
) -> Result<RenderSettings, ConfigError> {
    let f = config::File::from(path.into());
    let settings = config::Config::builder().add_source(f).build()?;
    settings
        .try_deserialize::<RenderSettingsImpl>()
        .map(RenderSettings::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
aspect_ratio: "1.0"
height: "400"
max_steps: "10000"
anti_alias: false
rg: "0.5"
rq: "0.0"
d_lambda: "0.01"
omega: "1.0"
fov_deg: "90"
eye: [7.0, 1.5707963267948966, 0.0]
forward: [0.0, 1.0, 0.0]
world_up: [0.0, 0.0, 1.0]
"#;

    fn parse(yaml: &str) -> Result<RenderSettings, ConfigError> {
        let f = config::File::from_str(yaml, config::FileFormat::Yaml);
        let settings = config::Config::builder().add_source(f).build()?;
        settings
            .try_deserialize::<RenderSettingsImpl>()
            .map(RenderSettings::new)
    }

    #[test]
    fn width_is_derived_from_height_and_aspect_ratio() {
        let settings = parse(SAMPLE).expect("parse sample config");
        assert_eq!(settings.width, 400);
        assert_eq!(settings.height, 400);
        assert_eq!(settings.background, [0, 0, 0]);
    }

    #[test]
    fn string_encoded_numbers_are_tolerated() {
        let settings = parse(SAMPLE).expect("parse sample config");
        assert!((settings.rg - 0.5).abs() < 1e-12);
        assert_eq!(settings.max_steps, 10_000);
    }

    #[test]
    fn explicit_background_overrides_default() {
        let yaml = format!("{SAMPLE}\nbackground: [10, 20, 30]\n");
        let settings = parse(&yaml).expect("parse sample config with background");
        assert_eq!(settings.background, [10, 20, 30]);
    }
}
