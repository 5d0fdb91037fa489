use crate::error::RenderError;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

/// Render parameters, loaded once at process start and immutable for the lifetime of a render.
/// Layered: built-in defaults, then an optional `configuration/base.yaml`, then environment
/// variables prefixed `EMBER_` (e.g. `EMBER_SAMPLES=200`).
#[derive(Deserialize, Clone, Debug)]
pub struct RenderSettings {
    pub scene: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub samples: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub bucket_size: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub workers: usize,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub width: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub height: u32,
    pub output_path: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            scene: "final".to_string(),
            samples: 10_000,
            bucket_size: 32,
            workers: 4,
            width: 800,
            height: 800,
            output_path: "render.ppm".to_string(),
        }
    }
}

/// Loads render parameters from the default, the optional `configuration/base.yaml` file
/// relative to the current directory, and `EMBER_`-prefixed environment variables, in that
/// layering order (later sources win).
pub fn load_configuration() -> Result<RenderSettings, RenderError> {
    let defaults = RenderSettings::default();
    let base_path = std::env::current_dir().unwrap_or_default();
    let configuration_directory = base_path.join("configuration");

    let settings = config::Config::builder()
        .set_default("scene", defaults.scene)?
        .set_default("samples", defaults.samples as i64)?
        .set_default("bucket_size", defaults.bucket_size as i64)?
        .set_default("workers", defaults.workers as i64)?
        .set_default("width", defaults.width as i64)?
        .set_default("height", defaults.height as i64)?
        .set_default("output_path", defaults.output_path)?
        .add_source(
            config::File::from(configuration_directory.join("base.yaml")).required(false),
        )
        .add_source(config::Environment::with_prefix("EMBER"))
        .build()?;

    settings
        .try_deserialize::<RenderSettings>()
        .map_err(RenderError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_satisfy_spec() {
        let defaults = RenderSettings::default();
        assert_eq!(defaults.scene, "final");
        assert_eq!(defaults.samples, 10_000);
        assert_eq!(defaults.bucket_size, 32);
        assert_eq!(defaults.workers, 4);
    }
}
