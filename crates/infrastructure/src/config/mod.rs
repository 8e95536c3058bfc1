//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `integrations`: Weather provider and prediction settings
//! - `artifacts`: Model artifact locations
//!
//! Sources, later ones winning: built-in defaults, `config.toml`, the flat
//! variables `API_KEY` and `*_LINK` (from `.env`, then the process
//! environment), and finally `RAINCAST__SECTION__KEY` variables.

mod artifacts;
mod integrations;
mod server;

use std::collections::HashMap;
use std::path::Path;

use ::config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use artifacts::ArtifactsAppConfig;
pub use integrations::{PredictionConfig, WeatherAppConfig};
pub use server::{LogFormat, ServerConfig};

use crate::templates::TemplateConfig;

/// Prefix of structured environment overrides
pub const ENV_PREFIX: &str = "RAINCAST";

/// Flat variables and the setting each one feeds
const LEGACY_VARIABLES: [(&str, &str); 5] = [
    ("API_KEY", "weather__api_key"),
    ("IMPUTER_LINK", "artifacts__imputer_url"),
    ("SCALER_LINK", "artifacts__scaler_url"),
    ("ENCODER_LINK", "artifacts__encoder_url"),
    ("MODEL_LINK", "artifacts__model_url"),
];

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Artifact download and cache configuration
    #[serde(default)]
    pub artifacts: ArtifactsAppConfig,

    /// Prediction configuration
    #[serde(default)]
    pub prediction: PredictionConfig,

    /// Template configuration
    #[serde(default)]
    pub templates: TemplateConfig,
}

impl AppConfig {
    /// Load configuration from the working directory and process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is malformed or a value has the
    /// wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::load_from(Path::new("."), &env)
    }

    /// Load configuration from `dir` with an explicit environment
    ///
    /// `dir` is searched for `config.toml` and `.env`.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is malformed or a value has the
    /// wrong type.
    pub fn load_from(dir: &Path, env: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let legacy = legacy_variables(dir, env)?;

        let config = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .add_source(File::from(dir.join("config")).required(false))
            .add_source(Environment::default().separator("__").source(Some(legacy)))
            // e.g. RAINCAST__SERVER__PORT=8080
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(env.clone())),
            )
            .build()?;

        config.try_deserialize()
    }
}

/// Collect the flat variables, process environment over `.env`
fn legacy_variables(
    dir: &Path,
    env: &HashMap<String, String>,
) -> Result<HashMap<String, String>, ConfigError> {
    let dotenv = Config::builder()
        .add_source(File::from(dir.join(".env")).format(FileFormat::Ini).required(false))
        .build()?;

    let mut resolved = HashMap::new();
    for (variable, key) in LEGACY_VARIABLES {
        let value = env
            .get(variable)
            .cloned()
            .or_else(|| dotenv_value(&dotenv, variable));

        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            debug!(variable, "Using flat configuration variable");
            resolved.insert(key.to_string(), value);
        }
    }
    Ok(resolved)
}

fn dotenv_value(dotenv: &Config, variable: &str) -> Option<String> {
    dotenv
        .get_string(variable)
        .or_else(|_| dotenv.get_string(&variable.to_lowercase()))
        .ok()
        .map(|value| strip_inline_comment(&value).to_string())
}

/// Drop a trailing `# comment` from a `.env` value
///
/// A `#` only starts a comment at the start of the value or after
/// whitespace, so URL fragments survive.
fn strip_inline_comment(value: &str) -> &str {
    value
        .match_indices('#')
        .find(|(i, _)| *i == 0 || value[..*i].ends_with(char::is_whitespace))
        .map_or(value, |(i, _)| value[..i].trim_end())
}
