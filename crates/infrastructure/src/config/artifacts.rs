//! Model artifact locations.

use serde::{Deserialize, Serialize};

/// Where the four fitted artifacts come from and where they are cached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactsAppConfig {
    /// Directory holding the artifact files
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Download URL for `imputer.json`
    #[serde(default)]
    pub imputer_url: Option<String>,

    /// Download URL for `scaler.json`
    #[serde(default)]
    pub scaler_url: Option<String>,

    /// Download URL for `encoder.json`
    #[serde(default)]
    pub encoder_url: Option<String>,

    /// Download URL for `model.json`
    #[serde(default)]
    pub model_url: Option<String>,

    /// Timeout for each download in seconds
    #[serde(default = "default_download_timeout")]
    pub download_timeout_secs: u64,
}

fn default_dir() -> String {
    ".".to_string()
}

const fn default_download_timeout() -> u64 {
    60
}

impl Default for ArtifactsAppConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            imputer_url: None,
            scaler_url: None,
            encoder_url: None,
            model_url: None,
            download_timeout_secs: default_download_timeout(),
        }
    }
}
