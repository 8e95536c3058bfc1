//! Model artifacts
//!
//! The four fitted artifacts live as JSON files in one directory. Missing
//! files are downloaded once by the [`ArtifactFetcher`], then the
//! [`ArtifactLoader`] reads all four into a `PredictionPipeline`.

mod fetcher;
mod loader;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use fetcher::{ArtifactFetcher, FetchOutcome, FetchReport};
pub use loader::ArtifactLoader;

use crate::config::ArtifactsAppConfig;

/// One of the four fitted artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Imputer,
    Scaler,
    Encoder,
    Model,
}

impl ArtifactKind {
    /// All kinds, in load order
    pub const ALL: [Self; 4] = [Self::Imputer, Self::Scaler, Self::Encoder, Self::Model];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Imputer => "imputer",
            Self::Scaler => "scaler",
            Self::Encoder => "encoder",
            Self::Model => "model",
        }
    }

    /// File name inside the artifacts directory
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Imputer => "imputer.json",
            Self::Scaler => "scaler.json",
            Self::Encoder => "encoder.json",
            Self::Model => "model.json",
        }
    }

    /// Flat environment variable holding the download URL
    #[must_use]
    pub const fn url_variable(&self) -> &'static str {
        match self {
            Self::Imputer => "IMPUTER_LINK",
            Self::Scaler => "SCALER_LINK",
            Self::Encoder => "ENCODER_LINK",
            Self::Model => "MODEL_LINK",
        }
    }

    /// Look up a kind by its name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where one artifact is downloaded from and stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSource {
    pub kind: ArtifactKind,
    pub url: Option<String>,
    pub path: PathBuf,
}

impl ArtifactSource {
    /// One source per kind from configuration
    #[must_use]
    pub fn all_from_config(config: &ArtifactsAppConfig) -> Vec<Self> {
        let paths = ArtifactPaths::in_dir(&config.dir);
        ArtifactKind::ALL
            .into_iter()
            .map(|kind| {
                let url = match kind {
                    ArtifactKind::Imputer => &config.imputer_url,
                    ArtifactKind::Scaler => &config.scaler_url,
                    ArtifactKind::Encoder => &config.encoder_url,
                    ArtifactKind::Model => &config.model_url,
                };
                Self {
                    kind,
                    url: url.clone().filter(|u| !u.trim().is_empty()),
                    path: paths.get(kind).to_path_buf(),
                }
            })
            .collect()
    }
}

/// Local file paths of the four artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub imputer: PathBuf,
    pub scaler: PathBuf,
    pub encoder: PathBuf,
    pub model: PathBuf,
}

impl ArtifactPaths {
    /// Default file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            imputer: dir.join(ArtifactKind::Imputer.file_name()),
            scaler: dir.join(ArtifactKind::Scaler.file_name()),
            encoder: dir.join(ArtifactKind::Encoder.file_name()),
            model: dir.join(ArtifactKind::Model.file_name()),
        }
    }

    #[must_use]
    pub fn get(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::Imputer => &self.imputer,
            ArtifactKind::Scaler => &self.scaler,
            ArtifactKind::Encoder => &self.encoder,
            ArtifactKind::Model => &self.model,
        }
    }
}

/// Artifact errors
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The file is not on disk
    #[error("{kind} artifact not found at {}", .path.display())]
    Missing { kind: ArtifactKind, path: PathBuf },

    /// The file exists but cannot be used
    #[error("{kind} artifact is corrupt: {reason}")]
    Corrupt { kind: ArtifactKind, reason: String },

    /// The download client could not be set up
    #[error("Artifact download failed: {0}")]
    Download(String),
}

impl ArtifactError {
    /// Kind of the artifact concerned, if any
    #[must_use]
    pub const fn kind(&self) -> Option<ArtifactKind> {
        match self {
            Self::Missing { kind, .. } | Self::Corrupt { kind, .. } => Some(*kind),
            Self::Download(_) => None,
        }
    }
}
