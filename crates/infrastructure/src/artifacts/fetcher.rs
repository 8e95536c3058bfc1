//! Download-if-absent for artifact files

use std::path::Path;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};

use super::{ArtifactError, ArtifactKind, ArtifactSource};

/// What happened to one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The file was already on disk; no request was made
    AlreadyPresent,
    /// The file was downloaded and written
    Downloaded { bytes: usize },
    /// The download failed; the file was not created
    Failed { reason: String },
    /// No URL is configured and the file is absent
    MissingUrl,
}

impl FetchOutcome {
    /// Whether the file is on disk afterwards
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::AlreadyPresent | Self::Downloaded { .. })
    }
}

/// Outcome per artifact, in the order given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    outcomes: Vec<(ArtifactKind, FetchOutcome)>,
}

impl FetchReport {
    #[must_use]
    pub fn outcomes(&self) -> &[(ArtifactKind, FetchOutcome)] {
        &self.outcomes
    }

    #[must_use]
    pub fn outcome(&self, kind: ArtifactKind) -> Option<&FetchOutcome> {
        self.outcomes
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, outcome)| outcome)
    }

    /// True if every artifact is on disk
    #[must_use]
    pub fn all_available(&self) -> bool {
        self.outcomes.iter().all(|(_, o)| o.is_available())
    }

    /// Number of files downloaded by this run
    #[must_use]
    pub fn downloaded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, FetchOutcome::Downloaded { .. }))
            .count()
    }
}

/// Downloads artifacts that are not yet on disk
///
/// One GET per missing file, no retries. The whole body is read before
/// anything touches the filesystem, and the file is moved into place only
/// once fully written.
#[derive(Debug, Clone)]
pub struct ArtifactFetcher {
    client: Client,
}

impl ArtifactFetcher {
    /// Create a fetcher whose requests time out after `timeout`
    ///
    /// # Errors
    ///
    /// Returns `ArtifactError::Download` if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, ArtifactError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ArtifactError::Download(e.to_string()))?;
        Ok(Self { client })
    }

    /// Make sure every source is on disk, downloading what is missing
    ///
    /// Failures are logged and reported, never returned: a missing file is
    /// caught by the loader afterwards.
    #[instrument(skip_all, fields(count = sources.len()))]
    pub async fn ensure_present(&self, sources: &[ArtifactSource]) -> FetchReport {
        let mut outcomes = Vec::with_capacity(sources.len());
        for source in sources {
            let outcome = self.fetch_one(source).await;
            outcomes.push((source.kind, outcome));
        }
        FetchReport { outcomes }
    }

    async fn fetch_one(&self, source: &ArtifactSource) -> FetchOutcome {
        let kind = source.kind;
        let path = source.path.display().to_string();

        match tokio::fs::try_exists(&source.path).await {
            Ok(true) => {
                debug!(%kind, %path, "Artifact already present");
                return FetchOutcome::AlreadyPresent;
            },
            Ok(false) => {},
            Err(e) => {
                warn!(%kind, %path, error = %e, "Cannot check artifact path");
                return FetchOutcome::Failed {
                    reason: e.to_string(),
                };
            },
        }

        let Some(url) = source.url.as_deref() else {
            warn!(%kind, %path, variable = kind.url_variable(), "No download URL configured");
            return FetchOutcome::MissingUrl;
        };

        match self.download(url, &source.path).await {
            Ok(bytes) => {
                info!(%kind, %path, bytes, "Artifact downloaded");
                FetchOutcome::Downloaded { bytes }
            },
            Err(reason) => {
                warn!(%kind, %path, %reason, "Failed to download artifact");
                FetchOutcome::Failed { reason }
            },
        }
    }

    async fn download(&self, url: &str, path: &Path) -> Result<usize, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| e.without_url().to_string())?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(format!("HTTP {status}"));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| e.without_url().to_string())?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let partial = path.with_extension("json.part");
        tokio::fs::write(&partial, &body[..])
            .await
            .map_err(|e| e.to_string())?;
        if let Err(e) = tokio::fs::rename(&partial, path).await {
            let _ = tokio::fs::remove_file(&partial).await;
            return Err(e.to_string());
        }

        Ok(body.len())
    }
}
