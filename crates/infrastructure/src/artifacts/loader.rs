//! Artifact file loading

use std::io::ErrorKind;
use std::path::Path;

use ml_pipeline::{
    Classifier, FittedArtifact, OneHotEncoder, PipelineError, PredictionPipeline, SimpleImputer,
    StandardScaler,
};
use tokio::fs;
use tracing::{debug, info, instrument};

use super::{ArtifactError, ArtifactKind, ArtifactPaths};

/// Reads the four artifact files into a prediction pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactLoader;

impl ArtifactLoader {
    /// Load and cross-check all four artifacts
    ///
    /// # Errors
    ///
    /// Returns `ArtifactError::Missing` for the first absent file and
    /// `ArtifactError::Corrupt` for unreadable, malformed or mutually
    /// inconsistent artifacts.
    #[instrument(skip_all)]
    pub async fn load(paths: &ArtifactPaths) -> Result<PredictionPipeline, ArtifactError> {
        let imputer: SimpleImputer = read_artifact(ArtifactKind::Imputer, &paths.imputer).await?;
        let scaler: StandardScaler = read_artifact(ArtifactKind::Scaler, &paths.scaler).await?;
        let encoder: OneHotEncoder = read_artifact(ArtifactKind::Encoder, &paths.encoder).await?;
        let classifier: Classifier = read_artifact(ArtifactKind::Model, &paths.model).await?;

        let pipeline =
            PredictionPipeline::new(imputer, scaler, encoder, classifier).map_err(|e| {
                ArtifactError::Corrupt {
                    kind: blamed_kind(&e),
                    reason: e.to_string(),
                }
            })?;

        info!(
            model_features = pipeline.model_features().len(),
            "Prediction pipeline loaded"
        );
        Ok(pipeline)
    }
}

async fn read_artifact<T: FittedArtifact>(
    kind: ArtifactKind,
    path: &Path,
) -> Result<T, ArtifactError> {
    let bytes = fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => ArtifactError::Missing {
            kind,
            path: path.to_path_buf(),
        },
        _ => ArtifactError::Corrupt {
            kind,
            reason: e.to_string(),
        },
    })?;

    let artifact = T::from_json_slice(&bytes).map_err(|e| ArtifactError::Corrupt {
        kind,
        reason: e.to_string(),
    })?;
    debug!(%kind, bytes = bytes.len(), "Artifact parsed");
    Ok(artifact)
}

/// The artifact a cross-check error points at
fn blamed_kind(err: &PipelineError) -> ArtifactKind {
    match err {
        PipelineError::SchemaMismatch { stage: name, .. }
        | PipelineError::InvalidArtifact { artifact: name, .. } => {
            ArtifactKind::from_name(name).unwrap_or(ArtifactKind::Model)
        },
        _ => ArtifactKind::Model,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ml_pipeline::testing;
    use std::fs;
    use tempfile::TempDir;

    fn write_all(dir: &TempDir) -> ArtifactPaths {
        let paths = ArtifactPaths::in_dir(dir.path());
        fs::write(&paths.imputer, serde_json::to_vec(&testing::sample_imputer()).unwrap()).unwrap();
        fs::write(&paths.scaler, serde_json::to_vec(&testing::sample_scaler()).unwrap()).unwrap();
        fs::write(&paths.encoder, serde_json::to_vec(&testing::sample_encoder()).unwrap()).unwrap();
        fs::write(&paths.model, serde_json::to_vec(&testing::sample_classifier()).unwrap()).unwrap();
        paths
    }

    #[tokio::test]
    async fn loads_valid_artifacts() {
        let dir = TempDir::new().unwrap();
        let paths = write_all(&dir);

        let pipeline = ArtifactLoader::load(&paths).await.unwrap();
        assert_eq!(pipeline.model_features().len(), 17);
        assert!(pipeline.predict(&testing::humid_record()).unwrap().will_rain);
    }

    #[tokio::test]
    async fn missing_file_is_reported_with_kind_and_path() {
        let dir = TempDir::new().unwrap();
        let paths = write_all(&dir);
        fs::remove_file(&paths.encoder).unwrap();

        let err = ArtifactLoader::load(&paths).await.unwrap_err();
        match err {
            ArtifactError::Missing { kind, path } => {
                assert_eq!(kind, ArtifactKind::Encoder);
                assert_eq!(path, paths.encoder);
            },
            other => unreachable!("expected Missing, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn garbage_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let paths = write_all(&dir);
        fs::write(&paths.model, b"\x80\x04\x95 not json").unwrap();

        let err = ArtifactLoader::load(&paths).await.unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::Corrupt {
                kind: ArtifactKind::Model,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn inconsistent_lengths_are_corrupt() {
        let dir = TempDir::new().unwrap();
        let paths = write_all(&dir);
        let mut scaler = testing::sample_scaler();
        scaler.scale.pop();
        fs::write(&paths.scaler, serde_json::to_vec(&scaler).unwrap()).unwrap();

        let err = ArtifactLoader::load(&paths).await.unwrap_err();
        assert_eq!(err.kind(), Some(ArtifactKind::Scaler));
    }

    #[tokio::test]
    async fn mismatched_columns_blame_the_scaler() {
        let dir = TempDir::new().unwrap();
        let paths = write_all(&dir);
        let mut scaler = testing::sample_scaler();
        scaler.feature_names_in.reverse();
        fs::write(&paths.scaler, serde_json::to_vec(&scaler).unwrap()).unwrap();

        let err = ArtifactLoader::load(&paths).await.unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::Corrupt {
                kind: ArtifactKind::Scaler,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn directory_in_place_of_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let paths = write_all(&dir);
        fs::remove_file(&paths.imputer).unwrap();
        fs::create_dir(&paths.imputer).unwrap();

        let err = ArtifactLoader::load(&paths).await.unwrap_err();
        assert_eq!(err.kind(), Some(ArtifactKind::Imputer));
        assert!(matches!(err, ArtifactError::Corrupt { .. }));
    }
}
