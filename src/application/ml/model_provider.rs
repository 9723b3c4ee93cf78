use super::fallback::train_fallback;
use super::linear_predictor::LinearPredictor;
use crate::domain::errors::ModelError;
use crate::domain::ml::ModelArtifact;
use crate::infrastructure::model_store::ModelStore;
use std::fmt;
use tracing::{info, warn};

/// Where the served model came from on this startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSource {
    Loaded,
    Trained,
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSource::Loaded => f.write_str("loaded"),
            ModelSource::Trained => f.write_str("trained"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedModel {
    pub predictor: LinearPredictor,
    pub artifact: ModelArtifact,
    pub source: ModelSource,
}

/// Resolves the model to serve: the persisted artifact if there is one,
/// otherwise a freshly trained and persisted fallback.
pub struct ModelProvider {
    store: ModelStore,
}

impl ModelProvider {
    pub fn new(store: ModelStore) -> Self {
        Self { store }
    }

    /// Corrupt or incompatible artifacts are returned as errors and left
    /// untouched on disk.
    pub fn resolve(&self) -> Result<ResolvedModel, ModelError> {
        if let Some(artifact) = self.store.load()? {
            info!(
                "Using persisted model (trained at {}, {} samples)",
                artifact.trained_at, artifact.training.samples
            );
            return Ok(ResolvedModel {
                predictor: LinearPredictor::from_artifact(&artifact),
                artifact,
                source: ModelSource::Loaded,
            });
        }

        warn!(
            "No model artifact at {:?}. Training fallback model.",
            self.store.path()
        );
        let artifact = train_fallback()?;
        self.store.save(&artifact)?;

        Ok(ResolvedModel {
            predictor: LinearPredictor::from_artifact(&artifact),
            artifact,
            source: ModelSource::Trained,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::predictor::PricePredictor;
    use crate::domain::ml::FeatureVector;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("pricing-provider-{}", uuid::Uuid::new_v4()))
            .join("model.json")
    }

    #[test]
    fn test_trains_and_persists_when_missing() {
        let path = scratch_path();
        let provider = ModelProvider::new(ModelStore::new(&path));

        let resolved = provider.resolve().unwrap();

        assert_eq!(resolved.source, ModelSource::Trained);
        assert!(path.exists());
        let price = resolved
            .predictor
            .predict(&FeatureVector::new(2.0, 0.7, 4.0))
            .unwrap();
        assert!((price - 150.0).abs() < 1e-6);
        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_second_resolve_loads_without_rewriting() {
        let path = scratch_path();
        let first = ModelProvider::new(ModelStore::new(&path)).resolve().unwrap();
        let bytes_before = fs::read(&path).unwrap();

        let second = ModelProvider::new(ModelStore::new(&path)).resolve().unwrap();

        assert_eq!(second.source, ModelSource::Loaded);
        assert_eq!(second.artifact, first.artifact);
        assert_eq!(fs::read(&path).unwrap(), bytes_before);
        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_corrupt_artifact_fails_and_is_kept() {
        let path = scratch_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let err = ModelProvider::new(ModelStore::new(&path))
            .resolve()
            .unwrap_err();

        assert!(matches!(err, ModelError::CorruptArtifact { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
        fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
