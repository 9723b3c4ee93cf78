use super::predictor::PricePredictor;
use crate::domain::errors::ModelError;
use crate::domain::ml::{FeatureVector, LinearModel, ModelArtifact};

/// Serves a fitted [`LinearModel`]. Immutable once built.
#[derive(Debug, Clone)]
pub struct LinearPredictor {
    model: LinearModel,
    version: String,
}

impl LinearPredictor {
    pub fn new(model: LinearModel, version: impl Into<String>) -> Self {
        Self {
            model,
            version: version.into(),
        }
    }

    /// Versions a predictor by the artifact's training timestamp.
    pub fn from_artifact(artifact: &ModelArtifact) -> Self {
        Self::new(artifact.model(), artifact.trained_at.to_rfc3339())
    }
}

impl PricePredictor for LinearPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        self.model.predict(features.as_slice())
    }

    fn name(&self) -> &str {
        "Linear Regression"
    }

    fn version(&self) -> &str {
        &self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicts_through_model() {
        let predictor = LinearPredictor::new(LinearModel::new(vec![10.0, 100.0, 1.0], 5.0), "v1");
        let price = predictor
            .predict(&FeatureVector::new(2.0, 0.5, 4.0))
            .unwrap();

        assert!((price - 79.0).abs() < 1e-12);
        assert_eq!(predictor.version(), "v1");
    }
}
