//! On-disk representation of a trained pricing model.

use super::feature_registry::{FEATURE_COUNT, FEATURE_NAMES, matches_registry};
use super::linear_model::LinearModel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ARTIFACT_FORMAT_VERSION: u32 = 1;
pub const ARTIFACT_KIND: &str = "linear_regression";

/// Fit quality on the training rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub samples: usize,
    /// `None` when undefined (constant targets).
    pub r2: Option<f64>,
    pub rmse: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub kind: String,
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    pub trained_at: DateTime<Utc>,
    pub training: TrainingSummary,
}

impl ModelArtifact {
    pub fn new(model: &LinearModel, training: TrainingSummary) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            kind: ARTIFACT_KIND.to_string(),
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            coefficients: model.coefficients.clone(),
            intercept: model.intercept,
            trained_at: Utc::now(),
            training,
        }
    }

    /// Checks that this artifact can drive the current feature layout.
    pub fn check_compatible(&self) -> Result<(), String> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(format!(
                "format version {} (supported: {})",
                self.format_version, ARTIFACT_FORMAT_VERSION
            ));
        }
        if self.kind != ARTIFACT_KIND {
            return Err(format!("model kind '{}' (supported: '{}')", self.kind, ARTIFACT_KIND));
        }
        if !matches_registry(&self.feature_names) {
            return Err(format!(
                "feature names {:?} (expected {:?})",
                self.feature_names, FEATURE_NAMES
            ));
        }
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(format!(
                "{} coefficients (expected {})",
                self.coefficients.len(),
                FEATURE_COUNT
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|w| !w.is_finite()) {
            return Err("non-finite weights".to_string());
        }
        Ok(())
    }

    pub fn model(&self) -> LinearModel {
        LinearModel::new(self.coefficients.clone(), self.intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> ModelArtifact {
        let model = LinearModel::new(vec![24.5, 4.9, 24.5], -0.5);
        ModelArtifact::new(
            &model,
            TrainingSummary {
                samples: 3,
                r2: Some(1.0),
                rmse: 0.0,
            },
        )
    }

    #[test]
    fn test_fresh_artifact_is_compatible() {
        let artifact = artifact();
        assert!(artifact.check_compatible().is_ok());
        assert_eq!(artifact.model().coefficients, vec![24.5, 4.9, 24.5]);
    }

    #[test]
    fn test_incompatibilities_are_reported() {
        let mut future = artifact();
        future.format_version = 2;
        assert!(future.check_compatible().unwrap_err().contains("format version"));

        let mut forest = artifact();
        forest.kind = "random_forest".to_string();
        assert!(forest.check_compatible().unwrap_err().contains("random_forest"));

        let mut reordered = artifact();
        reordered.feature_names.swap(0, 2);
        assert!(reordered.check_compatible().unwrap_err().contains("feature names"));

        let mut short = artifact();
        short.coefficients.pop();
        assert!(short.check_compatible().unwrap_err().contains("coefficients"));
    }
}
