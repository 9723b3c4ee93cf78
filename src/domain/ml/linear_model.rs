//! Ordinary least squares with an intercept.
//!
//! The fit centres features and targets, then takes the minimum-norm
//! least-squares solution through an SVD. That keeps the fit well defined
//! when the design is rank deficient, e.g. fewer samples than features or
//! collinear columns, which is exactly the case for the fallback data.

use crate::domain::errors::ModelError;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// Singular values below this fraction of the largest one are treated as zero.
const SINGULAR_VALUE_RTOL: f64 = 1e-10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    pub fn fit(x: &[Vec<f64>], y: &[f64]) -> Result<Self, ModelError> {
        let n_samples = x.len();
        if n_samples == 0 {
            return Err(training_error("no training samples"));
        }
        if n_samples != y.len() {
            return Err(training_error(format!(
                "{} feature rows but {} targets",
                n_samples,
                y.len()
            )));
        }

        let n_features = x[0].len();
        if n_features == 0 {
            return Err(training_error("training rows have no features"));
        }
        if let Some(row) = x.iter().position(|row| row.len() != n_features) {
            return Err(training_error(format!(
                "row {} has {} features, expected {}",
                row,
                x[row].len(),
                n_features
            )));
        }
        if x.iter().flatten().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(training_error("training data contains non-finite values"));
        }

        let x_mean: Vec<f64> = (0..n_features)
            .map(|j| x.iter().map(|row| row[j]).sum::<f64>() / n_samples as f64)
            .collect();
        let y_mean = y.iter().sum::<f64>() / n_samples as f64;

        let centred_x = DMatrix::from_fn(n_samples, n_features, |i, j| x[i][j] - x_mean[j]);
        let centred_y = DVector::from_fn(n_samples, |i, _| y[i] - y_mean);

        let svd = centred_x.svd(true, true);
        let eps = svd.singular_values.max() * SINGULAR_VALUE_RTOL;
        let weights = svd.solve(&centred_y, eps).map_err(training_error)?;

        let coefficients: Vec<f64> = weights.iter().copied().collect();
        let intercept = y_mean
            - coefficients
                .iter()
                .zip(x_mean.iter())
                .map(|(w, m)| w * m)
                .sum::<f64>();

        if !intercept.is_finite() || coefficients.iter().any(|w| !w.is_finite()) {
            return Err(training_error("solver produced non-finite weights"));
        }

        Ok(Self {
            coefficients,
            intercept,
        })
    }

    pub fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::Inference {
                reason: format!(
                    "expected {} features, got {}",
                    self.coefficients.len(),
                    features.len()
                ),
            });
        }

        let prediction = self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.iter())
                .map(|(w, x)| w * x)
                .sum::<f64>();

        if prediction.is_finite() {
            Ok(prediction)
        } else {
            Err(ModelError::Inference {
                reason: format!("non-finite prediction {}", prediction),
            })
        }
    }

    pub fn predict_batch(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, ModelError> {
        rows.iter().map(|row| self.predict(row)).collect()
    }
}

fn training_error(reason: impl Into<String>) -> ModelError {
    ModelError::Training {
        reason: reason.into(),
    }
}
