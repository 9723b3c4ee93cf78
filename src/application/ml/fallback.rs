//! Placeholder model used when no artifact has been persisted yet.
//!
//! Three rows for three features: the fit interpolates them and nothing more.

use crate::domain::errors::ModelError;
use crate::domain::ml::{FEATURE_COUNT, LinearModel, ModelArtifact, TrainingSummary};
use smartcore::metrics::{mean_squared_error, r2};
use tracing::info;

/// (complexity, demand, rating) -> price
pub const FALLBACK_SAMPLES: [([f64; FEATURE_COUNT], f64); 3] = [
    ([1.0, 0.5, 3.0], 100.0),
    ([2.0, 0.7, 4.0], 150.0),
    ([3.0, 0.9, 5.0], 200.0),
];

pub fn train_fallback() -> Result<ModelArtifact, ModelError> {
    let x: Vec<Vec<f64>> = FALLBACK_SAMPLES
        .iter()
        .map(|(features, _)| features.to_vec())
        .collect();
    let y: Vec<f64> = FALLBACK_SAMPLES.iter().map(|(_, price)| *price).collect();

    let model = LinearModel::fit(&x, &y)?;
    let fitted = model.predict_batch(&x)?;
    let summary = summarize_fit(&y, &fitted);

    info!(
        "Fallback model trained on {} samples: coefficients={:?}, intercept={:.4}, R²={:?}, RMSE={:.6}",
        summary.samples, model.coefficients, model.intercept, summary.r2, summary.rmse
    );

    Ok(ModelArtifact::new(&model, summary))
}

fn summarize_fit(actual: &[f64], fitted: &[f64]) -> TrainingSummary {
    let actual = actual.to_vec();
    let fitted = fitted.to_vec();

    let mse: f64 = mean_squared_error(&actual, &fitted);
    let r_squared: f64 = r2(&actual, &fitted);

    TrainingSummary {
        samples: actual.len(),
        r2: r_squared.is_finite().then_some(r_squared),
        rmse: mse.max(0.0).sqrt(),
    }
}
