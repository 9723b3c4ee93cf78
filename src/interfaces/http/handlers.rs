//! HTTP request handlers

use super::api::{ApiError, HealthResponse, ModelInfo};
use super::state::AppState;
use crate::domain::pricing::{PredictionResult, PricingRequest};
use axum::extract::State;
use axum::Json;

/// Suggest a price for one job.
///
/// Body shape errors are rejected by the `Json` extractor before this runs.
pub async fn predict_price(
    State(state): State<AppState>,
    Json(request): Json<PricingRequest>,
) -> Result<Json<PredictionResult>, ApiError> {
    let result = state.pricing.quote(request)?;
    Ok(Json(result))
}

/// Health check handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let predictor = state.pricing.predictor();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.uptime_secs(),
        model: ModelInfo::new(predictor.name(), predictor.version(), state.model_source),
    })
}
