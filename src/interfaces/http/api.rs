use crate::application::ml::ModelSource;
use crate::domain::errors::PricingError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Error body returned for domain failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Offending request field, for range violations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub model: ModelInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub version: String,
    pub source: String,
}

impl ModelInfo {
    pub fn new(name: &str, version: &str, source: ModelSource) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            source: source.to_string(),
        }
    }
}

/// Maps [`PricingError`] onto HTTP statuses.
#[derive(Debug)]
pub struct ApiError(pub PricingError);

impl From<PricingError> for ApiError {
    fn from(err: PricingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, field) = match &self.0 {
            PricingError::OutOfRange { field, .. } => {
                warn!("Rejected pricing request: {}", self.0);
                (StatusCode::UNPROCESSABLE_ENTITY, Some(field.to_string()))
            }
            PricingError::Model(e) => {
                error!("Pricing failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let body = ErrorResponse {
            error: self.0.to_string(),
            field,
        };
        (status, Json(body)).into_response()
    }
}
