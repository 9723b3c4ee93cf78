//! REST/HTTP surface of the pricing service.
//!
//! - `POST /predict-price` - floored price suggestion for one request
//! - `GET /health` - liveness plus the model being served
//!
//! CORS is wide open: any origin, method and header.

mod api;
mod handlers;
mod state;

pub use api::{ApiError, ErrorResponse, HealthResponse, ModelInfo};
pub use handlers::{health_check, predict_price};
pub use state::AppState;

use axum::Router;
use axum::routing::{get, post};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/predict-price", post(predict_price))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Serves until `shutdown` resolves, then drains in-flight requests.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
