//! Pricing Server - suggested prices for artisan jobs
//!
//! Resolves the pricing model (persisted artifact, or a freshly trained
//! fallback) and serves it over HTTP.
//!
//! # Usage
//! ```sh
//! PRICING_PORT=8000 cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `PRICING_BIND_ADDRESS` - Listen address (default: 127.0.0.1)
//! - `PRICING_PORT` - Listen port (default: 8000)
//! - `PRICING_MODEL_PATH` - Model artifact file (default: model.json)
//! - `PRICING_RANGE_POLICY` - accept | reject | clamp (default: accept)
//! - `RUST_LOG` - Log filter, e.g. `debug` or `artisan_pricing=debug` (default: info)

use anyhow::Result;
use artisan_pricing::application::system::Application;
use artisan_pricing::config::Config;
use artisan_pricing::infrastructure::observability;
use tracing::{error, info};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(observability::env_filter())
        .with(stdout_layer)
        .init();

    info!("Pricing Server {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: Address={}, Model={:?}, RangePolicy={}",
        config.server.socket_addr(),
        config.model.path,
        config.pricing.range_policy
    );

    let app = Application::build(config)?;

    app.run(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Shutdown signal received. Exiting...");
    })
    .await
}
