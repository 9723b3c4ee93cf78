use anyhow::{Context, Result};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::application::ml::{ModelProvider, ModelSource};
use crate::application::pricing::PricingService;
use crate::config::Config;
use crate::infrastructure::model_store::ModelStore;
use crate::interfaces::http::{self, AppState};

/// The assembled pricing service: model resolved, handlers wired, not yet
/// listening.
pub struct Application {
    config: Config,
    state: AppState,
}

impl Application {
    /// Resolves the model (load, or train and persist the fallback).
    ///
    /// Fails when the artifact exists but cannot be used, or when the
    /// fallback cannot be persisted.
    pub fn build(config: Config) -> Result<Self> {
        let provider = ModelProvider::new(ModelStore::new(&config.model.path));
        let resolved = provider
            .resolve()
            .with_context(|| format!("Failed to resolve pricing model at {:?}", config.model.path))?;

        info!(
            "Model ready: source={}, coefficients={:?}, intercept={:.4}",
            resolved.source, resolved.artifact.coefficients, resolved.artifact.intercept
        );

        let pricing = PricingService::new(
            Arc::new(resolved.predictor),
            config.pricing.range_policy,
        );
        info!("Range policy: {}", pricing.policy());

        let state = AppState::new(Arc::new(pricing), resolved.source);
        Ok(Self { config, state })
    }

    pub fn model_source(&self) -> ModelSource {
        self.state.model_source
    }

    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = self.config.server.socket_addr();
        TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))
    }

    /// Binds the configured address and serves until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = self.bind().await?;
        self.run_on(listener, shutdown).await
    }

    pub async fn run_on<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = listener.local_addr().context("Listener has no address")?;
        info!("Pricing service listening on http://{}", addr);

        http::serve(listener, self.state, shutdown)
            .await
            .context("HTTP server failed")?;

        info!("Pricing service stopped.");
        Ok(())
    }
}
