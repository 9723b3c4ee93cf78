use crate::application::ml::ModelSource;
use crate::application::pricing::PricingService;
use std::sync::Arc;
use std::time::Instant;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub pricing: Arc<PricingService>,
    pub model_source: ModelSource,
    started_at: Instant,
}

impl AppState {
    pub fn new(pricing: Arc<PricingService>, model_source: ModelSource) -> Self {
        Self {
            pricing,
            model_source,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
