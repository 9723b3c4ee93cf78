use crate::application::ml::PricePredictor;
use crate::domain::errors::PricingError;
use crate::domain::pricing::{FeatureBounds, PredictionResult, PricingRequest, RangePolicy};
use std::sync::Arc;
use tracing::debug;

/// Turns a pricing request into a floored price suggestion.
///
/// Holds only read-only state; share it behind an `Arc` across handlers.
pub struct PricingService {
    predictor: Arc<dyn PricePredictor>,
    bounds: FeatureBounds,
    policy: RangePolicy,
}

impl PricingService {
    pub fn new(predictor: Arc<dyn PricePredictor>, policy: RangePolicy) -> Self {
        Self {
            predictor,
            bounds: FeatureBounds::default(),
            policy,
        }
    }

    pub fn predictor(&self) -> &dyn PricePredictor {
        self.predictor.as_ref()
    }

    pub fn policy(&self) -> RangePolicy {
        self.policy
    }

    pub fn quote(&self, request: PricingRequest) -> Result<PredictionResult, PricingError> {
        let priced = self.bounds.apply(self.policy, request)?;
        let raw = self.predictor.predict(&priced.features())?;
        let result = PredictionResult::from_raw(raw);

        debug!(
            complexity = priced.complexity,
            demand = priced.demand,
            rating = priced.rating,
            raw_prediction = raw,
            suggested_price = result.suggested_price,
            "Priced request"
        );

        Ok(result)
    }
}
