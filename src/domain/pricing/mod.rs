pub mod types;
pub mod validation;

pub use types::{MIN_SUGGESTED_PRICE, PredictionResult, PricingRequest};
pub use validation::{FeatureBounds, RangePolicy};
