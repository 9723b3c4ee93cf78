use crate::domain::ml::feature_registry::FeatureVector;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Minimum price ever suggested, whatever the model says.
pub const MIN_SUGGESTED_PRICE: f64 = 50.0;

/// Inbound pricing query.
///
/// Nominal ranges: `complexity` 1-5, `demand` 0-1 (location demand),
/// `rating` 1-5 (artisan rating). Enforcement is up to [`super::RangePolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingRequest {
    #[serde(deserialize_with = "deserialize_whole_number")]
    pub complexity: i64,
    pub demand: f64,
    pub rating: f64,
}

impl PricingRequest {
    pub fn new(complexity: i64, demand: f64, rating: f64) -> Self {
        Self {
            complexity,
            demand,
            rating,
        }
    }

    pub fn features(&self) -> FeatureVector {
        FeatureVector::new(self.complexity as f64, self.demand, self.rating)
    }
}

/// Accepts a JSON integer, or a float with no fractional part (`2.0`).
fn deserialize_whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct WholeNumberVisitor;

    impl Visitor<'_> for WholeNumberVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a whole number")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
            i64::try_from(value)
                .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<i64, E> {
            // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
                Ok(value as i64)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(value), &self))
            }
        }
    }

    deserializer.deserialize_any(WholeNumberVisitor)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub suggested_price: f64,
}

impl PredictionResult {
    /// Applies the price floor to a raw model output.
    pub fn from_raw(prediction: f64) -> Self {
        // f64::max ignores NaN, so a NaN prediction also lands on the floor
        Self {
            suggested_price: prediction.max(MIN_SUGGESTED_PRICE),
        }
    }
}
