//! Input bounds for pricing requests.
//!
//! The nominal ranges were historically documented but never enforced; the
//! [`RangePolicy`] decides whether out-of-range values are rejected, clamped
//! or passed through untouched.

use super::types::PricingRequest;
use crate::domain::errors::PricingError;
use std::fmt;
use std::str::FromStr;

/// What to do with a request whose fields fall outside [`FeatureBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePolicy {
    Reject,
    Clamp,
    #[default]
    Accept,
}

impl FromStr for RangePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(RangePolicy::Reject),
            "clamp" => Ok(RangePolicy::Clamp),
            "accept" => Ok(RangePolicy::Accept),
            _ => anyhow::bail!(
                "Invalid range policy: {}. Must be 'reject', 'clamp', or 'accept'",
                s
            ),
        }
    }
}

impl fmt::Display for RangePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RangePolicy::Reject => "reject",
            RangePolicy::Clamp => "clamp",
            RangePolicy::Accept => "accept",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self, field: &'static str, value: f64) -> Result<(), PricingError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(PricingError::OutOfRange {
                field,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Nominal range of every pricing feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureBounds {
    pub complexity: FieldRange,
    pub demand: FieldRange,
    pub rating: FieldRange,
}

impl Default for FeatureBounds {
    fn default() -> Self {
        Self {
            complexity: FieldRange::new(1.0, 5.0),
            demand: FieldRange::new(0.0, 1.0),
            rating: FieldRange::new(1.0, 5.0),
        }
    }
}

impl FeatureBounds {
    /// Returns the request to price under `policy`.
    ///
    /// `Reject` reports the first offending field in feature order.
    pub fn apply(
        &self,
        policy: RangePolicy,
        request: PricingRequest,
    ) -> Result<PricingRequest, PricingError> {
        match policy {
            RangePolicy::Accept => Ok(request),
            RangePolicy::Reject => {
                self.complexity
                    .check("complexity", request.complexity as f64)?;
                self.demand.check("demand", request.demand)?;
                self.rating.check("rating", request.rating)?;
                Ok(request)
            }
            RangePolicy::Clamp => Ok(PricingRequest {
                complexity: request.complexity.clamp(
                    self.complexity.min.ceil() as i64,
                    self.complexity.max.floor() as i64,
                ),
                demand: request.demand.clamp(self.demand.min, self.demand.max),
                rating: request.rating.clamp(self.rating.min, self.rating.max),
            }),
        }
    }
}
