//! Request-handling policy parsing from environment variables.

use crate::domain::pricing::RangePolicy;
use anyhow::Result;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingEnvConfig {
    pub range_policy: RangePolicy,
}

impl PricingEnvConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let range_policy = match lookup("PRICING_RANGE_POLICY") {
            Some(raw) => raw.parse::<RangePolicy>()?,
            None => RangePolicy::default(),
        };

        Ok(Self { range_policy })
    }
}
