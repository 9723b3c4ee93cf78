//! Configuration module for the pricing service.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Server, Model and Pricing.

mod model_config;
mod pricing_config;
mod server_config;

pub use model_config::{DEFAULT_MODEL_PATH, ModelEnvConfig};
pub use pricing_config::PricingEnvConfig;
pub use server_config::ServerEnvConfig;

use anyhow::Result;
use std::env;

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub model: ModelEnvConfig,
    pub pricing: PricingEnvConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerEnvConfig::from_lookup(&lookup)?,
            model: ModelEnvConfig::from_lookup(&lookup),
            pricing: PricingEnvConfig::from_lookup(&lookup)?,
        })
    }
}
