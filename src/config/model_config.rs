//! Model artifact location.

use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "model.json";

#[derive(Debug, Clone, PartialEq)]
pub struct ModelEnvConfig {
    /// Relative paths resolve against the working directory.
    pub path: PathBuf,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl ModelEnvConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            path: lookup("PRICING_MODEL_PATH")
                .filter(|raw| !raw.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH)),
        }
    }
}
