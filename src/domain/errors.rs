use std::path::PathBuf;
use thiserror::Error;

/// Errors related to building, persisting and evaluating the pricing model
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model artifact I/O failed at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Model artifact at {path:?} is corrupt: {reason}")]
    CorruptArtifact { path: PathBuf, reason: String },

    #[error("Model artifact at {path:?} is incompatible: {reason}")]
    IncompatibleArtifact { path: PathBuf, reason: String },

    #[error("Model training failed: {reason}")]
    Training { reason: String },

    #[error("Model inference failed: {reason}")]
    Inference { reason: String },
}

/// Errors surfaced while pricing a single request
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("{field} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}
