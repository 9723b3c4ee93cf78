pub mod artifact;
pub mod feature_registry;
pub mod linear_model;

pub use artifact::{ModelArtifact, TrainingSummary};
pub use feature_registry::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector};
pub use linear_model::LinearModel;
