pub mod fallback;
pub mod linear_predictor;
pub mod model_provider;
pub mod predictor;

pub use linear_predictor::LinearPredictor;
pub use model_provider::{ModelProvider, ModelSource, ResolvedModel};
pub use predictor::PricePredictor;
