pub mod model_store;
pub mod observability;
