// Domain-specific error types
pub mod errors;

// Feature layout, linear model and persisted artifact
pub mod ml;

// Pricing requests, results and input bounds
pub mod pricing;
