// Model resolution and inference
pub mod ml;

// Request pricing (range policy, floor)
pub mod pricing;

// Service assembly and lifecycle
pub mod system;
