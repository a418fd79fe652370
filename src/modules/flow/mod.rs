pub mod config;
pub mod router;

// Re-export the main types and functions
pub use config::FlowConfig;
pub use router::{run_flow, FlowOutcome, Route};
