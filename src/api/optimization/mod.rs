pub mod client;
pub mod error;
pub mod types;
pub mod workflow;

pub use client::{Client, PollOutcome};
pub use error::OptimizeError;
pub use workflow::{OptimizationWorkflow, PlannedRoute, PollPolicy};
