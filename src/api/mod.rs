pub mod directions;
pub mod optimization;
pub mod service;
