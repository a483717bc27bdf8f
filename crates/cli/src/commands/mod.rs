//! CLI command implementations

pub mod advisor;
pub mod roi;
pub mod suggestions;
pub mod telemetry;
