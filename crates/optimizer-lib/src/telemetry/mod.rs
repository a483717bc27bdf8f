//! Synthetic telemetry generation and memoized access

mod cache;
mod generator;
mod summary;

pub use cache::TelemetryCache;
pub use generator::{generate, DEFAULT_SEED, SAMPLE_COUNT, USAGE_CAP};
pub use summary::WindowSummary;
