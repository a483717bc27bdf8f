//! Core library for the AI energy optimizer demo
//!
//! This crate provides the core functionality for:
//! - Seeded synthetic telemetry generation with memoized access
//! - Trailing-window usage summaries
//! - ROI / savings estimation
//! - Canned optimization suggestions and the scripted analysis feed
//! - Health checks and observability

pub mod advisor;
pub mod health;
pub mod models;
pub mod observability;
pub mod roi;
pub mod suggestions;
pub mod telemetry;

pub use health::{
    ComponentHealth, ComponentStatus, HealthRegistry, HealthResponse, ReadinessResponse,
};
pub use models::*;
pub use observability::{OptimizerMetrics, StructuredLogger};
