//! Energy optimizer dashboard service
//!
//! Serves the simulated telemetry, canned suggestions, savings estimator,
//! and analysis feed consumed by the dashboard front end.

use anyhow::Result;
use optimizer_lib::{
    health::{components, HealthRegistry},
    observability::{OptimizerMetrics, StructuredLogger},
    telemetry::TelemetryCache,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;

const DASHBOARD_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and env filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    info!("Starting energy-dashboard");

    // Load configuration
    let config = config::DashboardConfig::load()?;
    info!(
        instance = %config.instance_name,
        seed = config.telemetry_seed,
        "Dashboard configured"
    );

    // Initialize health registry
    let health_registry = HealthRegistry::new();
    health_registry.register(components::GENERATOR).await;
    health_registry.register(components::ESTIMATOR).await;
    health_registry.register(components::CACHE).await;

    // Initialize metrics and structured logging
    let metrics = OptimizerMetrics::new();
    let logger = StructuredLogger::new(&config.instance_name);
    logger.log_startup(DASHBOARD_VERSION, config.telemetry_seed);

    // Warm the cache so the first request is served from memory
    let cache = TelemetryCache::new();
    let start = Instant::now();
    let series = cache.get_or_generate(config.telemetry_seed);
    logger.log_generation(
        config.telemetry_seed,
        series.len(),
        start.elapsed().as_secs_f64(),
    );

    // Create shared application state
    let app_state = Arc::new(api::AppState::new(
        health_registry.clone(),
        metrics,
        logger.clone(),
        cache,
        config.telemetry_seed,
    ));

    // Mark dashboard as ready after initialization
    health_registry.set_ready(true).await;

    // Start the API server
    let _api_server = tokio::spawn(api::serve(
        config.bind_address.clone(),
        config.api_port,
        app_state,
    ));

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    logger.log_shutdown("SIGINT received");
    info!("Shutting down");

    Ok(())
}
