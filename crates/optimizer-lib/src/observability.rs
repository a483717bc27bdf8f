//! Observability infrastructure for the energy optimizer
//!
//! Provides:
//! - Prometheus metrics (generation latency, cache hit ratio, request counters)
//! - Structured JSON logging with tracing

use prometheus::{register_histogram, register_int_counter, Histogram, IntCounter};
use std::sync::OnceLock;
use tracing::{info, warn};

/// Default histogram buckets for latency measurements (in seconds)
const LATENCY_BUCKETS: &[f64] = &[
    0.0001, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
];

/// Global metrics instance (registered once)
static GLOBAL_METRICS: OnceLock<OptimizerMetricsInner> = OnceLock::new();

/// Inner metrics structure that holds the actual Prometheus metrics
struct OptimizerMetricsInner {
    generation_latency_seconds: Histogram,
    cache_hits: IntCounter,
    cache_misses: IntCounter,
    estimates_served: IntCounter,
    estimates_rejected: IntCounter,
    suggestions_served: IntCounter,
    analyses_served: IntCounter,
}

impl OptimizerMetricsInner {
    fn new() -> Self {
        Self {
            generation_latency_seconds: register_histogram!(
                "energy_optimizer_generation_latency_seconds",
                "Time spent generating a telemetry series",
                LATENCY_BUCKETS.to_vec()
            )
            .expect("Failed to register generation_latency_seconds"),

            cache_hits: register_int_counter!(
                "energy_optimizer_telemetry_cache_hits_total",
                "Telemetry cache lookups served without regeneration"
            )
            .expect("Failed to register cache_hits_total"),

            cache_misses: register_int_counter!(
                "energy_optimizer_telemetry_cache_misses_total",
                "Telemetry cache lookups that triggered generation"
            )
            .expect("Failed to register cache_misses_total"),

            estimates_served: register_int_counter!(
                "energy_optimizer_estimates_served_total",
                "ROI estimates computed successfully"
            )
            .expect("Failed to register estimates_served_total"),

            estimates_rejected: register_int_counter!(
                "energy_optimizer_estimates_rejected_total",
                "ROI estimate requests rejected by input validation"
            )
            .expect("Failed to register estimates_rejected_total"),

            suggestions_served: register_int_counter!(
                "energy_optimizer_suggestions_served_total",
                "Suggestion list requests served"
            )
            .expect("Failed to register suggestions_served_total"),

            analyses_served: register_int_counter!(
                "energy_optimizer_analyses_served_total",
                "Analysis script requests served"
            )
            .expect("Failed to register analyses_served_total"),
        }
    }
}

/// Optimizer metrics for Prometheus exposition
///
/// This is a lightweight handle to the global metrics instance.
/// Multiple clones share the same underlying metrics.
#[derive(Clone)]
pub struct OptimizerMetrics {
    _private: (),
}

impl Default for OptimizerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl OptimizerMetrics {
    /// Create a new metrics handle (initializes global metrics if needed)
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(OptimizerMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &OptimizerMetricsInner {
        GLOBAL_METRICS.get().expect("Metrics not initialized")
    }

    /// Record a telemetry generation latency observation
    pub fn observe_generation_latency(&self, duration_secs: f64) {
        self.inner().generation_latency_seconds.observe(duration_secs);
    }

    pub fn inc_cache_hits(&self) {
        self.inner().cache_hits.inc();
    }

    pub fn inc_cache_misses(&self) {
        self.inner().cache_misses.inc();
    }

    pub fn inc_estimates_served(&self) {
        self.inner().estimates_served.inc();
    }

    pub fn inc_estimates_rejected(&self) {
        self.inner().estimates_rejected.inc();
    }

    pub fn inc_suggestions_served(&self) {
        self.inner().suggestions_served.inc();
    }

    pub fn inc_analyses_served(&self) {
        self.inner().analyses_served.inc();
    }
}

/// Structured logger for dashboard events
///
/// Provides consistent JSON-formatted logging for telemetry generation,
/// ROI estimates, and analysis playback.
#[derive(Clone)]
pub struct StructuredLogger {
    instance: String,
}

impl StructuredLogger {
    pub fn new(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
        }
    }

    /// Log a telemetry generation event
    pub fn log_generation(&self, seed: u64, samples: usize, latency_secs: f64) {
        info!(
            event = "telemetry_generated",
            instance = %self.instance,
            seed = seed,
            samples = samples,
            latency_secs = latency_secs,
            "Generated telemetry series"
        );
    }

    /// Log a successful ROI estimate
    pub fn log_estimate(
        &self,
        num_servers: u32,
        avg_monthly_cost: f64,
        current_efficiency: f64,
        monthly_savings: f64,
        break_even_months: Option<f64>,
    ) {
        info!(
            event = "estimate_served",
            instance = %self.instance,
            num_servers = num_servers,
            avg_monthly_cost = avg_monthly_cost,
            current_efficiency = current_efficiency,
            monthly_savings = monthly_savings,
            break_even_months = ?break_even_months,
            "Computed savings estimate"
        );
    }

    /// Log a rejected ROI estimate request
    pub fn log_estimate_rejected(&self, reason: &str) {
        warn!(
            event = "estimate_rejected",
            instance = %self.instance,
            reason = %reason,
            "Rejected savings estimate request"
        );
    }

    /// Log an analysis script request
    pub fn log_analysis_served(&self, speed: u8, steps: usize) {
        info!(
            event = "analysis_served",
            instance = %self.instance,
            speed = speed,
            steps = steps,
            "Served analysis script"
        );
    }

    /// Log service startup
    pub fn log_startup(&self, version: &str, seed: u64) {
        info!(
            event = "dashboard_started",
            instance = %self.instance,
            version = %version,
            telemetry_seed = seed,
            "Energy optimizer dashboard started"
        );
    }

    /// Log service shutdown
    pub fn log_shutdown(&self, reason: &str) {
        info!(
            event = "dashboard_shutdown",
            instance = %self.instance,
            reason = %reason,
            "Energy optimizer dashboard shutting down"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimizer_metrics_creation() {
        // Metrics live in the global Prometheus registry; creating two
        // handles must not double-register.
        let metrics = OptimizerMetrics::new();
        let _second = OptimizerMetrics::new();

        metrics.observe_generation_latency(0.001);
        metrics.inc_cache_hits();
        metrics.inc_cache_misses();
        metrics.inc_estimates_served();
        metrics.inc_suggestions_served();
        metrics.inc_analyses_served();
    }

    #[test]
    fn test_structured_logger_creation() {
        let logger = StructuredLogger::new("test-instance");
        assert_eq!(logger.instance, "test-instance");
    }
}
