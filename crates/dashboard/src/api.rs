//! HTTP API serving the dashboard front end
//!
//! Data endpoints expose the pure core functions (telemetry, suggestions,
//! ROI estimation, the analysis script); the rest is health checks and
//! Prometheus metrics.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use optimizer_lib::{
    advisor::AnalysisScript,
    health::{ComponentStatus, HealthRegistry},
    models::{RoiInputs, Suggestion, TelemetrySample},
    observability::{OptimizerMetrics, StructuredLogger},
    roi, suggestions,
    telemetry::{TelemetryCache, WindowSummary, SAMPLE_COUNT},
};
use prometheus::{Encoder, TextEncoder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

const DEFAULT_SUMMARY_HOURS: usize = 24;
const DEFAULT_ANALYSIS_SPEED: u8 = 5;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub health_registry: HealthRegistry,
    pub metrics: OptimizerMetrics,
    pub logger: StructuredLogger,
    pub cache: TelemetryCache,
    pub telemetry_seed: u64,
}

impl AppState {
    pub fn new(
        health_registry: HealthRegistry,
        metrics: OptimizerMetrics,
        logger: StructuredLogger,
        cache: TelemetryCache,
        telemetry_seed: u64,
    ) -> Self {
        Self {
            health_registry,
            metrics,
            logger,
            cache,
            telemetry_seed,
        }
    }
}

#[derive(Serialize)]
struct TelemetryResponse {
    seed: u64,
    total: usize,
    samples: Vec<TelemetrySample>,
}

#[derive(Serialize)]
struct SuggestionsResponse {
    suggestions: Vec<Suggestion>,
    total: usize,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Deserialize)]
struct SummaryParams {
    hours: Option<usize>,
}

#[derive(Deserialize)]
struct AnalysisParams {
    speed: Option<u8>,
}

/// Health check response - returns 200 if healthy, 503 if unhealthy
async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_registry.health().await;

    let status_code = match health.status {
        ComponentStatus::Healthy => StatusCode::OK,
        ComponentStatus::Degraded => StatusCode::OK, // Still operational
        ComponentStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}

/// Readiness check response - returns 200 if ready, 503 if not ready
async fn readyz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let readiness = state.health_registry.readiness().await;

    let status_code = if readiness.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(readiness))
}

/// Prometheus metrics endpoint
async fn metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    encoder.encode(&metric_families, &mut buffer).unwrap();

    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        buffer,
    )
}

/// Full simulated telemetry series for the configured seed
async fn get_telemetry(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let series = state.cache.get_or_generate(state.telemetry_seed);

    Json(TelemetryResponse {
        seed: state.telemetry_seed,
        total: series.len(),
        samples: series.as_ref().clone(),
    })
}

/// Trailing-window summary (defaults to the last 24 hours)
async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryParams>,
) -> impl IntoResponse {
    let hours = params
        .hours
        .unwrap_or(DEFAULT_SUMMARY_HOURS)
        .clamp(1, SAMPLE_COUNT);
    let series = state.cache.get_or_generate(state.telemetry_seed);

    Json(WindowSummary::for_last_hours(&series, hours))
}

/// The fixed optimization suggestions
async fn get_suggestions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.metrics.inc_suggestions_served();
    let suggestions = suggestions::fixed_suggestions();

    Json(SuggestionsResponse {
        total: suggestions.len(),
        suggestions,
    })
}

/// Compute a savings estimate; validation failures map to 400
async fn post_estimate(
    State(state): State<Arc<AppState>>,
    Json(inputs): Json<RoiInputs>,
) -> impl IntoResponse {
    match roi::estimate(&inputs) {
        Ok(estimate) => {
            state.metrics.inc_estimates_served();
            state.logger.log_estimate(
                inputs.num_servers,
                inputs.avg_monthly_cost,
                inputs.current_efficiency,
                estimate.monthly_savings,
                estimate.break_even_months,
            );
            (StatusCode::OK, Json(estimate)).into_response()
        }
        Err(err) => {
            state.metrics.inc_estimates_rejected();
            state.logger.log_estimate_rejected(&err.to_string());
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// The scripted analysis feed for the requested simulation speed
async fn get_analysis(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AnalysisParams>,
) -> impl IntoResponse {
    let script = AnalysisScript::with_speed(params.speed.unwrap_or(DEFAULT_ANALYSIS_SPEED));
    state.metrics.inc_analyses_served();
    state
        .logger
        .log_analysis_served(script.speed, script.steps.len());

    Json(script)
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/metrics", get(metrics))
        .route("/api/v1/telemetry", get(get_telemetry))
        .route("/api/v1/telemetry/summary", get(get_summary))
        .route("/api/v1/suggestions", get(get_suggestions))
        .route("/api/v1/roi/estimate", post(post_estimate))
        .route("/api/v1/analysis", get(get_analysis))
        .with_state(state)
}

/// Start the API server
pub async fn serve(bind_address: String, port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("{}:{}", bind_address, port);
    info!(addr = %addr, "Starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
