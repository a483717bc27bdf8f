//! Core data models for the energy optimizer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One hourly record of simulated resource usage and derived cost figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    pub timestamp: DateTime<Utc>,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub gpu_usage: f64,
    pub cpu_waste: f64,
    pub memory_waste: f64,
    pub gpu_waste: f64,
    pub energy_cost: f64,
    pub carbon_footprint: f64,
}

impl TelemetrySample {
    /// Combined unused capacity across all three resources
    pub fn total_waste(&self) -> f64 {
        self.cpu_waste + self.memory_waste + self.gpu_waste
    }
}

/// Risk classification for an optimization suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// A hypothetical optimization opportunity surfaced on the dashboard
///
/// These records are fixed demo content, never derived from telemetry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub resource: String,
    pub issue: String,
    pub action: String,
    pub potential_savings: String,
    pub energy_reduction: String,
    pub confidence: u8,
    pub risk_level: RiskLevel,
}

/// Inputs to the savings estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub num_servers: u32,
    pub avg_monthly_cost: f64,
    pub current_efficiency: f64,
}

/// Projected savings and break-even timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiEstimate {
    pub optimization_potential_pct: f64,
    pub efficiency_gain_pct: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub implementation_cost: f64,
    /// None when monthly savings are zero and the investment never pays back
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_even_months: Option<f64>,
    pub energy_saved_kwh: f64,
    pub carbon_reduced_kg: f64,
    pub trees_equivalent: f64,
    pub cumulative_savings: Vec<MonthlySaving>,
}

/// Projected cumulative savings at the end of one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySaving {
    pub month: u32,
    pub cumulative_savings: f64,
}
