//! Trailing-window aggregates for the dashboard summary cards

use serde::{Deserialize, Serialize};

use crate::models::TelemetrySample;

/// Aggregates over the trailing hours of a telemetry series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSummary {
    /// Number of samples actually covered (may be fewer than requested)
    pub hours: usize,
    pub total_energy_cost: f64,
    pub avg_cpu_usage: f64,
    pub total_waste: f64,
    pub total_carbon_kg: f64,
}

impl WindowSummary {
    /// Summarize the last `hours` samples of the series
    pub fn for_last_hours(samples: &[TelemetrySample], hours: usize) -> Self {
        let window = &samples[samples.len().saturating_sub(hours)..];

        if window.is_empty() {
            return Self {
                hours: 0,
                total_energy_cost: 0.0,
                avg_cpu_usage: 0.0,
                total_waste: 0.0,
                total_carbon_kg: 0.0,
            };
        }

        Self {
            hours: window.len(),
            total_energy_cost: window.iter().map(|s| s.energy_cost).sum(),
            avg_cpu_usage: window.iter().map(|s| s.cpu_usage).sum::<f64>() / window.len() as f64,
            total_waste: window.iter().map(TelemetrySample::total_waste).sum(),
            total_carbon_kg: window.iter().map(|s| s.carbon_footprint).sum(),
        }
    }
}
