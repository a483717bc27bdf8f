//! Seeded synthetic resource-usage series
//!
//! Produces one week of hourly samples following a daily sinusoidal load
//! pattern with gaussian noise on top. A single seed drives every random
//! term through one RNG, so equal seeds yield identical series.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::models::TelemetrySample;

/// Number of hourly samples in the generated window (7 days)
pub const SAMPLE_COUNT: usize = 168;

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 42;

/// Usage percentages are capped just below full utilization
pub const USAGE_CAP: f64 = 95.0;

/// Unix timestamp of the first sample (2025-01-01T00:00:00Z)
const WINDOW_START_EPOCH: i64 = 1_735_689_600;

const HOUR_SECS: i64 = 3_600;

/// Hours per daily load cycle
const DAILY_PERIOD: f64 = 24.0;

/// Energy cost in dollars per unit of combined base load
const COST_PER_LOAD_UNIT: f64 = 0.12;

/// kg of CO2 per unit of combined base load
const CARBON_KG_PER_LOAD_UNIT: f64 = 0.05;

/// Generate the full 7-day hourly series for the given seed.
///
/// Always returns exactly [`SAMPLE_COUNT`] samples with strictly
/// increasing, hourly-spaced timestamps.
pub fn generate(seed: u64) -> Vec<TelemetrySample> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut samples = Vec::with_capacity(SAMPLE_COUNT);

    for i in 0..SAMPLE_COUNT {
        let phase = (2.0 * std::f64::consts::PI * i as f64 / DAILY_PERIOD).sin();
        let base_cpu = 45.0 + 20.0 * phase;
        let base_memory = 60.0 + 15.0 * phase;
        let base_gpu = (30.0 + 40.0 * phase + gauss(&mut rng, 0.0, 10.0)).max(0.0);
        let base_load = base_cpu + base_memory + base_gpu;

        samples.push(TelemetrySample {
            timestamp: sample_timestamp(i),
            cpu_usage: clamp_usage(base_cpu + gauss(&mut rng, 0.0, 5.0)),
            memory_usage: clamp_usage(base_memory + gauss(&mut rng, 0.0, 5.0)),
            gpu_usage: clamp_usage(base_gpu),
            cpu_waste: gauss(&mut rng, 15.0, 5.0).max(0.0),
            memory_waste: gauss(&mut rng, 10.0, 5.0).max(0.0),
            gpu_waste: gauss(&mut rng, 20.0, 8.0).max(0.0),
            energy_cost: base_load * COST_PER_LOAD_UNIT + gauss(&mut rng, 0.0, 2.0),
            carbon_footprint: base_load * CARBON_KG_PER_LOAD_UNIT + gauss(&mut rng, 0.0, 1.0),
        });
    }

    samples
}

fn sample_timestamp(index: usize) -> DateTime<Utc> {
    DateTime::from_timestamp(WINDOW_START_EPOCH + index as i64 * HOUR_SECS, 0)
        .unwrap_or_else(Utc::now)
}

fn clamp_usage(value: f64) -> f64 {
    value.clamp(0.0, USAGE_CAP)
}

fn gauss(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    // std_dev arguments are positive literals, so construction cannot fail
    Normal::new(mean, std_dev)
        .expect("valid normal distribution parameters")
        .sample(rng)
}
