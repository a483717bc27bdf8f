//! Memoized access to generated telemetry
//!
//! The dashboard re-reads the series on every request, so generated data
//! is cached per seed and shared out as an `Arc`. The cache is an explicit
//! collaborator owned by the caller, not hidden global state.

use std::sync::Arc;
use std::time::Instant;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use super::generator;
use crate::models::TelemetrySample;
use crate::observability::OptimizerMetrics;

/// Concurrent per-seed cache of generated series
#[derive(Clone, Default)]
pub struct TelemetryCache {
    series: Arc<DashMap<u64, Arc<Vec<TelemetrySample>>>>,
}

impl TelemetryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the series for `seed`, generating and caching it on first use
    pub fn get_or_generate(&self, seed: u64) -> Arc<Vec<TelemetrySample>> {
        let metrics = OptimizerMetrics::new();

        match self.series.entry(seed) {
            Entry::Occupied(entry) => {
                metrics.inc_cache_hits();
                Arc::clone(entry.get())
            }
            Entry::Vacant(entry) => {
                metrics.inc_cache_misses();
                let start = Instant::now();
                let series = Arc::new(generator::generate(seed));
                metrics.observe_generation_latency(start.elapsed().as_secs_f64());
                debug!(seed, samples = series.len(), "Generated telemetry series");
                entry.insert(Arc::clone(&series));
                series
            }
        }
    }

    /// Number of distinct seeds currently cached
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
