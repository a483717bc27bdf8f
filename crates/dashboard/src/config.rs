//! Dashboard configuration

use anyhow::Result;
use serde::Deserialize;

/// Dashboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Instance name reported in structured logs
    #[serde(default = "default_instance_name")]
    pub instance_name: String,

    /// Address the API server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// API server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Seed for the simulated telemetry series
    #[serde(default = "default_telemetry_seed")]
    pub telemetry_seed: u64,
}

fn default_instance_name() -> String {
    std::env::var("HOSTNAME").unwrap_or_else(|_| "dashboard".to_string())
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_api_port() -> u16 {
    8080
}

fn default_telemetry_seed() -> u64 {
    optimizer_lib::telemetry::DEFAULT_SEED
}

impl DashboardConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("DASHBOARD"))
            .build()?;

        Ok(config
            .try_deserialize()
            .unwrap_or_else(|_| DashboardConfig {
                instance_name: default_instance_name(),
                bind_address: default_bind_address(),
                api_port: default_api_port(),
                telemetry_seed: default_telemetry_seed(),
            }))
    }
}
