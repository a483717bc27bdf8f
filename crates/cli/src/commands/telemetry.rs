//! Telemetry-related CLI commands

use anyhow::Result;
use colored::Colorize;
use tabled::Tabled;

use crate::client::{ApiClient, TelemetryResponse, WindowSummary};
use crate::output::{
    format_currency, format_percent, format_timestamp, print_warning, OutputFormat,
};

/// Row for the telemetry samples table
#[derive(Tabled)]
struct SampleRow {
    #[tabled(rename = "Time (UTC)")]
    time: String,
    #[tabled(rename = "CPU")]
    cpu: String,
    #[tabled(rename = "Memory")]
    memory: String,
    #[tabled(rename = "GPU")]
    gpu: String,
    #[tabled(rename = "Waste")]
    waste: String,
    #[tabled(rename = "Energy")]
    energy: String,
    #[tabled(rename = "CO2 (kg)")]
    carbon: String,
}

/// Show the trailing hours of the simulated series
pub async fn show_samples(
    client: &ApiClient,
    last_hours: usize,
    format: OutputFormat,
) -> Result<()> {
    let result: TelemetryResponse = client.get("api/v1/telemetry").await?;

    let start = result.samples.len().saturating_sub(last_hours);
    let samples = &result.samples[start..];

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(samples)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if samples.is_empty() {
                print_warning("No telemetry samples available");
                return Ok(());
            }

            let rows: Vec<SampleRow> = samples
                .iter()
                .map(|s| SampleRow {
                    time: format_timestamp(&s.timestamp),
                    cpu: format_percent(s.cpu_usage),
                    memory: format_percent(s.memory_usage),
                    gpu: format_percent(s.gpu_usage),
                    waste: format!("{:.1}", s.cpu_waste + s.memory_waste + s.gpu_waste),
                    energy: format_currency(s.energy_cost),
                    carbon: format!("{:.2}", s.carbon_footprint),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            println!(
                "\nShowing {} of {} samples (seed {})",
                samples.len(),
                result.total,
                result.seed
            );
        }
    }

    Ok(())
}

/// Show the trailing-window summary card values
pub async fn show_summary(client: &ApiClient, hours: usize, format: OutputFormat) -> Result<()> {
    let path = format!("api/v1/telemetry/summary?hours={}", hours);
    let result: WindowSummary = client.get(&path).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            println!("{}", "Telemetry Summary".bold());
            println!("{}", "=".repeat(50));
            println!("Window:                 last {} hours", result.hours);
            println!(
                "Energy Cost:            {}",
                format_currency(result.total_energy_cost).green()
            );
            println!(
                "Avg CPU Usage:          {}",
                format_percent(result.avg_cpu_usage)
            );
            println!("Resource Waste:         {:.0} units", result.total_waste);
            println!("Carbon Footprint:       {:.1} kg CO2", result.total_carbon_kg);
        }
    }

    Ok(())
}
