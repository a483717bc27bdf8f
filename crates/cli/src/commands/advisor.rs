//! Analysis feed playback

use anyhow::Result;
use colored::Colorize;
use std::time::Duration;

use crate::client::{AnalysisScript, ApiClient};
use crate::output::{format_currency, print_info, print_success, OutputFormat};

/// Play the scripted analysis feed with its suggested pacing
pub async fn analyze(client: &ApiClient, speed: u8, format: OutputFormat) -> Result<()> {
    let path = format!("api/v1/analysis?speed={}", speed);
    let script: AnalysisScript = client.get(&path).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&script)?);
        }
        OutputFormat::Table => {
            let total = script.steps.len();
            for step in &script.steps {
                println!("[{}/{}] {}", step.index + 1, total, step.message.cyan());
                tokio::time::sleep(Duration::from_millis(step.delay_ms)).await;
            }

            print_success("Analysis complete. Optimization actions scheduled.");
            println!();
            println!("{}", "Decision Summary".bold());
            println!("{}", "-".repeat(50));
            for action in &script.summary.actions_taken {
                print_info(action);
            }
            println!();
            println!(
                "Expected Monthly Savings:   {}",
                format_currency(script.summary.expected_monthly_savings).green()
            );
            println!(
                "Expected Energy Reduction:  {:.0}%",
                script.summary.expected_energy_reduction_pct
            );
            println!(
                "Expected Carbon Reduction:  {:.1} tons CO2/year",
                script.summary.expected_carbon_reduction_tons_per_year
            );
        }
    }

    Ok(())
}
