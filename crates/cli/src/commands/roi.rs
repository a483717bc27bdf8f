//! ROI-related CLI commands

use anyhow::Result;
use colored::Colorize;
use tabled::Tabled;

use crate::client::{ApiClient, RoiEstimate, RoiInputs};
use crate::output::{format_break_even, format_currency, format_percent, OutputFormat};

/// Row for the cumulative savings schedule
#[derive(Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Cumulative Savings")]
    cumulative: String,
    #[tabled(rename = "Milestone")]
    milestone: String,
}

/// Estimate savings and show the break-even schedule
pub async fn estimate(
    client: &ApiClient,
    servers: u32,
    monthly_cost: f64,
    efficiency: f64,
    format: OutputFormat,
) -> Result<()> {
    let inputs = RoiInputs {
        num_servers: servers,
        avg_monthly_cost: monthly_cost,
        current_efficiency: efficiency,
    };
    let result: RoiEstimate = client.post("api/v1/roi/estimate", &inputs).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Table => {
            println!("{}", "Savings Estimate".bold());
            println!("{}", "=".repeat(50));
            println!("Servers:                {}", servers);
            println!("Monthly Cost:           {}", format_currency(monthly_cost));
            println!(
                "Optimization Potential: {}",
                format_percent(result.optimization_potential_pct)
            );
            println!(
                "Target Efficiency Gain: +{}",
                format_percent(result.efficiency_gain_pct)
            );
            println!();

            println!("{}", "Projected Savings".bold());
            println!("{}", "-".repeat(50));
            println!(
                "Monthly:                {}",
                format_currency(result.monthly_savings).green()
            );
            println!(
                "Annual:                 {}",
                format_currency(result.annual_savings).green()
            );
            println!(
                "Implementation Cost:    {}",
                format_currency(result.implementation_cost)
            );
            println!(
                "{}             {}",
                "Break-even:".bold(),
                format_break_even(result.break_even_months).green().bold()
            );
            println!();

            let mut reached_break_even = false;
            let rows: Vec<ScheduleRow> = result
                .cumulative_savings
                .iter()
                .map(|m| {
                    let milestone = if !reached_break_even
                        && m.cumulative_savings >= result.implementation_cost
                    {
                        reached_break_even = true;
                        "break-even".green().to_string()
                    } else {
                        String::new()
                    };
                    ScheduleRow {
                        month: m.month,
                        cumulative: format_currency(m.cumulative_savings),
                        milestone,
                    }
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            println!();

            println!("{}", "Environmental Impact".bold());
            println!("{}", "-".repeat(50));
            println!(
                "Energy Saved:           {:.0} kWh/year",
                result.energy_saved_kwh
            );
            println!(
                "Carbon Reduced:         {:.0} kg CO2/year",
                result.carbon_reduced_kg
            );
            println!(
                "Trees Equivalent:       {:.0} trees/year",
                result.trees_equivalent
            );
        }
    }

    Ok(())
}
