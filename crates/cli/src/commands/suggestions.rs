//! Suggestion-related CLI commands

use anyhow::Result;
use tabled::Tabled;

use crate::client::{ApiClient, SuggestionList};
use crate::output::{color_confidence, color_risk, print_warning, OutputFormat};

/// Row for the suggestions table
#[derive(Tabled)]
struct SuggestionRow {
    #[tabled(rename = "Resource")]
    resource: String,
    #[tabled(rename = "Issue")]
    issue: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Savings")]
    savings: String,
    #[tabled(rename = "Energy Impact")]
    energy: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Risk")]
    risk: String,
}

/// List the fixed optimization suggestions
pub async fn list_suggestions(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let result: SuggestionList = client.get("api/v1/suggestions").await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result.suggestions)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if result.suggestions.is_empty() {
                print_warning("No suggestions found");
                return Ok(());
            }

            let rows: Vec<SuggestionRow> = result
                .suggestions
                .iter()
                .map(|s| SuggestionRow {
                    resource: s.resource.clone(),
                    issue: s.issue.clone(),
                    action: s.action.clone(),
                    savings: s.potential_savings.clone(),
                    energy: s.energy_reduction.clone(),
                    confidence: color_confidence(s.confidence),
                    risk: color_risk(&s.risk_level),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            println!("\nTotal: {} suggestions", result.total);
        }
    }

    Ok(())
}
