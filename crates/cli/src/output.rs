//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
#[allow(dead_code)]
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Format a dollar amount
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format a percentage value
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Format a break-even timeline; None means the investment never pays back
pub fn format_break_even(months: Option<f64>) -> String {
    match months {
        Some(m) => format!("{:.1} months", m),
        None => "N/A".to_string(),
    }
}

/// Format an RFC 3339 timestamp for table display
pub fn format_timestamp(ts: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(ts) {
        dt.format("%Y-%m-%d %H:%M").to_string()
    } else {
        ts.to_string()
    }
}

/// Color a risk level based on value
pub fn color_risk(risk: &str) -> String {
    match risk.to_lowercase().as_str() {
        "low" => risk.green().to_string(),
        "medium" => risk.yellow().to_string(),
        "high" => risk.red().to_string(),
        _ => risk.to_string(),
    }
}

/// Color a confidence percentage based on value
pub fn color_confidence(confidence: u8) -> String {
    let formatted = format!("{}%", confidence);
    if confidence >= 90 {
        formatted.green().to_string()
    } else if confidence >= 70 {
        formatted.yellow().to_string()
    } else {
        formatted.red().to_string()
    }
}
