//! Scripted "agent analysis" feed
//!
//! The feed is a fixed, ordered sequence of status lines followed by a
//! decision summary. Pacing is a presentation concern: each step carries a
//! suggested delay derived from the simulation speed, and the script never
//! sleeps itself. Callers that want the live effect (the CLI, a web front
//! end) apply the delays; callers that do not just read the steps.

use serde::{Deserialize, Serialize};

/// Valid simulation-speed range; values outside are clamped
pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 10;

/// Suggested per-step delay at speed 1, in milliseconds
const BASE_STEP_DELAY_MS: u64 = 1_000;

const SCRIPT_LINES: &[&str] = &[
    "Analyzing resource utilization patterns",
    "Detecting idle GPU resources (gpu-cluster-a)",
    "Energy waste detected: 450 kWh/month",
    "Recommendation: implement auto-hibernation schedule",
    "Calculating optimal scaling parameters",
    "Action approved: scheduling hibernation for 22:00-06:00",
    "Projected savings: $450/month, 35% energy reduction",
];

/// One line of the analysis feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStep {
    pub index: usize,
    pub message: String,
    /// Suggested pause before showing the next step
    pub delay_ms: u64,
    /// Fraction of the feed complete once this step is shown
    pub progress: f64,
}

/// Closing summary shown after the feed finishes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub actions_taken: Vec<String>,
    pub expected_monthly_savings: f64,
    pub expected_energy_reduction_pct: f64,
    pub expected_carbon_reduction_tons_per_year: f64,
}

/// The full fixed analysis feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisScript {
    pub speed: u8,
    pub steps: Vec<AnalysisStep>,
    pub summary: AnalysisSummary,
}

impl AnalysisScript {
    /// Build the script for the given simulation speed
    pub fn with_speed(speed: u8) -> Self {
        let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        let delay_ms = BASE_STEP_DELAY_MS / u64::from(speed);
        let total = SCRIPT_LINES.len();

        let steps = SCRIPT_LINES
            .iter()
            .enumerate()
            .map(|(index, message)| AnalysisStep {
                index,
                message: (*message).to_string(),
                delay_ms,
                progress: (index + 1) as f64 / total as f64,
            })
            .collect();

        Self {
            speed,
            steps,
            summary: AnalysisSummary {
                actions_taken: vec![
                    "Scheduled GPU hibernation for off-peak hours (22:00-06:00)".to_string(),
                    "Consolidated 3 underutilized CPU instances".to_string(),
                    "Right-sized memory allocation for Cache Pool C".to_string(),
                ],
                expected_monthly_savings: 1_050.0,
                expected_energy_reduction_pct: 28.0,
                expected_carbon_reduction_tons_per_year: 1.2,
            },
        }
    }
}

impl Default for AnalysisScript {
    fn default() -> Self {
        Self::with_speed(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_sequence() {
        let script = AnalysisScript::with_speed(5);

        assert_eq!(script.steps.len(), 7);
        assert_eq!(script.steps[0].index, 0);
        assert!(script.steps[0].message.starts_with("Analyzing"));
        assert!(script.steps[6].message.contains("$450/month"));
    }

    #[test]
    fn test_progress_reaches_one() {
        let script = AnalysisScript::with_speed(5);

        let last = script.steps.last().unwrap();
        assert!((last.progress - 1.0).abs() < 1e-9);
        for pair in script.steps.windows(2) {
            assert!(pair[1].progress > pair[0].progress);
        }
    }

    #[test]
    fn test_delay_scales_with_speed() {
        assert_eq!(AnalysisScript::with_speed(1).steps[0].delay_ms, 1_000);
        assert_eq!(AnalysisScript::with_speed(10).steps[0].delay_ms, 100);
    }

    #[test]
    fn test_speed_clamped() {
        assert_eq!(AnalysisScript::with_speed(0).speed, MIN_SPEED);
        assert_eq!(AnalysisScript::with_speed(200).speed, MAX_SPEED);
    }

    #[test]
    fn test_summary_content() {
        let summary = AnalysisScript::default().summary;
        assert_eq!(summary.actions_taken.len(), 3);
        assert_eq!(summary.expected_monthly_savings, 1_050.0);
    }
}
