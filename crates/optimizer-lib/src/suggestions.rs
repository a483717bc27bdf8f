//! Canned optimization opportunities shown on the dashboard

use crate::models::{RiskLevel, Suggestion};

/// The three demo optimization opportunities.
///
/// Fixed records, never computed from telemetry.
pub fn fixed_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion {
            resource: "GPU Cluster A".to_string(),
            issue: "Idle 73% of the time".to_string(),
            action: "Hibernate during off-peak hours".to_string(),
            potential_savings: "$450/month".to_string(),
            energy_reduction: "35% less power consumption".to_string(),
            confidence: 95,
            risk_level: RiskLevel::Low,
        },
        Suggestion {
            resource: "CPU Pool B".to_string(),
            issue: "Underutilized (avg 28%)".to_string(),
            action: "Consolidate workloads".to_string(),
            potential_savings: "$280/month".to_string(),
            energy_reduction: "22% efficiency gain".to_string(),
            confidence: 88,
            risk_level: RiskLevel::Medium,
        },
        Suggestion {
            resource: "Memory Cache C".to_string(),
            issue: "Over-provisioned by 40%".to_string(),
            action: "Right-size allocation".to_string(),
            potential_savings: "$320/month".to_string(),
            energy_reduction: "18% memory optimization".to_string(),
            confidence: 92,
            risk_level: RiskLevel::Low,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_fixed_records() {
        let suggestions = fixed_suggestions();
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0].resource, "GPU Cluster A");
        assert_eq!(suggestions[1].risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_confidence_is_percentage() {
        for suggestion in fixed_suggestions() {
            assert!(suggestion.confidence <= 100);
        }
    }

    #[test]
    fn test_stable_across_calls() {
        let a = serde_json::to_string(&fixed_suggestions()).unwrap();
        let b = serde_json::to_string(&fixed_suggestions()).unwrap();
        assert_eq!(a, b);
    }
}
