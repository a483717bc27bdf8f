//! Savings estimation and break-even arithmetic
//!
//! Pure fixed-ratio formulas: the only tunable values are the three
//! estimator inputs. Server count gates validation only; the monthly cost
//! input already covers the whole fleet.

use thiserror::Error;

use crate::models::{MonthlySaving, RoiEstimate, RoiInputs};

/// Efficiency ceiling the optimizer is assumed to reach
pub const TARGET_EFFICIENCY_PCT: f64 = 85.0;

/// One-time cost of rolling out the optimizer
pub const IMPLEMENTATION_COST: f64 = 25_000.0;

/// Bounds of the efficiency input; values outside are clamped
pub const MIN_EFFICIENCY_PCT: f64 = 30.0;
pub const MAX_EFFICIENCY_PCT: f64 = 90.0;

/// Share of identified waste that optimization recovers
const RECOVERABLE_SHARE: f64 = 0.30;

/// kWh of energy per dollar of annual savings
const KWH_PER_DOLLAR: f64 = 0.8;

/// kg of CO2 avoided per kWh saved
const CO2_KG_PER_KWH: f64 = 0.4;

/// kg of CO2 one tree absorbs per year
const CO2_KG_PER_TREE: f64 = 21.0;

/// Length of the projected cumulative-savings schedule
const SCHEDULE_MONTHS: u32 = 12;

/// Rejected estimator inputs
#[derive(Debug, Error, PartialEq)]
pub enum RoiError {
    #[error("server count must be at least 1")]
    NoServers,
    #[error("average monthly cost must be positive, got {0}")]
    NonPositiveCost(f64),
}

/// Project savings and break-even timeline from the current infrastructure.
///
/// Efficiency is clamped to [`MIN_EFFICIENCY_PCT`]..=[`MAX_EFFICIENCY_PCT`].
/// Efficiencies at or above [`TARGET_EFFICIENCY_PCT`] leave nothing to
/// optimize: savings are zero and `break_even_months` is `None`.
pub fn estimate(inputs: &RoiInputs) -> Result<RoiEstimate, RoiError> {
    if inputs.num_servers == 0 {
        return Err(RoiError::NoServers);
    }
    if !(inputs.avg_monthly_cost > 0.0) {
        return Err(RoiError::NonPositiveCost(inputs.avg_monthly_cost));
    }

    let efficiency = inputs
        .current_efficiency
        .clamp(MIN_EFFICIENCY_PCT, MAX_EFFICIENCY_PCT);

    let optimization_potential_pct =
        ((TARGET_EFFICIENCY_PCT - efficiency) / TARGET_EFFICIENCY_PCT * 100.0).max(0.0);
    let monthly_savings =
        inputs.avg_monthly_cost * (optimization_potential_pct / 100.0) * RECOVERABLE_SHARE;
    let annual_savings = monthly_savings * 12.0;

    let break_even_months = if monthly_savings > 0.0 {
        Some(IMPLEMENTATION_COST / monthly_savings)
    } else {
        None
    };

    let energy_saved_kwh = annual_savings * KWH_PER_DOLLAR;
    let carbon_reduced_kg = energy_saved_kwh * CO2_KG_PER_KWH;

    Ok(RoiEstimate {
        optimization_potential_pct,
        efficiency_gain_pct: (TARGET_EFFICIENCY_PCT - efficiency).max(0.0),
        monthly_savings,
        annual_savings,
        implementation_cost: IMPLEMENTATION_COST,
        break_even_months,
        energy_saved_kwh,
        carbon_reduced_kg,
        trees_equivalent: carbon_reduced_kg / CO2_KG_PER_TREE,
        cumulative_savings: (1..=SCHEDULE_MONTHS)
            .map(|month| MonthlySaving {
                month,
                cumulative_savings: monthly_savings * f64::from(month),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(num_servers: u32, avg_monthly_cost: f64, current_efficiency: f64) -> RoiInputs {
        RoiInputs {
            num_servers,
            avg_monthly_cost,
            current_efficiency,
        }
    }

    #[test]
    fn test_reference_estimate() {
        let result = estimate(&inputs(50, 15_000.0, 65.0)).unwrap();

        assert!((result.optimization_potential_pct - 23.529).abs() < 0.01);
        assert!((result.monthly_savings - 1058.82).abs() < 0.01);
        assert!((result.annual_savings - 12_705.88).abs() < 0.01);
        assert!((result.break_even_months.unwrap() - 23.61).abs() < 0.01);
    }

    #[test]
    fn test_efficiency_at_target_yields_no_savings() {
        let result = estimate(&inputs(10, 5_000.0, 85.0)).unwrap();

        assert_eq!(result.monthly_savings, 0.0);
        assert_eq!(result.break_even_months, None);
        assert_eq!(result.energy_saved_kwh, 0.0);
        assert_eq!(result.trees_equivalent, 0.0);
    }

    #[test]
    fn test_efficiency_above_target_floors_at_zero() {
        // 88% is within the valid slider range but past the 85% ceiling
        let result = estimate(&inputs(10, 5_000.0, 88.0)).unwrap();

        assert_eq!(result.optimization_potential_pct, 0.0);
        assert_eq!(result.monthly_savings, 0.0);
        assert_eq!(result.break_even_months, None);
    }

    #[test]
    fn test_efficiency_clamped_to_bounds() {
        let low = estimate(&inputs(10, 5_000.0, 5.0)).unwrap();
        let floor = estimate(&inputs(10, 5_000.0, MIN_EFFICIENCY_PCT)).unwrap();
        assert_eq!(low, floor);

        let high = estimate(&inputs(10, 5_000.0, 200.0)).unwrap();
        let ceil = estimate(&inputs(10, 5_000.0, MAX_EFFICIENCY_PCT)).unwrap();
        assert_eq!(high, ceil);
    }

    #[test]
    fn test_savings_monotonic_in_efficiency() {
        let mut previous = f64::MAX;
        for efficiency in [30.0, 45.0, 60.0, 75.0, 85.0, 90.0] {
            let result = estimate(&inputs(10, 10_000.0, efficiency)).unwrap();
            assert!(
                result.monthly_savings <= previous,
                "savings must not grow as efficiency improves"
            );
            previous = result.monthly_savings;
        }
    }

    #[test]
    fn test_carbon_is_fixed_ratio_of_annual_savings() {
        for efficiency in [30.0, 50.0, 70.0, 84.0] {
            let result = estimate(&inputs(10, 12_000.0, efficiency)).unwrap();
            assert!((result.carbon_reduced_kg - 0.32 * result.annual_savings).abs() < 1e-9);
        }
    }

    #[test]
    fn test_cumulative_schedule() {
        let result = estimate(&inputs(50, 15_000.0, 65.0)).unwrap();

        assert_eq!(result.cumulative_savings.len(), 12);
        assert_eq!(result.cumulative_savings[0].month, 1);
        assert!(
            (result.cumulative_savings[11].cumulative_savings - result.annual_savings).abs() < 1e-9
        );
        for pair in result.cumulative_savings.windows(2) {
            assert!(pair[1].cumulative_savings >= pair[0].cumulative_savings);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = estimate(&inputs(50, 15_000.0, 65.0)).unwrap();
        let b = estimate(&inputs(50, 15_000.0, 65.0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_zero_servers() {
        assert_eq!(
            estimate(&inputs(0, 15_000.0, 65.0)),
            Err(RoiError::NoServers)
        );
    }

    #[test]
    fn test_rejects_non_positive_cost() {
        assert!(matches!(
            estimate(&inputs(10, 0.0, 65.0)),
            Err(RoiError::NonPositiveCost(_))
        ));
        assert!(matches!(
            estimate(&inputs(10, -100.0, 65.0)),
            Err(RoiError::NonPositiveCost(_))
        ));
    }
}
