//! Pay estimation.
//!
//! Converts a work-time breakdown plus an hourly wage into a gross pay
//! estimate using exact decimal arithmetic. Each component is floored to a
//! whole currency unit independently before summing.

use rust_decimal::Decimal;

use crate::config::PremiumRates;
use crate::models::{AuditStep, PayEstimate, WorkTimeBreakdown};

/// The result of a pay estimation.
#[derive(Debug, Clone)]
pub struct PayEstimateResult {
    /// The itemized pay estimate.
    pub estimate: PayEstimate,
    /// The audit step recording this estimation.
    pub audit_step: AuditStep,
}

/// Estimates gross pay from a breakdown and an hourly wage.
///
/// Regular minutes are the worked minutes below the overtime split; the
/// overtime premium multiplies the wage, while the night and holiday
/// premiums are additive uplifts on top of pay already counted in the base
/// or overtime components.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::estimate_pay;
/// use timeclock_engine::config::PremiumRates;
/// use timeclock_engine::models::WorkTimeBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = WorkTimeBreakdown {
///     worked_minutes: 660,
///     overtime_minutes: 180,
///     night_minutes: 0,
///     holiday_minutes: 0,
///     break_minutes: 60,
///     break_details: vec![],
/// };
/// let result = estimate_pay(&breakdown, Decimal::new(1500, 0), &PremiumRates::default(), 1);
/// // 8h * 1500 + 3h * 1500 * 1.25
/// assert_eq!(result.estimate.gross_pay, Decimal::new(17625, 0));
/// ```
pub fn estimate_pay(
    breakdown: &WorkTimeBreakdown,
    hourly_wage: Decimal,
    premiums: &PremiumRates,
    step_number: u32,
) -> PayEstimateResult {
    let sixty = Decimal::from(60);
    let regular_minutes = breakdown.worked_minutes - breakdown.overtime_minutes;

    let regular_hours = Decimal::from(regular_minutes) / sixty;
    let overtime_hours = Decimal::from(breakdown.overtime_minutes) / sixty;
    let night_hours = Decimal::from(breakdown.night_minutes) / sixty;
    let holiday_hours = Decimal::from(breakdown.holiday_minutes) / sixty;

    let base_pay = (regular_hours * hourly_wage).floor();
    let overtime_pay = (overtime_hours * hourly_wage * premiums.overtime).floor();
    let night_pay = (night_hours * hourly_wage * premiums.night).floor();
    let holiday_pay = (holiday_hours * hourly_wage * premiums.holiday).floor();
    let gross_pay = base_pay + overtime_pay + night_pay + holiday_pay;

    let estimate = PayEstimate {
        base_pay,
        overtime_pay,
        night_pay,
        holiday_pay,
        gross_pay,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "pay_estimation".to_string(),
        rule_name: "Pay Estimation".to_string(),
        input: serde_json::json!({
            "hourly_wage": hourly_wage.to_string(),
            "regular_minutes": regular_minutes,
            "overtime_minutes": breakdown.overtime_minutes,
            "night_minutes": breakdown.night_minutes,
            "holiday_minutes": breakdown.holiday_minutes,
        }),
        output: serde_json::json!({
            "base_pay": estimate.base_pay.to_string(),
            "overtime_pay": estimate.overtime_pay.to_string(),
            "night_pay": estimate.night_pay.to_string(),
            "holiday_pay": estimate.holiday_pay.to_string(),
            "gross_pay": estimate.gross_pay.to_string(),
        }),
        reasoning: format!(
            "gross {} = base {} + overtime {} + night {} + holiday {}, each floored to a whole unit",
            estimate.gross_pay,
            estimate.base_pay,
            estimate.overtime_pay,
            estimate.night_pay,
            estimate.holiday_pay
        ),
    };

    PayEstimateResult {
        estimate,
        audit_step,
    }
}
