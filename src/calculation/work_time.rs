//! Work-time calculation.
//!
//! Composes elapsed-time truncation, break resolution, overtime detection,
//! night-window overlap and rest-day attribution into the structured
//! [`WorkTimeBreakdown`] persisted onto an attendance record.

use crate::config::{BreakPolicy, WorkPolicy};
use crate::models::{AuditStep, AuditWarning, WorkInterval, WorkTimeBreakdown};

use super::break_resolution::resolve_breaks;
use super::night_window::calculate_night_minutes;
use super::overtime::detect_overtime;
use super::rest_day::calculate_holiday_minutes;

/// The result of a work-time calculation: the breakdown plus the audit
/// steps and warnings produced along the way.
#[derive(Debug, Clone)]
pub struct WorkTimeCalculation {
    /// The structured breakdown.
    pub breakdown: WorkTimeBreakdown,
    /// Audit steps, in execution order.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings for absorbed anomalies and flagged policy questions.
    pub warnings: Vec<AuditWarning>,
}

/// Calculates the work-time breakdown for a punch interval.
///
/// This function is total: malformed input (reversed punches, empty
/// policies) degrades to zero-valued fields rather than an error, so a
/// data anomaly can never block payroll. Anomalies are reported through
/// the returned warnings instead.
///
/// Night and holiday minutes are each counted independently against
/// worked minutes; a night shift on a weekend earns both and is flagged
/// with a `PREMIUM_OVERLAP` warning rather than capped, because the
/// intended stacking policy is a payroll decision, not an engine one.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::calculate_work_time;
/// use timeclock_engine::config::{BreakPolicy, WorkPolicy};
/// use timeclock_engine::models::WorkInterval;
/// use chrono::NaiveDateTime;
///
/// let interval = WorkInterval::new(
///     NaiveDateTime::parse_from_str("2024-06-03 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2024-06-03 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// );
/// let result = calculate_work_time(&interval, &BreakPolicy::default(), &WorkPolicy::default());
/// assert_eq!(result.breakdown.worked_minutes, 540);
/// ```
pub fn calculate_work_time(
    interval: &WorkInterval,
    break_policy: &BreakPolicy,
    work_policy: &WorkPolicy,
) -> WorkTimeCalculation {
    let mut audit_steps = Vec::new();
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    // Step 1: elapsed minutes, truncated.
    let elapsed_minutes = interval.elapsed_minutes();
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "elapsed_time".to_string(),
        rule_name: "Elapsed Time".to_string(),
        input: serde_json::json!({
            "clock_in": interval.clock_in.to_string(),
            "clock_out": interval.clock_out.to_string(),
        }),
        output: serde_json::json!({ "elapsed_minutes": elapsed_minutes }),
        reasoning: format!(
            "whole-minute difference between punches is {} minute(s)",
            elapsed_minutes
        ),
    });
    step_number += 1;

    if elapsed_minutes < 0 {
        warnings.push(AuditWarning {
            code: "CLOCK_ANOMALY".to_string(),
            message: format!(
                "clock-out precedes clock-in by {} minute(s); worked time clamped to zero",
                -elapsed_minutes
            ),
            severity: "high".to_string(),
        });
    }

    // Step 2: break resolution.
    let breaks = resolve_breaks(interval, break_policy, step_number);
    audit_steps.push(breaks.audit_step.clone());
    step_number += 1;

    // Steps 3-4: worked minutes and the overtime split.
    let worked_minutes = (elapsed_minutes - breaks.total_minutes).max(0);
    let overtime = detect_overtime(worked_minutes, work_policy.standard_day_minutes, step_number);
    audit_steps.push(overtime.audit_step.clone());
    step_number += 1;

    // Step 5: night minutes, sharing the clipped break windows.
    let night = calculate_night_minutes(
        interval,
        &breaks.windows,
        &work_policy.night_window,
        step_number,
    );
    audit_steps.push(night.audit_step.clone());
    step_number += 1;

    // Step 6: rest-day attribution.
    let holiday = calculate_holiday_minutes(interval, worked_minutes, step_number);
    audit_steps.push(holiday.audit_step.clone());
    step_number += 1;

    if night.minutes > 0 && holiday.minutes > 0 {
        warnings.push(AuditWarning {
            code: "PREMIUM_OVERLAP".to_string(),
            message: format!(
                "{} night minute(s) and {} holiday minute(s) both counted; stacking policy unconfirmed",
                night.minutes, holiday.minutes
            ),
            severity: "medium".to_string(),
        });
    }

    let breakdown = WorkTimeBreakdown {
        worked_minutes,
        overtime_minutes: overtime.overtime_minutes,
        night_minutes: night.minutes,
        holiday_minutes: holiday.minutes,
        break_minutes: breaks.total_minutes,
        break_details: breaks.details,
    };

    audit_steps.push(AuditStep {
        step_number,
        rule_id: "work_time_summary".to_string(),
        rule_name: "Work Time Summary".to_string(),
        input: serde_json::json!({
            "elapsed_minutes": elapsed_minutes,
            "break_minutes": breakdown.break_minutes,
        }),
        output: serde_json::json!({
            "worked_minutes": breakdown.worked_minutes,
            "overtime_minutes": breakdown.overtime_minutes,
            "night_minutes": breakdown.night_minutes,
            "holiday_minutes": breakdown.holiday_minutes,
        }),
        reasoning: format!(
            "{} worked minute(s) = max(0, {} elapsed - {} break)",
            breakdown.worked_minutes, elapsed_minutes, breakdown.break_minutes
        ),
    });

    WorkTimeCalculation {
        breakdown,
        audit_steps,
        warnings,
    }
}
