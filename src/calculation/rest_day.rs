//! Rest-day (holiday) attribution.
//!
//! When either punch lands on a Saturday or Sunday the entire worked
//! duration is attributed to holiday pay. This is deliberately coarse: no
//! public-holiday calendar is consulted.

use crate::models::{AuditStep, WorkInterval};

/// The result of the rest-day attribution.
#[derive(Debug, Clone)]
pub struct HolidayMinutesResult {
    /// Worked minutes attributed to holiday pay; all-or-nothing.
    pub minutes: i64,
    /// The audit step recording this attribution.
    pub audit_step: AuditStep,
}

/// Attributes worked minutes to holiday pay when the interval touches a
/// weekend.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::calculate_holiday_minutes;
/// use timeclock_engine::models::WorkInterval;
/// use chrono::NaiveDateTime;
///
/// // 2024-06-08 is a Saturday.
/// let interval = WorkInterval::new(
///     NaiveDateTime::parse_from_str("2024-06-08 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2024-06-08 15:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// );
/// let result = calculate_holiday_minutes(&interval, 400, 1);
/// assert_eq!(result.minutes, 400);
/// ```
pub fn calculate_holiday_minutes(
    interval: &WorkInterval,
    worked_minutes: i64,
    step_number: u32,
) -> HolidayMinutesResult {
    let on_rest_day = interval.touches_rest_day();
    let minutes = if on_rest_day { worked_minutes } else { 0 };

    let audit_step = AuditStep {
        step_number,
        rule_id: "holiday_minutes".to_string(),
        rule_name: "Rest Day Attribution".to_string(),
        input: serde_json::json!({
            "clock_in_weekday": interval.clock_in.format("%A").to_string(),
            "clock_out_weekday": interval.clock_out.format("%A").to_string(),
            "worked_minutes": worked_minutes,
        }),
        output: serde_json::json!({
            "on_rest_day": on_rest_day,
            "holiday_minutes": minutes,
        }),
        reasoning: if on_rest_day {
            format!(
                "punch touches a weekend, all {} worked minute(s) attributed to holiday pay",
                worked_minutes
            )
        } else {
            "both punches fall on weekdays, no holiday minutes".to_string()
        },
    };

    HolidayMinutesResult {
        minutes,
        audit_step,
    }
}
