//! Night-minutes calculation.
//!
//! Counts the worked minutes that fall inside the configured nightly
//! premium window (22:00–05:00 by default). The punch interval is
//! overlapped against each night's window, and the already-clipped break
//! windows are overlapped against the same windows and subtracted, so
//! break time is never double-counted as worked night time. Both overlaps
//! use the one shared overlap routine.

use chrono::{Duration, NaiveDateTime};

use crate::config::NightWindow;
use crate::models::{AuditStep, WorkInterval};

use super::overlap::overlap_minutes;

/// The result of the night-minutes calculation.
#[derive(Debug, Clone)]
pub struct NightMinutesResult {
    /// Worked minutes inside the night window, breaks subtracted, ≥ 0.
    pub minutes: i64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates worked night minutes for a punch interval.
///
/// `break_windows` must be the clipped break windows produced by break
/// resolution for the same interval; passing an empty slice skips the
/// subtraction.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::calculate_night_minutes;
/// use timeclock_engine::config::NightWindow;
/// use timeclock_engine::models::WorkInterval;
/// use chrono::NaiveDateTime;
///
/// let interval = WorkInterval::new(
///     NaiveDateTime::parse_from_str("2024-06-03 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2024-06-04 02:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// );
/// let result = calculate_night_minutes(&interval, &[], &NightWindow::default(), 1);
/// assert_eq!(result.minutes, 240); // 22:00-02:00
/// ```
pub fn calculate_night_minutes(
    interval: &WorkInterval,
    break_windows: &[(NaiveDateTime, NaiveDateTime)],
    window: &NightWindow,
    step_number: u32,
) -> NightMinutesResult {
    let mut raw_minutes = 0i64;
    let mut break_minutes = 0i64;

    if interval.clock_out > interval.clock_in {
        // A window that opened the evening before the clock-in can still
        // cover its early-morning hours, so start one day back.
        let mut day = interval.clock_in.date() - Duration::days(1);
        let last = interval.clock_out.date();

        while day <= last {
            let window_start = day.and_time(window.start);
            let window_end = if window.end < window.start {
                (day + Duration::days(1)).and_time(window.end)
            } else {
                day.and_time(window.end)
            };

            raw_minutes += overlap_minutes(
                interval.clock_in,
                interval.clock_out,
                window_start,
                window_end,
            );

            for (break_start, break_end) in break_windows {
                break_minutes +=
                    overlap_minutes(*break_start, *break_end, window_start, window_end);
            }

            day += Duration::days(1);
        }
    }

    let minutes = (raw_minutes - break_minutes).max(0);

    let audit_step = AuditStep {
        step_number,
        rule_id: "night_minutes".to_string(),
        rule_name: "Night Window Overlap".to_string(),
        input: serde_json::json!({
            "clock_in": interval.clock_in.to_string(),
            "clock_out": interval.clock_out.to_string(),
            "window_start": window.start.format("%H:%M").to_string(),
            "window_end": window.end.format("%H:%M").to_string(),
            "break_window_count": break_windows.len(),
        }),
        output: serde_json::json!({
            "raw_night_minutes": raw_minutes,
            "night_break_minutes": break_minutes,
            "night_minutes": minutes,
        }),
        reasoning: format!(
            "{} raw night minute(s) less {} break minute(s) inside the window",
            raw_minutes, break_minutes
        ),
    };

    NightMinutesResult {
        minutes,
        audit_step,
    }
}
