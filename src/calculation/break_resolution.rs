//! Break policy resolution.
//!
//! This module anchors the policy's naive-of-date break slots onto the
//! concrete punch interval and computes how many minutes of each slot were
//! actually taken out of the interval.

use chrono::{Duration, NaiveDateTime};

use crate::config::BreakPolicy;
use crate::models::{AuditStep, BreakDetail, WorkInterval};

use super::overlap::overlap_minutes;

/// The result of resolving a break policy against a punch interval.
#[derive(Debug, Clone)]
pub struct BreakResolution {
    /// One detail per configured slot, in policy order, zero-overlap slots
    /// included.
    pub details: Vec<BreakDetail>,
    /// The clipped break windows that actually overlapped the interval.
    /// These are reused verbatim by the night-minutes subtraction so both
    /// computations share one overlap algorithm.
    pub windows: Vec<(NaiveDateTime, NaiveDateTime)>,
    /// Sum of all detail minutes.
    pub total_minutes: i64,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves each break slot against the punch interval.
///
/// Each slot's clock times are anchored to the calendar date of the
/// clock-in. A slot whose end is numerically before its start wraps past
/// midnight; a slot that ended entirely before the clock-in is advanced a
/// full day, so a late punch-in still meets the following night's window.
/// The overlap with `[clock_in, clock_out]` is then clipped and truncated
/// to whole minutes.
///
/// Reversed or zero-length intervals simply produce zero-minute details;
/// resolution never fails.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::resolve_breaks;
/// use timeclock_engine::config::{BreakPolicy, BreakSlot};
/// use timeclock_engine::models::WorkInterval;
/// use chrono::{NaiveDateTime, NaiveTime};
///
/// let interval = WorkInterval::new(
///     NaiveDateTime::parse_from_str("2024-06-03 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2024-06-03 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// );
/// let policy = BreakPolicy {
///     version: 1,
///     slots: vec![BreakSlot {
///         start: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
///         end: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
///         name: Some("lunch".to_string()),
///     }],
/// };
///
/// let resolution = resolve_breaks(&interval, &policy, 1);
/// assert_eq!(resolution.total_minutes, 60);
/// ```
pub fn resolve_breaks(
    interval: &WorkInterval,
    policy: &BreakPolicy,
    step_number: u32,
) -> BreakResolution {
    let mut details = Vec::with_capacity(policy.slots.len());
    let mut windows = Vec::new();
    let mut total_minutes = 0i64;

    for slot in &policy.slots {
        let mut slot_start = interval.clock_in.date().and_time(slot.start);
        let mut slot_end = interval.clock_in.date().and_time(slot.end);

        // A slot whose end precedes its start wraps past midnight.
        if slot_end < slot_start {
            slot_end += Duration::days(1);
        }

        // A slot that finished before the clock-in belongs to the next
        // calendar day relative to this punch.
        if slot_end < interval.clock_in {
            slot_start += Duration::days(1);
            slot_end += Duration::days(1);
        }

        let actual_minutes = overlap_minutes(
            slot_start,
            slot_end,
            interval.clock_in,
            interval.clock_out,
        );

        if actual_minutes > 0 {
            windows.push((
                slot_start.max(interval.clock_in),
                slot_end.min(interval.clock_out),
            ));
        }

        total_minutes += actual_minutes;
        details.push(BreakDetail {
            name: slot.name.clone(),
            start: slot.start,
            end: slot.end,
            actual_minutes,
        });
    }

    let applied: Vec<serde_json::Value> = details
        .iter()
        .map(|d| {
            serde_json::json!({
                "name": d.name,
                "start": d.start.format("%H:%M").to_string(),
                "end": d.end.format("%H:%M").to_string(),
                "actual_minutes": d.actual_minutes,
            })
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "break_resolution".to_string(),
        rule_name: "Break Policy Resolution".to_string(),
        input: serde_json::json!({
            "slot_count": policy.slots.len(),
            "clock_in": interval.clock_in.to_string(),
            "clock_out": interval.clock_out.to_string(),
        }),
        output: serde_json::json!({
            "break_minutes": total_minutes,
            "details": applied,
        }),
        reasoning: format!(
            "{} of {} configured slot(s) overlapped the interval for {} break minute(s)",
            windows.len(),
            policy.slots.len(),
            total_minutes
        ),
    };

    BreakResolution {
        details,
        windows,
        total_minutes,
        audit_step,
    }
}
