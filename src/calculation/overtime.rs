//! Overtime detection.
//!
//! Splits worked minutes into regular minutes (up to the standard-day
//! threshold) and overtime minutes (the excess).

use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Default standard working day in minutes (8 hours).
pub const STANDARD_DAY_MINUTES: i64 = 480;

/// The result of splitting worked minutes at the overtime threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeDetection {
    /// Worked minutes up to the threshold.
    pub regular_minutes: i64,
    /// Worked minutes beyond the threshold, zero when under it.
    pub overtime_minutes: i64,
    /// The audit step recording this detection.
    pub audit_step: AuditStep,
}

/// Detects whether worked minutes exceed the standard-day threshold.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::{detect_overtime, STANDARD_DAY_MINUTES};
///
/// let detection = detect_overtime(660, STANDARD_DAY_MINUTES, 1);
/// assert_eq!(detection.regular_minutes, 480);
/// assert_eq!(detection.overtime_minutes, 180);
/// ```
pub fn detect_overtime(
    worked_minutes: i64,
    threshold_minutes: i64,
    step_number: u32,
) -> OvertimeDetection {
    let regular_minutes = worked_minutes.min(threshold_minutes);
    let overtime_minutes = (worked_minutes - threshold_minutes).max(0);

    let reasoning = if overtime_minutes > 0 {
        format!(
            "{} worked minutes exceeds the {} minute threshold by {} minutes",
            worked_minutes, threshold_minutes, overtime_minutes
        )
    } else {
        format!(
            "{} worked minutes is within the {} minute threshold, no overtime",
            worked_minutes, threshold_minutes
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_detection".to_string(),
        rule_name: "Overtime Detection".to_string(),
        input: serde_json::json!({
            "worked_minutes": worked_minutes,
            "threshold_minutes": threshold_minutes,
        }),
        output: serde_json::json!({
            "regular_minutes": regular_minutes,
            "overtime_minutes": overtime_minutes,
        }),
        reasoning,
    };

    OvertimeDetection {
        regular_minutes,
        overtime_minutes,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// OT-001: exactly at threshold, no overtime
    #[test]
    fn test_exactly_at_threshold() {
        let detection = detect_overtime(480, STANDARD_DAY_MINUTES, 1);
        assert_eq!(detection.regular_minutes, 480);
        assert_eq!(detection.overtime_minutes, 0);
    }

    /// OT-002: three hours over
    #[test]
    fn test_over_threshold() {
        let detection = detect_overtime(660, STANDARD_DAY_MINUTES, 1);
        assert_eq!(detection.regular_minutes, 480);
        assert_eq!(detection.overtime_minutes, 180);
    }

    /// OT-003: short day
    #[test]
    fn test_under_threshold() {
        let detection = detect_overtime(360, STANDARD_DAY_MINUTES, 1);
        assert_eq!(detection.regular_minutes, 360);
        assert_eq!(detection.overtime_minutes, 0);
    }

    /// OT-004: zero worked minutes
    #[test]
    fn test_zero_worked() {
        let detection = detect_overtime(0, STANDARD_DAY_MINUTES, 1);
        assert_eq!(detection.regular_minutes, 0);
        assert_eq!(detection.overtime_minutes, 0);
    }

    #[test]
    fn test_custom_threshold() {
        let detection = detect_overtime(500, 420, 1);
        assert_eq!(detection.regular_minutes, 420);
        assert_eq!(detection.overtime_minutes, 80);
    }

    #[test]
    fn test_audit_step_mentions_threshold() {
        let detection = detect_overtime(660, STANDARD_DAY_MINUTES, 4);
        assert_eq!(detection.audit_step.step_number, 4);
        assert!(detection.audit_step.reasoning.contains("480 minute threshold"));
    }
}
