//! Work-time breakdown models.
//!
//! This module defines the calculator's structured output: the per-slot
//! break details and the aggregate [`WorkTimeBreakdown`] that downstream
//! code persists onto the attendance record.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A break slot as applied to a concrete work interval.
///
/// One detail is emitted per configured slot, including slots with zero
/// overlap, so the persisted record always mirrors the policy it was
/// calculated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakDetail {
    /// The configured label of the slot, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The configured slot start as a wall-clock time.
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// The configured slot end as a wall-clock time.
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    /// The whole minutes of this slot that actually overlapped the interval.
    pub actual_minutes: i64,
}

/// The structured result of a work-time calculation.
///
/// Invariants: `worked_minutes = max(0, elapsed − break_minutes)` and
/// `overtime_minutes = max(0, worked_minutes − standard threshold)`.
/// `night_minutes` and `holiday_minutes` are not capped against each other;
/// a night shift on a weekend is flagged through an audit warning rather
/// than silently adjusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTimeBreakdown {
    /// Worked minutes after break subtraction, clamped at zero.
    pub worked_minutes: i64,
    /// Worked minutes beyond the standard-day threshold.
    pub overtime_minutes: i64,
    /// Worked minutes falling inside the configured night window.
    pub night_minutes: i64,
    /// Worked minutes attributed to a rest day (Saturday/Sunday punch).
    pub holiday_minutes: i64,
    /// Total unpaid break minutes subtracted from elapsed time.
    pub break_minutes: i64,
    /// Per-slot application of the break policy, in policy order.
    pub break_details: Vec<BreakDetail>,
}

impl WorkTimeBreakdown {
    /// A breakdown with every field zeroed and no break details.
    pub fn zero() -> Self {
        Self {
            worked_minutes: 0,
            overtime_minutes: 0,
            night_minutes: 0,
            holiday_minutes: 0,
            break_minutes: 0,
            break_details: Vec::new(),
        }
    }
}

/// Serde adapter for wall-clock times in "HH:MM" form.
///
/// Break slots are configured and persisted as naive-of-date clock times;
/// this keeps the wire format aligned with the configuration format.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    /// Serializes a time as "HH:MM".
    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    /// Deserializes a time from "HH:MM", rejecting malformed values.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
