//! Work interval model.
//!
//! This module defines the [`WorkInterval`] struct representing a raw
//! clock-in/clock-out pair as captured by the punch endpoints.

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// A raw clock-in/clock-out pair for a single attendance record.
///
/// The interval is ephemeral: it is assembled at clock-out time from the
/// stored clock-in timestamp and the current timestamp, fed to the
/// calculator, and never persisted itself. `clock_out` is normally at or
/// after `clock_in`, but the calculator does not assume it; a non-positive
/// duration degrades to zero worked time rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// When the employee clocked in.
    pub clock_in: NaiveDateTime,
    /// When the employee clocked out.
    pub clock_out: NaiveDateTime,
}

impl WorkInterval {
    /// Creates a new interval from a punch pair.
    pub fn new(clock_in: NaiveDateTime, clock_out: NaiveDateTime) -> Self {
        Self {
            clock_in,
            clock_out,
        }
    }

    /// Returns the whole-minute elapsed time between the punches.
    ///
    /// Fractional seconds are truncated, not rounded, and the result is
    /// negative when `clock_out` precedes `clock_in`.
    ///
    /// # Examples
    ///
    /// ```
    /// use timeclock_engine::models::WorkInterval;
    /// use chrono::NaiveDateTime;
    ///
    /// let interval = WorkInterval::new(
    ///     NaiveDateTime::parse_from_str("2024-06-03 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     NaiveDateTime::parse_from_str("2024-06-03 17:00:30", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// );
    /// assert_eq!(interval.elapsed_minutes(), 540);
    /// ```
    pub fn elapsed_minutes(&self) -> i64 {
        (self.clock_out - self.clock_in).num_minutes()
    }

    /// Returns true when either punch falls on a Saturday or Sunday.
    ///
    /// This is the coarse rest-day rule used for holiday attribution; no
    /// public-holiday calendar is consulted.
    pub fn touches_rest_day(&self) -> bool {
        is_rest_day(self.clock_in.weekday()) || is_rest_day(self.clock_out.weekday())
    }
}

fn is_rest_day(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    /// WI-001: ordinary nine hour punch pair
    #[test]
    fn test_elapsed_minutes_same_day() {
        let interval = WorkInterval::new(
            make_datetime("2024-06-03", "08:00:00"),
            make_datetime("2024-06-03", "17:00:00"),
        );
        assert_eq!(interval.elapsed_minutes(), 540);
    }

    /// WI-002: punch pair crossing midnight
    #[test]
    fn test_elapsed_minutes_crossing_midnight() {
        let interval = WorkInterval::new(
            make_datetime("2024-06-03", "20:00:00"),
            make_datetime("2024-06-04", "02:00:00"),
        );
        assert_eq!(interval.elapsed_minutes(), 360);
    }

    /// WI-003: seconds are truncated, not rounded
    #[test]
    fn test_elapsed_minutes_truncates_seconds() {
        let interval = WorkInterval::new(
            make_datetime("2024-06-03", "08:00:00"),
            make_datetime("2024-06-03", "08:59:59"),
        );
        assert_eq!(interval.elapsed_minutes(), 59);
    }

    /// WI-004: reversed punches yield a negative elapsed time
    #[test]
    fn test_elapsed_minutes_negative_when_reversed() {
        let interval = WorkInterval::new(
            make_datetime("2024-06-03", "17:00:00"),
            make_datetime("2024-06-03", "08:00:00"),
        );
        assert_eq!(interval.elapsed_minutes(), -540);
    }

    #[test]
    fn test_touches_rest_day_weekday() {
        // 2024-06-03 is a Monday
        let interval = WorkInterval::new(
            make_datetime("2024-06-03", "08:00:00"),
            make_datetime("2024-06-03", "17:00:00"),
        );
        assert!(!interval.touches_rest_day());
    }

    #[test]
    fn test_touches_rest_day_saturday() {
        // 2024-06-08 is a Saturday
        let interval = WorkInterval::new(
            make_datetime("2024-06-08", "08:00:00"),
            make_datetime("2024-06-08", "15:00:00"),
        );
        assert!(interval.touches_rest_day());
    }

    #[test]
    fn test_touches_rest_day_friday_into_saturday() {
        // 2024-06-07 is a Friday; clock-out lands on Saturday
        let interval = WorkInterval::new(
            make_datetime("2024-06-07", "22:00:00"),
            make_datetime("2024-06-08", "02:00:00"),
        );
        assert!(interval.touches_rest_day());
    }

    #[test]
    fn test_interval_serialization_round_trip() {
        let interval = WorkInterval::new(
            make_datetime("2024-06-03", "08:00:00"),
            make_datetime("2024-06-03", "17:00:00"),
        );
        let json = serde_json::to_string(&interval).unwrap();
        let deserialized: WorkInterval = serde_json::from_str(&json).unwrap();
        assert_eq!(interval, deserialized);
    }
}
