//! Interval overlap arithmetic.
//!
//! Every overlap in the engine (break windows against the punch interval,
//! and both of those against the nightly premium window) goes through the
//! single function here, so break subtraction and night counting can never
//! disagree on boundary conditions.

use chrono::NaiveDateTime;

/// Returns the whole minutes shared by `[a_start, a_end]` and
/// `[b_start, b_end]`, or zero when they do not overlap.
///
/// Fractional seconds in the clipped window are truncated, matching the
/// elapsed-minutes rule.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::overlap_minutes;
/// use chrono::NaiveDateTime;
///
/// let t = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(
///     overlap_minutes(
///         t("2024-06-03 12:00:00"), t("2024-06-03 13:00:00"),
///         t("2024-06-03 08:00:00"), t("2024-06-03 17:00:00"),
///     ),
///     60
/// );
/// ```
pub fn overlap_minutes(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> i64 {
    let start = a_start.max(b_start);
    let end = a_end.min(b_end);
    if end > start {
        (end - start).num_minutes()
    } else {
        0
    }
}
