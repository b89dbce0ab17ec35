//! Calculation logic for the time-clock engine.
//!
//! This module contains the geofence distance and containment checks, the
//! shared interval-overlap arithmetic, break policy resolution, overtime
//! detection, night-window overlap, rest-day attribution, the composing
//! work-time calculation, and pay estimation.

mod break_resolution;
mod geofence;
mod night_window;
mod overlap;
mod overtime;
mod pay_estimate;
mod rest_day;
mod work_time;

pub use break_resolution::{BreakResolution, resolve_breaks};
pub use geofence::{EARTH_RADIUS_METERS, distance_meters, is_within_geofence};
pub use night_window::{NightMinutesResult, calculate_night_minutes};
pub use overlap::overlap_minutes;
pub use overtime::{OvertimeDetection, STANDARD_DAY_MINUTES, detect_overtime};
pub use pay_estimate::{PayEstimateResult, estimate_pay};
pub use rest_day::{HolidayMinutesResult, calculate_holiday_minutes};
pub use work_time::{WorkTimeCalculation, calculate_work_time};
