//! Request types for the time-clock engine API.
//!
//! This module defines the JSON request structures for the `/timesheet`
//! and `/geofence/check` endpoints.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::BreakPolicy;
use crate::models::{GeoPoint, GeofenceSpec, WorkInterval};

/// Request body for the `/timesheet` endpoint.
///
/// Contains the punch pair to calculate, plus optional per-request
/// overrides: a break policy (the configured default applies otherwise),
/// an hourly wage to trigger pay estimation, and a location reading plus
/// site fence to trigger a geofence check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetRequest {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The clock-in timestamp (site-local, naive).
    pub clock_in: NaiveDateTime,
    /// The clock-out timestamp (site-local, naive).
    pub clock_out: NaiveDateTime,
    /// Break policy override for this calculation.
    #[serde(default)]
    pub break_policy: Option<BreakPolicy>,
    /// Hourly wage; when present a pay estimate is included.
    #[serde(default)]
    pub hourly_wage: Option<Decimal>,
    /// Location reading for the clock-out punch.
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// The site geofence to evaluate the reading against.
    #[serde(default)]
    pub site: Option<GeofenceSpec>,
}

impl TimesheetRequest {
    /// Returns the punch pair as a work interval.
    pub fn interval(&self) -> WorkInterval {
        WorkInterval::new(self.clock_in, self.clock_out)
    }
}

/// Request body for the `/geofence/check` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeofenceRequest {
    /// The location reading to test.
    pub point: GeoPoint,
    /// The site geofence.
    pub fence: GeofenceSpec,
}
