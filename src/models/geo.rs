//! GPS coordinate and geofence models.
//!
//! These are plain value types constructed fresh per request; they have no
//! lifecycle beyond a single geofence evaluation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GPS coordinate in decimal degrees.
///
/// Latitude/longitude ranges are the caller's responsibility; the engine
/// does not clamp or reject out-of-range values. A live device reading may
/// carry accuracy and capture-time metadata, both optional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Reported horizontal accuracy in meters, if the device supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_meters: Option<f64>,
    /// When the reading was captured, if the device supplied it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl GeoPoint {
    /// Creates a bare coordinate with no reading metadata.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_meters: None,
            recorded_at: None,
        }
    }
}

/// A circular geofence around a worksite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeofenceSpec {
    /// The center of the fence, normally the site's registered coordinates.
    pub center: GeoPoint,
    /// The fence radius in meters.
    pub radius_meters: f64,
}
