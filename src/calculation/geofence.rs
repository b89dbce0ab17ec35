//! Geofence evaluation.
//!
//! This module provides the great-circle distance between two coordinates
//! and the containment test that gates clock-in/clock-out punches. The
//! haversine formula is used: fence radii are small enough that curvature
//! error is negligible, yet the formula stays globally correct near the
//! poles and the antimeridian without special cases.

use crate::models::{GeoPoint, GeofenceSpec};

/// Mean Earth radius in meters, as used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Computes the great-circle distance between two coordinates in meters.
///
/// Total over finite numeric input. Coordinate range validation is the
/// caller's responsibility; out-of-range values are neither clamped nor
/// rejected.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::distance_meters;
/// use timeclock_engine::models::GeoPoint;
///
/// let a = GeoPoint::new(35.681236, 139.767125);
/// assert_eq!(distance_meters(&a, &a), 0.0);
/// ```
pub fn distance_meters(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_METERS * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Returns true when `point` lies within `fence`, boundary inclusive.
///
/// # Examples
///
/// ```
/// use timeclock_engine::calculation::is_within_geofence;
/// use timeclock_engine::models::{GeoPoint, GeofenceSpec};
///
/// let site = GeoPoint::new(35.681236, 139.767125);
/// let fence = GeofenceSpec { center: site, radius_meters: 0.0 };
/// assert!(is_within_geofence(&site, &fence));
/// ```
pub fn is_within_geofence(point: &GeoPoint, fence: &GeofenceSpec) -> bool {
    distance_meters(point, &fence.center) <= fence.radius_meters
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tokyo Station forecourt.
    const SITE_LAT: f64 = 35.681236;
    const SITE_LNG: f64 = 139.767125;

    fn site() -> GeoPoint {
        GeoPoint::new(SITE_LAT, SITE_LNG)
    }

    /// A reading roughly 50 m due north of the site.
    fn reading_50m_north() -> GeoPoint {
        GeoPoint::new(SITE_LAT + 0.000449, SITE_LNG)
    }

    #[test]
    fn test_zero_distance_to_self() {
        assert_eq!(distance_meters(&site(), &site()), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = site();
        let b = reading_50m_north();
        let forward = distance_meters(&a, &b);
        let backward = distance_meters(&b, &a);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_distance_50m_offset() {
        let d = distance_meters(&site(), &reading_50m_north());
        assert!(d > 45.0 && d < 55.0, "expected ~50m, got {}", d);
    }

    #[test]
    fn test_one_degree_longitude_at_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let d = distance_meters(&a, &b);
        // One degree of arc on the mean sphere is ~111.195 km.
        assert!((d - 111_195.0).abs() < 100.0, "got {}", d);
    }

    #[test]
    fn test_antimeridian_crossing() {
        let a = GeoPoint::new(0.0, 179.9);
        let b = GeoPoint::new(0.0, -179.9);
        let d = distance_meters(&a, &b);
        // 0.2 degrees of arc, not 359.8.
        assert!(d < 23_000.0, "got {}", d);
    }

    #[test]
    fn test_within_generous_radius() {
        let fence = GeofenceSpec {
            center: site(),
            radius_meters: 100.0,
        };
        assert!(is_within_geofence(&reading_50m_north(), &fence));
    }

    #[test]
    fn test_outside_tight_radius() {
        let fence = GeofenceSpec {
            center: site(),
            radius_meters: 10.0,
        };
        assert!(!is_within_geofence(&reading_50m_north(), &fence));
    }

    #[test]
    fn test_zero_radius_contains_center() {
        let fence = GeofenceSpec {
            center: site(),
            radius_meters: 0.0,
        };
        assert!(is_within_geofence(&site(), &fence));
    }
}
