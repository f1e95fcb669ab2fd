//! Struct definitions and implementations for [`GeoPoint`].
//!
//! A `GeoPoint` is the only coordinate type the library works with.
//! Waypoints and destinations are both plain `GeoPoint`s.

use serde::{Deserialize, Serialize};

/// A [`GeoPoint`] is a value type that represents a geographic
/// position as a latitude/longitude pair in degrees.
///
/// The valid range is latitude in [-90, 90] and longitude in
/// [-180, 180]. The ordering core does not enforce it; see
/// [`RouteEngine::validate`](`crate::router::engine::RouteEngine::validate`).
///
/// `f64` is used so that the 6-decimal precision (0.000001, about
/// 0.11 m at the equator) used for deduplication survives for any
/// longitude.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct GeoPoint {
    /// The latitude of the point.
    #[serde(alias = "lat")]
    pub latitude: f64,

    /// The longitude of the point.
    #[serde(alias = "lng")]
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a new point from a latitude and a longitude.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    /// Returns `true` if both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Returns `true` if the point lies within the geographic bounds.
    pub fn is_in_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// Converts a `(latitude, longitude)` tuple.
    fn from((latitude, longitude): (f64, f64)) -> Self {
        GeoPoint::new(latitude, longitude)
    }
}

#[cfg(test)]
mod location_tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(GeoPoint::new(90.0, -180.0).is_in_bounds());
        assert!(GeoPoint::new(6.213620, -75.578351).is_in_bounds());
        assert!(!GeoPoint::new(90.5, 0.0).is_in_bounds());
        assert!(!GeoPoint::new(0.0, 180.1).is_in_bounds());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_in_bounds());
    }

    #[test]
    fn test_is_finite() {
        assert!(GeoPoint::new(0.0, 0.0).is_finite());
        assert!(!GeoPoint::new(f64::INFINITY, 0.0).is_finite());
        assert!(!GeoPoint::new(0.0, f64::NAN).is_finite());
    }

    /// The short field names used by upstream callers are accepted.
    #[test]
    fn test_deserialize_aliases() {
        let long: GeoPoint =
            serde_json::from_str(r#"{"latitude": 37.7749, "longitude": -122.4194}"#).unwrap();
        let short: GeoPoint =
            serde_json::from_str(r#"{"lat": 37.7749, "lng": -122.4194}"#).unwrap();
        assert_eq!(long, short);
        assert_eq!(long, GeoPoint::new(37.7749, -122.4194));
    }

    #[test]
    fn test_serialize_uses_long_names() {
        let json = serde_json::to_value(GeoPoint::new(1.5, -2.25)).unwrap();
        assert_eq!(json, serde_json::json!({"latitude": 1.5, "longitude": -2.25}));
    }
}
