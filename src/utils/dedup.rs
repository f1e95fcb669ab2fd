//! Collapses waypoints that coincide at a fixed decimal precision.

use indexmap::IndexMap;

use crate::location::GeoPoint;

/// Number of decimal places two points must agree on to be duplicates.
pub const DEDUP_PRECISION: usize = 6;

/// Formats both coordinates with [`DEDUP_PRECISION`] decimals, as
/// `"lat|lng"`.
///
/// Rounding is done on the exact value stored in the `f64`, not on a
/// scaled copy, so `173.5475895` (stored just below the half) keys as
/// `173.547589`. The sign is kept: `-0.0` and anything that rounds to
/// it, such as `-0.0000001`, key apart from `0.0`.
pub fn dedup_key(point: &GeoPoint) -> String {
    format!(
        "{:.*}|{:.*}",
        DEDUP_PRECISION, point.latitude, DEDUP_PRECISION, point.longitude
    )
}

/// Removes duplicate waypoints.
///
/// Unique keys come out in the order they were first seen. When two
/// points share a key, the later point's value is the one kept.
pub fn deduplicate(points: &[GeoPoint]) -> Vec<GeoPoint> {
    let mut unique: IndexMap<String, GeoPoint> = IndexMap::with_capacity(points.len());
    for point in points {
        unique.insert(dedup_key(point), *point);
    }
    debug!(
        "deduplicate: {} points in, {} unique",
        points.len(),
        unique.len()
    );
    unique.into_values().collect()
}

#[cfg(test)]
mod dedup_tests {
    use super::*;

    #[test]
    fn test_key_rounds_to_six_decimals() {
        assert_eq!(
            dedup_key(&GeoPoint::new(6.2136208770, -75.5783512597)),
            "6.213621|-75.578351"
        );
    }

    /// Seven-decimal inputs round on the stored value, so these pairs
    /// collapse even though scaling by 10^6 first would split them.
    #[test]
    fn test_seven_decimal_inputs_collapse() {
        let pairs = [
            (GeoPoint::new(173.5475895, 0.0), GeoPoint::new(173.547589, 0.0)),
            (GeoPoint::new(-169.7949085, 0.0), GeoPoint::new(-169.794908, 0.0)),
            (GeoPoint::new(0.0, 173.5475895), GeoPoint::new(0.0, 173.547589)),
        ];
        for (a, b) in pairs {
            assert_eq!(dedup_key(&a), dedup_key(&b));
            assert_eq!(deduplicate(&[a, b]), vec![b]);
        }
    }

    /// Negative zero keeps its sign, like values that round to it.
    #[test]
    fn test_negative_zero_keys_apart() {
        let zero = GeoPoint::new(0.0, 10.0);
        let negative_zero = GeoPoint::new(-0.0, 10.0);
        let tiny_negative = GeoPoint::new(-0.0000001, 10.0);

        assert_ne!(dedup_key(&zero), dedup_key(&negative_zero));
        assert_eq!(dedup_key(&negative_zero), dedup_key(&tiny_negative));
        assert_eq!(deduplicate(&[zero, negative_zero, tiny_negative]).len(), 2);
    }

    #[test]
    fn test_no_duplicates_kept_as_is() {
        let points = vec![
            GeoPoint::new(37.777843, -122.468207),
            GeoPoint::new(37.778339, -122.460395),
            GeoPoint::new(37.780596, -122.434904),
        ];
        assert_eq!(deduplicate(&points), points);
    }

    /// Points that differ below the sixth decimal collapse to one,
    /// and the later value wins.
    #[test]
    fn test_collapse_last_write_wins() {
        let first = GeoPoint::new(10.0000001, 20.0000001);
        let second = GeoPoint::new(10.0000002, 20.0000002);
        let unique = deduplicate(&[first, second]);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0], second);
    }

    /// The surviving value takes the slot of the key's first occurrence.
    #[test]
    fn test_first_seen_key_order() {
        let a = GeoPoint::new(1.0, 1.0);
        let b = GeoPoint::new(2.0, 2.0);
        let a_again = GeoPoint::new(1.0000001, 1.0);
        let unique = deduplicate(&[a, b, a_again]);
        assert_eq!(unique, vec![a_again, b]);
    }

    #[test]
    fn test_points_one_step_apart_stay_distinct() {
        let points = [GeoPoint::new(1.000001, 1.0), GeoPoint::new(1.000002, 1.0)];
        assert_eq!(deduplicate(&points).len(), 2);
    }

    #[test]
    fn test_empty() {
        assert!(deduplicate(&[]).is_empty());
    }
}
