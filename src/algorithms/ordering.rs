//! Orders waypoints by their progress toward a destination.
//!
//! Every waypoint is projected onto a single axis that runs from the
//! centroid of all waypoints to the destination. Points are visited in
//! ascending order of that projection. When two points project to the
//! same value, the one farther from the destination goes first.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;

use crate::{
    error::RouteError,
    haversine,
    location::GeoPoint,
    utils::{dedup::deduplicate, vector},
};

/// A waypoint together with its sort keys.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct ScoredPoint {
    pub point: GeoPoint,

    /// Signed position along the centroid -> destination axis, in degrees.
    pub progress: f64,

    /// Great-circle distance to the destination in kilometers.
    pub distance: f64,
}

/// Computes the coordinate-wise mean of `points`.
///
/// Returns [`None`] for an empty slice.
pub fn centroid(points: &[GeoPoint]) -> Option<GeoPoint> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let latitude = points.iter().map(|p| p.latitude).sum::<f64>() / n;
    let longitude = points.iter().map(|p| p.longitude).sum::<f64>() / n;
    Some(GeoPoint::new(latitude, longitude))
}

/// Scores each point against the axis from the centroid of `points` to
/// `destination`. An empty input yields no scores.
pub(crate) fn score_points(points: &[GeoPoint], destination: &GeoPoint) -> Vec<ScoredPoint> {
    let Some(center) = centroid(points) else {
        return Vec::new();
    };
    let direction = vector::vector(&center, destination);
    debug!("center: {:?}", center);
    debug!("direction: {:?}", direction);

    points
        .iter()
        .map(|point| ScoredPoint {
            point: *point,
            progress: vector::progress(point, &center, direction),
            distance: haversine::distance(point, destination),
        })
        .collect()
}

/// Deduplicates `points` and returns them in visiting order.
///
/// # Arguments
/// * `points` - The waypoints to visit. Must not be empty.
/// * `destination` - The final target; only used as a reference.
///
/// # Returns
/// A permutation of the deduplicated waypoints, sorted ascending by
/// progress and then descending by distance to `destination`. Points
/// that tie on both keys keep their deduplicated order.
///
/// # Errors
/// [`RouteError::NoPoints`] if `points` is empty.
///
/// # Time Complexity
/// *O*(*n* log *n*) in the number of waypoints.
pub fn order_route(
    points: &[GeoPoint],
    destination: &GeoPoint,
) -> Result<Vec<GeoPoint>, RouteError> {
    if points.is_empty() {
        return Err(RouteError::NoPoints);
    }

    let unique = deduplicate(points);
    if unique.len() == 1 {
        debug!("single unique point, nothing to order");
        return Ok(unique);
    }

    let mut scored = score_points(&unique, destination);
    scored.sort_by_key(|s| (OrderedFloat(s.progress), Reverse(OrderedFloat(s.distance))));
    debug!("scored: {:?}", scored);

    Ok(scored.into_iter().map(|s| s.point).collect())
}
