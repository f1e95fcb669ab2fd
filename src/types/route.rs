//! Request and result types exchanged with the route engine.

use serde::{Deserialize, Serialize};

use super::location::GeoPoint;

/// The waypoints to visit and the destination that sets the direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Waypoints, in the order the caller supplied them.
    pub points: Vec<GeoPoint>,

    /// The final target. Never reordered.
    pub destination: GeoPoint,
}

/// The visiting order produced for a [`RouteRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Deduplicated waypoints in visiting order.
    pub ordered_points: Vec<GeoPoint>,

    /// The request's destination, echoed unchanged.
    pub destination: GeoPoint,
}

/// A waypoint annotated with its 1-based position in the visiting order.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedStop {
    /// Position in the visiting order, starting at 1.
    pub order: usize,

    #[serde(flatten)]
    pub point: GeoPoint,
}

impl RouteRequest {
    /// Creates a new request.
    pub fn new(points: Vec<GeoPoint>, destination: GeoPoint) -> Self {
        RouteRequest {
            points,
            destination,
        }
    }
}

impl RouteResult {
    /// Numbers the ordered points for display, starting at 1.
    pub fn stops(&self) -> Vec<OrderedStop> {
        self.ordered_points
            .iter()
            .enumerate()
            .map(|(i, point)| OrderedStop {
                order: i + 1,
                point: *point,
            })
            .collect()
    }
}
