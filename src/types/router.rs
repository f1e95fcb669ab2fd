//! The entry point of the router library.
//!
//! The engine module validates a [`RouteRequest`](`crate::route::RouteRequest`),
//! orders its waypoints and wraps the result. A transport layer (an HTTP
//! handler, a queue consumer) owns a [`RouteEngine`](`engine::RouteEngine`)
//! and calls into it; the engine keeps no state between calls.

/// The router engine module.
pub mod engine {
    use crate::{
        algorithms::ordering::order_route,
        error::RouteError,
        location::GeoPoint,
        route::{RouteRequest, RouteResult},
    };

    /// A RouteEngine validates requests before handing them to the
    /// ordering algorithm.
    ///
    /// It is cheap to copy and safe to share between threads.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct RouteEngine {
        bounds_check: bool,
    }

    impl Default for RouteEngine {
        fn default() -> Self {
            RouteEngine { bounds_check: true }
        }
    }

    impl RouteEngine {
        /// Creates a new engine that rejects out-of-range coordinates.
        pub fn new() -> Self {
            Self::default()
        }

        /// Turns the latitude/longitude range check on or off.
        ///
        /// Non-finite coordinates are rejected either way.
        pub fn with_bounds_check(mut self, enabled: bool) -> Self {
            self.bounds_check = enabled;
            self
        }

        /// Checks a request before it is ordered.
        ///
        /// # Errors
        /// * [`RouteError::NoPoints`] - `points` is empty.
        /// * [`RouteError::InvalidCoordinate`] - a coordinate is NaN or
        ///   infinite, or out of range while the bounds check is on. The
        ///   destination is checked first, then each point in order.
        pub fn validate(&self, request: &RouteRequest) -> Result<(), RouteError> {
            if request.points.is_empty() {
                return Err(RouteError::NoPoints);
            }
            self.check_point("destination", &request.destination)?;
            for (i, point) in request.points.iter().enumerate() {
                self.check_point(&format!("points[{}]", i), point)?;
            }
            Ok(())
        }

        /// Validates `request` and orders its waypoints.
        ///
        /// # Returns
        /// The deduplicated waypoints in visiting order, and the
        /// destination unchanged.
        pub fn optimize(&self, request: &RouteRequest) -> Result<RouteResult, RouteError> {
            info!("Ordering {} points", request.points.len());
            if let Err(e) = self.validate(request) {
                warn!("Rejected route request: {}", e);
                return Err(e);
            }

            let ordered_points = order_route(&request.points, &request.destination)?;
            info!("Ordered {} unique points", ordered_points.len());
            Ok(RouteResult {
                ordered_points,
                destination: request.destination,
            })
        }

        /// Same as [`RouteEngine::optimize`], with a JSON request body in
        /// and a JSON response body out.
        ///
        /// # Errors
        /// [`RouteError::Malformed`] if the body is not a valid request,
        /// plus everything [`RouteEngine::optimize`] returns.
        pub fn optimize_json(&self, body: &str) -> Result<String, RouteError> {
            let request: RouteRequest = serde_json::from_str(body).map_err(|e| {
                warn!("Malformed route request: {}", e);
                RouteError::Malformed(e)
            })?;
            let result = self.optimize(&request)?;
            Ok(serde_json::to_string(&result)?)
        }

        fn check_point(&self, field: &str, point: &GeoPoint) -> Result<(), RouteError> {
            if !point.is_finite() || (self.bounds_check && !point.is_in_bounds()) {
                return Err(RouteError::InvalidCoordinate {
                    field: field.to_string(),
                    latitude: point.latitude,
                    longitude: point.longitude,
                });
            }
            Ok(())
        }
    }
}
