//! Waypoint Ordering Library.
//! Deduplicates waypoints and orders them by progress toward a
//! destination.
//!
//! The ordering is a heuristic pre-processing step: it does not compute
//! a travel path and does not look at road networks. See
//! [`order_route`](`algorithms::ordering::order_route`) for the
//! algorithm and [`RouteEngine`](`router::engine::RouteEngine`) for the
//! request-level entry point.

#[macro_use]
extern crate log;

/// Types used by the library.
pub mod types {
    pub mod error;
    pub mod location;
    pub mod route;
    pub mod router;
}

/// Geographic and vector helpers.
pub mod utils {
    pub mod dedup;
    pub mod generator;
    pub mod haversine;
    pub mod vector;
}

/// Ordering algorithms.
pub mod algorithms {
    pub mod ordering;
}

pub use types::*;
pub use utils::*;
