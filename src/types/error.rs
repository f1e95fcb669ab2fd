//! Definition for the [`RouteError`] type, implemented by an enum.

use thiserror::Error;

/// Everything that can go wrong while ordering a route.
///
/// All variants are caused by the caller's input.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("No points")]
    NoPoints,

    #[error("invalid coordinate in {field}: ({latitude}, {longitude})")]
    InvalidCoordinate {
        field: String,
        latitude: f64,
        longitude: f64,
    },

    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl RouteError {
    /// HTTP status code a transport should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            RouteError::NoPoints
            | RouteError::InvalidCoordinate { .. }
            | RouteError::Malformed(_) => 400,
        }
    }
}
