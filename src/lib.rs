//! # Routelet
//!
//! An async-aware route animation engine inspired by Leaflet Routing Machine.
//!
//! Routelet geocodes free-text place names, fetches a driving route between
//! them from a routing service, and animates a marker along the returned
//! path at a fixed tick interval. Geocoding, route computation and map
//! rendering stay external collaborators; routelet owns the coordinate
//! hand-off, the per-session state, and the animation timer.

pub mod animation;
pub mod core;
pub mod geocode;
pub mod marker;
pub mod overlay;
pub mod routing;
pub mod session;

pub mod prelude;

// Re-export public API
pub use core::{
    geo::{LatLng, LatLngBounds},
    route::RoutePath,
};

pub use animation::{
    driver::{AnimationDriver, AnimationEvent, DriverState, DEFAULT_TICK},
    playback::{Playback, Step},
};

pub use geocode::{nominatim::NominatimGeocoder, Geocoder};

pub use routing::{osrm::OsrmRouter, RouteProvider};

pub use marker::{Marker, MarkerIcon};

pub use overlay::{PolylineStyle, RouteOverlay};

pub use session::{RouteSession, Status};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Geocoding error: {0}")]
    Geocoding(String),

    #[error("Routing error: {0}")]
    Routing(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = RouteError;
