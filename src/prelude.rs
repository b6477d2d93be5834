//! Prelude module for common routelet types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use routelet::prelude::*;`

pub use crate::core::{
    geo::{LatLng, LatLngBounds},
    route::RoutePath,
};

pub use crate::animation::{
    driver::{AnimationDriver, AnimationEvent, DriverState, DEFAULT_TICK},
    playback::{Playback, Step},
};

pub use crate::geocode::{nominatim::NominatimGeocoder, Geocoder};

pub use crate::routing::{osrm::OsrmRouter, RouteProvider};

pub use crate::marker::{Marker, MarkerIcon};

pub use crate::overlay::{PolylineStyle, RouteOverlay};

pub use crate::session::{RouteSession, Status};

pub use crate::{Error as RouteError, Result};

pub use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
