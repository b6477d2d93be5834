//! Geocoding: free-text address in, coordinate out.

pub mod nominatim;

use crate::core::geo::LatLng;

use async_trait::async_trait;

/// Turns a free-text address into a coordinate.
///
/// Every failure mode (network error, malformed response, no matching
/// place) normalizes to `None`. Callers treat all of them as a single
/// "location not found" outcome; adapters log the underlying cause.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Option<LatLng>;
}
