//! Routing: two coordinates in, a drivable path plus distance out.

pub mod osrm;

use crate::core::{geo::LatLng, route::RoutePath};
use crate::Result;

use async_trait::async_trait;

/// Computes a route between two coordinates.
///
/// Success carries the full path geometry and the total distance in
/// meters. Every failure (transport error, malformed body, the service
/// reporting that no route exists) surfaces as an error; the session
/// presents them all as one routing failure.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    async fn route(&self, from: LatLng, to: LatLng) -> Result<RoutePath>;
}
