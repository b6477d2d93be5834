use super::RouteProvider;
use crate::core::{geo::LatLng, route::RoutePath};
use crate::{Result, RouteError};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;

pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("routelet/0.1 (+https://github.com/PoHsuanLai/routelet)")
        .build()
        .expect("failed to build reqwest client")
});

const OSRM_URL: &str = "https://router.project-osrm.org";

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    geometry: OsrmGeometry,
}

/// GeoJSON LineString geometry, coordinates as [lng, lat] pairs
#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

/// Route provider backed by the public OSRM demo server (the same backend
/// Leaflet Routing Machine defaults to). Requests the full geometry so
/// the animation gets every path point.
pub struct OsrmRouter {
    base_url: String,
    profile: String,
}

impl OsrmRouter {
    pub fn new() -> Self {
        Self {
            base_url: OSRM_URL.to_string(),
            profile: "driving".to_string(),
        }
    }

    /// Point the adapter at a different server (self-hosted OSRM, test stub)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            profile: "driving".to_string(),
        }
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    fn route_url(&self, from: LatLng, to: LatLng) -> String {
        // OSRM takes lng,lat order
        format!(
            "{}/route/v1/{}/{},{};{},{}?overview=full&geometries=geojson",
            self.base_url, self.profile, from.lng, from.lat, to.lng, to.lat
        )
    }
}

impl Default for OsrmRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RouteProvider for OsrmRouter {
    async fn route(&self, from: LatLng, to: LatLng) -> Result<RoutePath> {
        let url = self.route_url(from, to);
        log::debug!("requesting route: {}", url);

        let resp = HTTP_CLIENT.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(format!("HTTP {}", resp.status()).into());
        }

        let body: OsrmResponse = resp.json().await?;
        if body.code != "Ok" {
            return Err(RouteError::Routing(format!("service returned {}", body.code)).into());
        }

        let route = match body.routes.first() {
            Some(route) => route,
            None => return Err(RouteError::Routing("no routes in response".to_string()).into()),
        };

        let coords = route
            .geometry
            .coordinates
            .iter()
            .map(|&[lng, lat]| LatLng::new(lat, lng))
            .collect::<Vec<_>>();

        log::info!(
            "route found: {} points, {:.2} km",
            coords.len(),
            route.distance / 1000.0
        );

        Ok(RoutePath::new(coords, route.distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_url_uses_lng_lat_order() {
        let router = OsrmRouter::new();
        let url = router.route_url(LatLng::new(28.6129, 77.2310), LatLng::new(28.5355, 77.3910));

        assert!(url.starts_with("https://router.project-osrm.org/route/v1/driving/"));
        assert!(url.contains("77.231,28.6129;77.391,28.5355"));
        assert!(url.ends_with("overview=full&geometries=geojson"));
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{
            "code": "Ok",
            "routes": [{
                "distance": 1500.0,
                "geometry": { "coordinates": [[77.2310, 28.6129], [77.3910, 28.5355]] }
            }]
        }"#;

        let body: OsrmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.code, "Ok");
        assert_eq!(body.routes[0].geometry.coordinates.len(), 2);
        // lng,lat on the wire becomes lat,lng in LatLng
        let [lng, lat] = body.routes[0].geometry.coordinates[0];
        let coord = LatLng::new(lat, lng);
        assert_eq!(coord, LatLng::new(28.6129, 77.2310));
    }
}
