use super::Geocoder;
use crate::core::geo::LatLng;
use crate::Result;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;

/// Shared HTTP client with a custom User-Agent so that the public
/// Nominatim service doesn't reject the request. Building the client once
/// avoids the cost of TLS and connection pool setup for every lookup.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("routelet/0.1 (+https://github.com/PoHsuanLai/routelet)")
        .build()
        .expect("failed to build reqwest client")
});

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

/// One candidate in a Nominatim search response. The service returns
/// coordinates as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

/// Geocoder backed by the public OpenStreetMap Nominatim search endpoint.
/// The first candidate wins.
pub struct NominatimGeocoder {
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new() -> Self {
        Self {
            base_url: NOMINATIM_URL.to_string(),
        }
    }

    /// Point the adapter at a different server (self-hosted Nominatim, test stub)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn search(&self, address: &str) -> Result<Option<LatLng>> {
        let resp = HTTP_CLIENT
            .get(&self.base_url)
            .query(&[("format", "json"), ("q", address)])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(format!("HTTP {}", resp.status()).into());
        }

        let candidates: Vec<Place> = resp.json().await?;
        let first = match candidates.first() {
            Some(place) => place,
            None => return Ok(None),
        };

        let lat: f64 = first.lat.parse()?;
        let lng: f64 = first.lon.parse()?;

        let coord = LatLng::new(lat, lng);
        if !coord.is_valid() {
            return Err(
                crate::RouteError::InvalidCoordinates(format!("{}, {}", lat, lng)).into(),
            );
        }

        Ok(Some(coord))
    }
}

impl Default for NominatimGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Option<LatLng> {
        match self.search(address).await {
            Ok(Some(coord)) => {
                log::debug!("geocoded {:?} -> {:?}", address, coord);
                Some(coord)
            }
            Ok(None) => {
                log::debug!("no geocoding candidates for {:?}", address);
                None
            }
            Err(e) => {
                // Network failure and "no match" are indistinguishable to callers
                log::warn!("geocoding {:?} failed: {}", address, e);
                None
            }
        }
    }
}
