use crate::core::geo::{LatLng, LatLngBounds};

use serde::{Deserialize, Serialize};

/// An ordered sequence of coordinates produced by a successful route
/// request, together with the route's total distance in meters.
///
/// A `RoutePath` is produced once per request and consumed read-only by
/// the animation driver; a new route request replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePath {
    coords: Vec<LatLng>,
    distance: f64,
}

impl RoutePath {
    /// Creates a new route path from its coordinates and total distance in meters
    pub fn new(coords: Vec<LatLng>, distance: f64) -> Self {
        Self { coords, distance }
    }

    /// An empty path, useful as a neutral value
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0.0)
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Gets the coordinate at `index`, if any
    pub fn get(&self, index: usize) -> Option<LatLng> {
        self.coords.get(index).copied()
    }

    pub fn coords(&self) -> &[LatLng] {
        &self.coords
    }

    /// Total route distance in meters
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Total route distance in kilometers
    pub fn distance_km(&self) -> f64 {
        self.distance / 1000.0
    }

    /// Bounding box covering every point of the path, `None` for an empty path
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let first = self.coords.first()?;
        let mut bounds = LatLngBounds::new(*first, *first);
        for coord in &self.coords[1..] {
            bounds.extend(coord);
        }
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_path_accessors() {
        let path = RoutePath::new(
            vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)],
            1234.5,
        );

        assert_eq!(path.len(), 2);
        assert!(!path.is_empty());
        assert_eq!(path.get(1), Some(LatLng::new(1.0, 1.0)));
        assert_eq!(path.get(2), None);
        assert!((path.distance_km() - 1.2345).abs() < 1e-9);
    }

    #[test]
    fn test_route_path_bounds() {
        let path = RoutePath::new(
            vec![
                LatLng::new(28.6129, 77.2310),
                LatLng::new(28.5355, 77.3910),
                LatLng::new(28.7041, 77.1025),
            ],
            0.0,
        );

        let bounds = path.bounds().unwrap();
        assert_eq!(bounds.south_west.lat, 28.5355);
        assert_eq!(bounds.south_west.lng, 77.1025);
        assert_eq!(bounds.north_east.lat, 28.7041);
        assert_eq!(bounds.north_east.lng, 77.3910);
    }

    #[test]
    fn test_empty_route_path() {
        let path = RoutePath::empty();
        assert!(path.is_empty());
        assert!(path.bounds().is_none());
    }
}
