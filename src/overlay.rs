use crate::core::{geo::LatLngBounds, route::RoutePath};

/// Polyline styling for a route overlay
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineStyle {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self {
            color: "#4CAF50".to_string(),
            weight: 5,
            opacity: 0.7,
        }
    }
}

/// The logical representation of a computed route on the map: the path
/// plus how it should be drawn. At most one overlay is alive per session;
/// a new route request clears the previous one before issuing the lookup.
#[derive(Debug, Clone)]
pub struct RouteOverlay {
    path: RoutePath,
    style: PolylineStyle,
}

impl RouteOverlay {
    pub fn new(path: RoutePath) -> Self {
        Self {
            path,
            style: PolylineStyle::default(),
        }
    }

    pub fn with_style(mut self, style: PolylineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn path(&self) -> &RoutePath {
        &self.path
    }

    pub fn style(&self) -> &PolylineStyle {
        &self.style
    }

    /// Bounds to fit the view to, `None` for an empty path
    pub fn bounds(&self) -> Option<LatLngBounds> {
        self.path.bounds()
    }

    /// JSON view of the overlay, for embedding applications that render it
    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "style": {
                "color": self.style.color,
                "weight": self.style.weight,
                "opacity": self.style.opacity
            },
            "points": self.path.len(),
            "distance": self.path.distance()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    #[test]
    fn test_default_polyline_style() {
        let style = PolylineStyle::default();
        assert_eq!(style.color, "#4CAF50");
        assert_eq!(style.weight, 5);
        assert!((style.opacity - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overlay_bounds() {
        let overlay = RouteOverlay::new(RoutePath::new(
            vec![LatLng::new(0.0, 0.0), LatLng::new(2.0, 2.0)],
            100.0,
        ));

        let bounds = overlay.bounds().unwrap();
        assert_eq!(bounds.center(), LatLng::new(1.0, 1.0));
    }
}
