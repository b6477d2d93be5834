use crate::core::geo::LatLng;

/// Icon metadata for a marker. Rendering is up to the embedding
/// application; routelet only carries the values through.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
    pub url: String,
    pub size: (u32, u32),
    pub anchor: (u32, u32),
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            url: "https://img.icons8.com/color/48/car.png".to_string(),
            size: (40, 40),
            anchor: (20, 20),
        }
    }
}

/// A positioned marker, the thing the animation driver moves along a route
pub struct Marker {
    id: String,
    position: LatLng,
    icon: MarkerIcon,
}

impl Marker {
    pub fn new(id: String, position: LatLng) -> Self {
        Self {
            id,
            position,
            icon: MarkerIcon::default(),
        }
    }

    pub fn with_icon(mut self, icon: MarkerIcon) -> Self {
        self.icon = icon;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn set_position(&mut self, position: LatLng) {
        self.position = position;
    }

    pub fn icon(&self) -> &MarkerIcon {
        &self.icon
    }

    /// JSON view of the marker, for embedding applications that render it
    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "position": {
                "lat": self.position.lat,
                "lng": self.position.lng
            },
            "icon": {
                "url": self.icon.url,
                "size": [self.icon.size.0, self.icon.size.1],
                "anchor": [self.icon.anchor.0, self.icon.anchor.1]
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_reposition() {
        let mut marker = Marker::new("car".to_string(), LatLng::new(28.6129, 77.2310));
        assert_eq!(marker.position(), LatLng::new(28.6129, 77.2310));

        marker.set_position(LatLng::new(28.7041, 77.1025));
        assert_eq!(marker.position(), LatLng::new(28.7041, 77.1025));
    }

    #[test]
    fn test_marker_options_json() {
        let marker = Marker::new("car".to_string(), LatLng::new(1.0, 2.0));
        let options = marker.options();

        assert_eq!(options["position"]["lat"], 1.0);
        assert_eq!(options["icon"]["size"][0], 40);
    }
}
