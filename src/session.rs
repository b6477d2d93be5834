use crate::animation::driver::{AnimationDriver, AnimationEvent};
use crate::core::geo::LatLng;
use crate::geocode::Geocoder;
use crate::marker::Marker;
use crate::overlay::RouteOverlay;
use crate::routing::RouteProvider;

use std::fmt;
use tokio::sync::mpsc::UnboundedReceiver;

/// User-visible session status, one value per step of the route flow.
/// The `Display` strings are the user-visible status texts.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Idle,
    MissingInput,
    FindingLocations,
    StartNotFound,
    EndNotFound,
    CalculatingRoute,
    RouteFound { distance_km: f64 },
    RouteNotFound,
    NoRouteYet,
    AnimationComplete,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => Ok(()),
            Status::MissingInput => write!(f, "Please enter both start and end locations"),
            Status::FindingLocations => write!(f, "🔍 Finding locations..."),
            Status::StartNotFound => write!(
                f,
                "Could not find start location. Try being more specific (e.g., add city name)"
            ),
            Status::EndNotFound => write!(
                f,
                "Could not find end location. Try being more specific (e.g., add city name)"
            ),
            Status::CalculatingRoute => write!(f, "🗺️ Calculating route..."),
            Status::RouteFound { distance_km } => {
                write!(f, "✅ Route found! Distance: {:.2} km", distance_km)
            }
            Status::RouteNotFound => {
                write!(f, "❌ Could not find route between these locations")
            }
            Status::NoRouteYet => write!(f, "Please show a route first"),
            Status::AnimationComplete => write!(f, "✅ Animation complete!"),
        }
    }
}

/// Owns the mutable per-session state: the
/// marker, the current route overlay, the animation driver and the status
/// line. One session corresponds to one map view.
///
/// All state mutation happens on the caller's task; the only other task
/// alive is the driver's timer, which communicates back over its event
/// channel.
pub struct RouteSession {
    geocoder: Box<dyn Geocoder>,
    provider: Box<dyn RouteProvider>,
    marker: Marker,
    overlay: Option<RouteOverlay>,
    driver: AnimationDriver,
    status: Status,
}

impl RouteSession {
    pub fn new(
        geocoder: Box<dyn Geocoder>,
        provider: Box<dyn RouteProvider>,
        initial_position: LatLng,
    ) -> Self {
        Self {
            geocoder,
            provider,
            marker: Marker::new("car".to_string(), initial_position),
            overlay: None,
            driver: AnimationDriver::default(),
            status: Status::Idle,
        }
    }

    /// Resolves both addresses and requests a route between them.
    ///
    /// Validates inputs, geocodes start then end sequentially, clears
    /// prior route and animation state, repositions the marker to the
    /// start, then asks the route provider. Every failure is terminal for
    /// this call only; the session stays usable.
    pub async fn find_route(&mut self, start: &str, end: &str) -> &Status {
        let start = start.trim();
        let end = end.trim();

        if start.is_empty() || end.is_empty() {
            return self.set_status(Status::MissingInput);
        }

        self.set_status(Status::FindingLocations);

        let start_coord = match self.geocoder.geocode(start).await {
            Some(coord) => coord,
            None => return self.set_status(Status::StartNotFound),
        };

        let end_coord = match self.geocoder.geocode(end).await {
            Some(coord) => coord,
            None => return self.set_status(Status::EndNotFound),
        };

        // Clear prior route state before issuing the new request: stop the
        // animation timer first, then drop the overlay, so at most one of
        // each is ever alive.
        self.driver.stop();
        self.overlay = None;
        self.marker.set_position(start_coord);

        self.set_status(Status::CalculatingRoute);

        match self.provider.route(start_coord, end_coord).await {
            Ok(path) => {
                let status = Status::RouteFound {
                    distance_km: path.distance_km(),
                };
                self.overlay = Some(RouteOverlay::new(path));
                self.set_status(status)
            }
            Err(e) => {
                log::warn!("routing failed: {}", e);
                self.set_status(Status::RouteNotFound)
            }
        }
    }

    /// Starts or stops the marker animation along the current route.
    ///
    /// With no route present this is a no-op prompt. On start, the caller
    /// receives the event stream to drive the marker with; when it drains
    /// `AnimationEvent::Completed` it should call [`animation_finished`].
    ///
    /// [`animation_finished`]: Self::animation_finished
    pub fn toggle_animation(&mut self) -> Option<UnboundedReceiver<AnimationEvent>> {
        let overlay = match &self.overlay {
            Some(overlay) => overlay,
            None => {
                self.set_status(Status::NoRouteYet);
                return None;
            }
        };

        if self.driver.is_running() {
            self.driver.stop();
            return None;
        }

        match self.driver.start(overlay.path()) {
            Some(events) => Some(events),
            None => {
                // Empty path, nothing to animate
                self.set_status(Status::NoRouteYet);
                None
            }
        }
    }

    /// Records completion once the caller has drained the final event
    pub fn animation_finished(&mut self) {
        self.set_status(Status::AnimationComplete);
    }

    /// Moves the marker to an emitted animation position
    pub fn apply_position(&mut self, position: LatLng) {
        self.marker.set_position(position);
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    pub fn overlay(&self) -> Option<&RouteOverlay> {
        self.overlay.as_ref()
    }

    /// Whether the animate control should be enabled
    pub fn can_animate(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    fn set_status(&mut self, status: Status) -> &Status {
        log::debug!("session status: {:?}", status);
        self.status = status;
        &self.status
    }
}
