use crate::core::geo::LatLng;
use crate::prelude::Arc;

/// Outcome of advancing a playback by one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// The coordinate to move the marker to on this tick
    Emit(LatLng),
    /// The sequence is exhausted; the caller should stop its timer
    Complete,
}

/// A cursor over a route's coordinate sequence.
///
/// `Playback` is the pure core of the animation: one `step()` per timer
/// tick, emitting each coordinate exactly once in order, then reporting
/// completion. It knows nothing about timers or channels so it can be
/// exercised synchronously.
#[derive(Debug, Clone)]
pub struct Playback {
    coords: Arc<[LatLng]>,
    index: usize,
}

impl Playback {
    pub fn new(coords: Arc<[LatLng]>) -> Self {
        Self { coords, index: 0 }
    }

    /// Advance by one tick
    pub fn step(&mut self) -> Step {
        match self.coords.get(self.index) {
            Some(coord) => {
                self.index += 1;
                Step::Emit(*coord)
            }
            None => Step::Complete,
        }
    }

    /// Index of the next coordinate to emit
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}
