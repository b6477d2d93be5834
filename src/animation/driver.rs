use crate::animation::playback::{Playback, Step};
use crate::core::{geo::LatLng, route::RoutePath};
use crate::prelude::{Arc, Duration, Mutex};

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::task::JoinHandle;

/// Default tick period of the marker animation
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// Events emitted by a running animation, one `Position` per tick
/// followed by a single `Completed` when the sequence is exhausted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationEvent {
    Position(LatLng),
    Completed,
}

/// Observable driver state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    Completed,
}

/// Steps a marker through a precomputed coordinate sequence at a fixed
/// real-time interval.
///
/// The driver owns the timer task; `start` hands the caller a fresh event
/// receiver and `stop` aborts the task explicitly. At most one timer task
/// is alive at any time: starting cancels the previous task before
/// spawning the next, so no emissions from an old run can leak into a new
/// receiver.
pub struct AnimationDriver {
    tick: Duration,
    coords: Option<Arc<[LatLng]>>,
    handle: Option<JoinHandle<()>>,
    state: Arc<Mutex<DriverState>>,
}

impl AnimationDriver {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            coords: None,
            handle: None,
            state: Arc::new(Mutex::new(DriverState::Idle)),
        }
    }

    /// Starts animating `path` from its first coordinate.
    ///
    /// Returns `None` for an empty path (nothing to animate, state stays
    /// as it was). Otherwise any previous timer task is cancelled first,
    /// and the returned receiver yields one `AnimationEvent::Position` per
    /// tick, then `AnimationEvent::Completed`, after which the channel
    /// closes.
    pub fn start(&mut self, path: &RoutePath) -> Option<UnboundedReceiver<AnimationEvent>> {
        if path.is_empty() {
            log::debug!("animation start requested with empty path, ignoring");
            return None;
        }

        let coords: Arc<[LatLng]> = path.coords().into();
        self.coords = Some(coords.clone());
        Some(self.start_coords(coords))
    }

    /// Cancels the pending timer task. Idempotent, callable in any state.
    /// A manual stop returns the driver to `Idle`; a completed run keeps
    /// its `Completed` state until the next start.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            log::debug!("animation timer cancelled");
        }
        if let Ok(mut state) = self.state.lock() {
            if *state == DriverState::Running {
                *state = DriverState::Idle;
            }
        }
    }

    /// Stops a running animation, or (re)starts from index 0 with the
    /// last-known sequence. Returns the new event receiver when it starts.
    pub fn toggle(&mut self) -> Option<UnboundedReceiver<AnimationEvent>> {
        if self.is_running() {
            self.stop();
            return None;
        }

        let coords = self.coords.clone()?;
        Some(self.start_coords(coords))
    }

    pub fn state(&self) -> DriverState {
        self.state
            .lock()
            .map(|state| *state)
            .unwrap_or(DriverState::Idle)
    }

    pub fn is_running(&self) -> bool {
        self.state() == DriverState::Running
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    fn start_coords(&mut self, coords: Arc<[LatLng]>) -> UnboundedReceiver<AnimationEvent> {
        // Explicitly cancel the previous timer before creating a new one
        self.stop();

        let (tx, rx) = unbounded_channel();
        let state = self.state.clone();
        if let Ok(mut guard) = state.lock() {
            *guard = DriverState::Running;
        }

        let tick = self.tick;
        let mut playback = Playback::new(coords);
        log::debug!(
            "animation started: {} points, tick {:?}",
            playback.len(),
            tick
        );

        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick);
            loop {
                interval.tick().await;
                match playback.step() {
                    Step::Emit(coord) => {
                        if tx.send(AnimationEvent::Position(coord)).is_err() {
                            // Receiver dropped, nobody is watching anymore
                            break;
                        }
                    }
                    Step::Complete => {
                        if let Ok(mut guard) = state.lock() {
                            *guard = DriverState::Completed;
                        }
                        let _ = tx.send(AnimationEvent::Completed);
                        log::debug!("animation complete after {} ticks", playback.len());
                        break;
                    }
                }
            }
        }));

        rx
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(DEFAULT_TICK)
    }
}

impl Drop for AnimationDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
