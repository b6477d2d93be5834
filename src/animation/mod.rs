//! Route playback: a pure tick state machine plus the cancellable
//! repeating timer that drives it.

pub mod driver;
pub mod playback;

pub use driver::{AnimationDriver, AnimationEvent, DriverState, DEFAULT_TICK};
pub use playback::{Playback, Step};
