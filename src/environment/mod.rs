//! Collaborators the engine talks to.
//!
//! The engine never renders, plays audio, reads input devices, or sets
//! timers itself. It calls these traits instead, which keeps it testable
//! with the in-crate implementations:
//!
//! - [`RecordingPresentation`] remembers every presentation call
//! - [`VirtualClock`] is a deterministic timer queue
//! - [`MemoryStore`] and [`JsonFileStore`] keep the best score
//!
//! Player input has no trait: the host calls
//! [`Game::press`](crate::game::Game::press) once per physical press.

mod clock;
pub mod error;
mod recording;
mod store;

pub use clock::VirtualClock;
pub use error::StoreError;
pub use recording::{PresentationEvent, RecordingPresentation};
pub use store::{JsonFileStore, MemoryStore};

use crate::schedule::ScheduledTransition;
use crate::signal::Signal;
use std::time::Duration;

/// Visual and audio output.
pub trait Presentation {
    /// Light `signal` and start its tone.
    fn activate(&mut self, signal: Signal);

    /// Turn `signal` off.
    fn deactivate(&mut self, signal: Signal);

    /// Replace the status line. `accent` selects the highlighted style.
    fn set_status(&mut self, message: &str, accent: bool);

    fn set_round_display(&mut self, round: usize);

    fn set_best_display(&mut self, best: usize);

    /// Haptic feedback on a mistake. Hosts without it keep the default.
    fn vibrate(&mut self, _duration: Duration) {}

    /// Called when a game starts, e.g. to resume a suspended audio
    /// context. Default does nothing.
    fn wake(&mut self) {}
}

/// Key/value persistence for the best score.
pub trait PersistentStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// One-shot delayed delivery of scheduled transitions.
///
/// When `delay` has elapsed the host must pass `transition` to
/// [`Game::fire`](crate::game::Game::fire). Transitions with equal
/// deadlines must be delivered in the order they were scheduled.
pub trait Clock {
    fn after(&mut self, delay: Duration, transition: ScheduledTransition);
}

impl<P: Presentation + ?Sized> Presentation for Box<P> {
    fn activate(&mut self, signal: Signal) {
        (**self).activate(signal)
    }

    fn deactivate(&mut self, signal: Signal) {
        (**self).deactivate(signal)
    }

    fn set_status(&mut self, message: &str, accent: bool) {
        (**self).set_status(message, accent)
    }

    fn set_round_display(&mut self, round: usize) {
        (**self).set_round_display(round)
    }

    fn set_best_display(&mut self, best: usize) {
        (**self).set_best_display(best)
    }

    fn vibrate(&mut self, duration: Duration) {
        (**self).vibrate(duration)
    }

    fn wake(&mut self) {
        (**self).wake()
    }
}

impl<S: PersistentStore + ?Sized> PersistentStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
