//! Scheduled transitions: the tokens handed to a [`Clock`](crate::environment::Clock).
//!
//! Every delayed step of the engine (a cue of the playback, the pause
//! before the next round, a replay, a strict reset) is an explicit value.
//! The host keeps the token until its delay elapses and then passes it
//! back to [`Game::fire`](crate::game::Game::fire).

use crate::signal::Signal;
use serde::{Deserialize, Serialize};

/// What a scheduled transition does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Light a signal and start its tone.
    Activate(Signal),
    /// Turn a signal off.
    Deactivate(Signal),
    /// The last cue of a playback has run.
    PresentationFinished,
    /// Extend the sequence and present it.
    NextRound,
    /// Present the unchanged sequence again after a lenient mistake.
    Replay,
    /// Clear everything after a strict mistake.
    StrictReset,
}

impl Action {
    /// Cleanup actions run even when stale so a signal is never left lit.
    pub fn is_cleanup(&self) -> bool {
        matches!(self, Action::Deactivate(_))
    }
}

/// A delayed action tagged with the game generation it was scheduled in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTransition {
    pub generation: u64,
    pub action: Action,
}

impl ScheduledTransition {
    pub fn new(generation: u64, action: Action) -> Self {
        Self { generation, action }
    }
}

/// How the engine treats tokens scheduled before the last restart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleTransitionPolicy {
    /// Run them anyway. Timers are never cancelled, so a round that was
    /// pending at restart still begins.
    #[default]
    Fire,
    /// Drop everything but cleanup actions.
    Discard,
}

impl StaleTransitionPolicy {
    /// Whether a token from `scheduled_in` runs while the game is at
    /// `current` generation.
    pub fn admits(self, token: &ScheduledTransition, current: u64) -> bool {
        match self {
            StaleTransitionPolicy::Fire => true,
            StaleTransitionPolicy::Discard => {
                token.generation == current || token.action.is_cleanup()
            }
        }
    }
}
