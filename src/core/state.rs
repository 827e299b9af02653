//! The `State` trait and the game's mode enumeration.
//!
//! Every mode the round engine can occupy implements [`State`], which
//! exposes pure queries used by guards and history tracking.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for engine modes.
///
/// All methods are pure. Modes are plain values; the engine moves
/// between them and records each move in a
/// [`ModeHistory`](crate::core::ModeHistory).
///
/// # Required Traits
///
/// - `Clone`: modes are copied into history records
/// - `PartialEq`: guards and transitions compare modes
/// - `Debug`: modes show up in logs
/// - `Serialize` + `Deserialize`: modes are part of session snapshots
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and history dumps.
    fn name(&self) -> &str;

    /// Whether player presses are judged in this mode.
    ///
    /// Default implementation returns `false`.
    fn accepts_input(&self) -> bool {
        false
    }

    /// Whether this is the resting mode with no game in progress.
    ///
    /// Default implementation returns `false`.
    fn is_idle(&self) -> bool {
        false
    }
}

/// The single active mode of a [`Game`](crate::game::Game).
///
/// # Example
///
/// ```rust
/// use recall::core::{GameMode, State};
///
/// assert!(GameMode::Idle.is_idle());
/// assert!(GameMode::AwaitingInput.accepts_input());
/// assert!(!GameMode::Presenting.accepts_input());
/// assert_eq!(GameMode::RoundTransition.name(), "RoundTransition");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// No sequence; waiting for start.
    #[default]
    Idle,
    /// The sequence is being played back.
    Presenting,
    /// Waiting for the player to reproduce the sequence.
    AwaitingInput,
    /// A delayed follow-up (next round, replay, strict reset) is pending.
    RoundTransition,
}

impl State for GameMode {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Presenting => "Presenting",
            Self::AwaitingInput => "AwaitingInput",
            Self::RoundTransition => "RoundTransition",
        }
    }

    fn accepts_input(&self) -> bool {
        matches!(self, Self::AwaitingInput)
    }

    fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
