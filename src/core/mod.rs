//! Core mode types for the round engine.
//!
//! This module contains the pure pieces the state machine is built from:
//! - Mode definitions via the `State` trait and the `GameMode` enum
//! - Guard predicates that decide whether a request applies
//! - Bounded history of mode changes
//!
//! Nothing in here touches a collaborator; side effects live in
//! [`game`](crate::game).

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{ModeChange, ModeHistory, DEFAULT_HISTORY_LIMIT};
pub use state::{GameMode, State};
