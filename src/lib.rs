//! Recall: the round engine of a repeat-the-growing-sequence memory game.
//!
//! The machine shows an ever longer sequence of signals and the player
//! repeats it, round after round. This crate is the engine only: the
//! sequence generator, the turn-taking state machine, mistake handling
//! and best-score tracking. Rendering, sound, input devices, timers and
//! storage are collaborators behind traits in [`environment`].
//!
//! # Core Concepts
//!
//! - **Signals**: the four pads of the [`signal`] catalog
//! - **Sequence**: the pattern, grown by one uniformly random signal per round
//! - **Playback**: the sequence turned into timed activate/deactivate cues
//! - **Judge**: one press against the expected signal
//! - **Game**: owns all state and moves between the modes in [`core::GameMode`]
//! - **Scheduled transitions**: every delay is an explicit token handed to a
//!   [`environment::Clock`] and returned through [`game::Game::fire`]
//!
//! # Example
//!
//! ```rust
//! use recall::builder::GameBuilder;
//! use recall::core::GameMode;
//! use recall::environment::{MemoryStore, RecordingPresentation, VirtualClock};
//! use recall::judge::Verdict;
//!
//! let mut game = GameBuilder::new()
//!     .presentation(RecordingPresentation::new())
//!     .store(MemoryStore::new())
//!     .clock(VirtualClock::new())
//!     .seed(1)
//!     .build()
//!     .unwrap();
//!
//! game.start();
//! assert_eq!(game.mode(), GameMode::Presenting);
//!
//! game.advance_until_input();
//! let first = game.sequence()[0];
//! assert_eq!(game.press(first), Some(Verdict::RoundComplete));
//! assert_eq!(game.best(), 1);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod environment;
pub mod game;
pub mod judge;
pub mod playback;
pub mod schedule;
pub mod sequence;
pub mod signal;

// Re-export commonly used types
pub use crate::core::GameMode;
pub use builder::GameBuilder;
pub use config::GameConfig;
pub use game::Game;
pub use judge::Verdict;
pub use sequence::Sequence;
pub use signal::Signal;
