//! The round/game state machine.
//!
//! ```text
//!            start                 finished
//!   Idle ─────────────▶ Presenting ────────▶ AwaitingInput
//!    ▲                    ▲    ▲                 │
//!    │ strict reset       │    │ replay          │ round complete / mistake
//!    │ (after 400 ms)     │    │ (after 700 ms)  ▼
//!    └──────────────── RoundTransition ◀─────────┘
//!                         │ next round (after 750 ms)
//!                         └──────────▶ Presenting
//! ```
//!
//! `restart` leads back to `Idle` from anywhere.

mod machine;
pub mod status;

pub use machine::Game;
