//! Build errors for the game builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when assembling a [`Game`](crate::game::Game).
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Presentation not specified. Call .presentation(p) before .build()")]
    MissingPresentation,

    #[error("Persistent store not specified. Call .store(s) before .build()")]
    MissingStore,

    #[error("Clock not specified. Call .clock(c) before .build()")]
    MissingClock,

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
