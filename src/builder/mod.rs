//! Builder API for assembling a game from its collaborators.

pub mod error;
pub mod game;

pub use error::BuildError;
pub use game::GameBuilder;
