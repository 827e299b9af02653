//! Fluent construction of a [`Game`].

use crate::builder::error::BuildError;
use crate::config::GameConfig;
use crate::environment::{Clock, PersistentStore, Presentation};
use crate::game::Game;
use crate::schedule::StaleTransitionPolicy;

/// Builder for a [`Game`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use recall::builder::GameBuilder;
/// use recall::core::GameMode;
/// use recall::environment::{MemoryStore, RecordingPresentation, VirtualClock};
///
/// let game = GameBuilder::new()
///     .presentation(RecordingPresentation::new())
///     .store(MemoryStore::with_value("simon_best", "3"))
///     .clock(VirtualClock::new())
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.mode(), GameMode::Idle);
/// assert_eq!(game.best(), 3);
/// ```
pub struct GameBuilder<P, S, C> {
    config: GameConfig,
    presentation: Option<P>,
    store: Option<S>,
    clock: Option<C>,
}

impl<P, S, C> GameBuilder<P, S, C>
where
    P: Presentation,
    S: PersistentStore,
    C: Clock,
{
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            presentation: None,
            store: None,
            clock: None,
        }
    }

    /// Set the presentation layer (required).
    pub fn presentation(mut self, presentation: P) -> Self {
        self.presentation = Some(presentation);
        self
    }

    /// Set the best-score store (required).
    pub fn store(mut self, store: S) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the timer source (required).
    pub fn clock(mut self, clock: C) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    pub fn stale_transitions(mut self, policy: StaleTransitionPolicy) -> Self {
        self.config.stale_transitions = policy;
        self
    }

    /// Build the game. Fails if a collaborator is missing or the
    /// configuration is invalid.
    pub fn build(self) -> Result<Game<P, S, C>, BuildError> {
        let presentation = self.presentation.ok_or(BuildError::MissingPresentation)?;
        let store = self.store.ok_or(BuildError::MissingStore)?;
        let clock = self.clock.ok_or(BuildError::MissingClock)?;

        Ok(Game::new(self.config, presentation, store, clock)?)
    }
}

impl<P, S, C> Default for GameBuilder<P, S, C>
where
    P: Presentation,
    S: PersistentStore,
    C: Clock,
{
    fn default() -> Self {
        Self::new()
    }
}
