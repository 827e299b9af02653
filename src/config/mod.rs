//! Engine configuration.
//!
//! All timings default to the classic game's values. Configuration is
//! plain serde data, so hosts can ship it as JSON:
//!
//! ```rust
//! use recall::config::GameConfig;
//!
//! let config = GameConfig::from_json_str(r#"{
//!     "strict": true,
//!     "playback": { "lead_in_ms": 400 },
//!     "stale_transitions": "discard"
//! }"#).unwrap();
//!
//! assert!(config.strict);
//! assert_eq!(config.playback.lead_in_ms, 400);
//! assert_eq!(config.playback.base_signal_ms, 700);
//! ```
//!
//! Validation reports every problem at once:
//!
//! ```rust
//! use recall::config::{ConfigError, GameConfig};
//!
//! let err = GameConfig::from_json_str(r#"{ "history_limit": 0, "best_score_key": "" }"#)
//!     .unwrap_err();
//! assert!(matches!(err, ConfigError::Invalid(v) if v.len() == 2));
//! ```

pub mod error;
pub mod rules;
pub mod violations;

pub use error::ConfigError;
pub use violations::ConfigViolation;

use crate::core::DEFAULT_HISTORY_LIMIT;
use crate::playback::PlaybackTiming;
use crate::schedule::StaleTransitionPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use stillwater::validation::Validation;

/// Store key the best score lives under unless configured otherwise.
pub const DEFAULT_BEST_SCORE_KEY: &str = "simon_best";

/// Delays around the input phase, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundTiming {
    /// How long a pressed signal stays lit.
    pub press_ack_ms: u64,
    /// Pause after a completed round before the sequence grows.
    pub advance_delay_ms: u64,
    /// Pause after a lenient mistake before the replay.
    pub replay_delay_ms: u64,
    /// Pause after a strict mistake before the full reset.
    pub strict_reset_delay_ms: u64,
    /// Haptic pulse on a mistake.
    pub mistake_vibration_ms: u64,
}

impl Default for RoundTiming {
    fn default() -> Self {
        Self {
            press_ack_ms: 220,
            advance_delay_ms: 750,
            replay_delay_ms: 700,
            strict_reset_delay_ms: 400,
            mistake_vibration_ms: 180,
        }
    }
}

impl RoundTiming {
    pub fn press_ack(&self) -> Duration {
        Duration::from_millis(self.press_ack_ms)
    }

    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    pub fn replay_delay(&self) -> Duration {
        Duration::from_millis(self.replay_delay_ms)
    }

    pub fn strict_reset_delay(&self) -> Duration {
        Duration::from_millis(self.strict_reset_delay_ms)
    }

    pub fn mistake_vibration(&self) -> Duration {
        Duration::from_millis(self.mistake_vibration_ms)
    }
}

/// Everything a [`Game`](crate::game::Game) can be tuned with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub playback: PlaybackTiming,
    pub rounds: RoundTiming,
    /// Strict mode at startup.
    pub strict: bool,
    pub stale_transitions: StaleTransitionPolicy,
    /// Mode changes kept in the history.
    pub history_limit: usize,
    pub best_score_key: String,
    /// Seed for the sequence generator; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playback: PlaybackTiming::default(),
            rounds: RoundTiming::default(),
            strict: false,
            stale_transitions: StaleTransitionPolicy::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            best_score_key: DEFAULT_BEST_SCORE_KEY.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate JSON configuration. Missing fields take
    /// their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate, collecting every violation into one error.
    pub fn check(&self) -> Result<(), ConfigError> {
        match rules::validate(self) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(ConfigError::Invalid(errors.iter().cloned().collect())),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_stale_transitions(mut self, policy: StaleTransitionPolicy) -> Self {
        self.stale_transitions = policy;
        self
    }
}
