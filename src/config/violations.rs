//! Configuration violations.

use thiserror::Error;

/// A single problem found while validating a [`GameConfig`](super::GameConfig).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("minimum signal duration must be positive")]
    ZeroMinimumSignal,

    #[error("minimum signal duration ({min_ms} ms) exceeds base duration ({base_ms} ms)")]
    MinimumAboveBase { min_ms: u64, base_ms: u64 },

    #[error("press acknowledgement duration must be positive")]
    ZeroPressAcknowledgement,

    #[error("history limit must be at least 1")]
    ZeroHistoryLimit,

    #[error("best score key must not be empty")]
    EmptyBestScoreKey,
}
