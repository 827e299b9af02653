//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur while saving or resuming a session
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// JSON encoding or decoding failed
    #[error("snapshot JSON codec failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary encoding or decoding failed
    #[error("snapshot binary codec failed: {0}")]
    Binary(#[from] bincode::Error),

    /// Snapshot was written by an incompatible format version
    #[error("unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot contents break one or more game invariants
    #[error("snapshot rejected: {}", .0.join("; "))]
    Invalid(Vec<String>),
}
