//! Session snapshots.
//!
//! A [`Snapshot`] captures everything needed to pick a session back up:
//! the sequence, the strict flag, the best score, and for diagnostics
//! the cursor and mode at capture time. Timers are not captured; a
//! restored game replays the sequence from the start.

use crate::core::{GameMode, State};
use crate::sequence::Sequence;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable capture of a game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    pub sequence: Sequence,

    pub cursor: usize,

    pub mode: GameMode,

    pub strict: bool,

    pub best: usize,
}

impl Snapshot {
    pub(crate) fn capture(
        sequence: &Sequence,
        cursor: usize,
        mode: GameMode,
        strict: bool,
        best: usize,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            taken_at: Utc::now(),
            sequence: sequence.clone(),
            cursor,
            mode,
            strict,
            best,
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode and validate a JSON snapshot.
    pub fn from_json(text: &str) -> Result<Self, CheckpointError> {
        let snapshot: Snapshot = serde_json::from_str(text)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode and validate a binary snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let snapshot: Snapshot = bincode::deserialize(bytes)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check the version, then every invariant, reporting all broken
    /// invariants together.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let checks: Vec<Validation<(), NonEmptyVec<String>>> = vec![
            if self.cursor <= self.sequence.len() {
                Validation::success(())
            } else {
                Validation::fail(format!(
                    "cursor {} is past the end of a sequence of {}",
                    self.cursor,
                    self.sequence.len()
                ))
            },
            if self.mode.is_idle() || !self.sequence.is_empty() {
                Validation::success(())
            } else {
                Validation::fail(format!("mode {} requires a sequence", self.mode.name()))
            },
        ];

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(problems) => {
                Err(CheckpointError::Invalid(problems.iter().cloned().collect()))
            }
        }
    }
}
