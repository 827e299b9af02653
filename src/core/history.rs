//! Bounded record of mode changes.
//!
//! A session can run for an unbounded number of rounds, so the history
//! keeps only the most recent changes and drops the oldest first.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single mode change.
///
/// # Example
///
/// ```rust
/// use recall::core::{GameMode, ModeChange};
/// use chrono::Utc;
///
/// let change = ModeChange {
///     from: GameMode::Idle,
///     to: GameMode::Presenting,
///     timestamp: Utc::now(),
///     round: 1,
/// };
/// assert_eq!(change.round, 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ModeChange<S: State> {
    /// The mode being left
    pub from: S,
    /// The mode being entered
    pub to: S,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
    /// Sequence length at the time of the change
    pub round: usize,
}

/// Ordered, bounded history of mode changes.
///
/// # Example
///
/// ```rust
/// use recall::core::{GameMode, ModeChange, ModeHistory};
/// use chrono::Utc;
///
/// let mut history = ModeHistory::with_limit(2);
/// for (from, to) in [
///     (GameMode::Idle, GameMode::Presenting),
///     (GameMode::Presenting, GameMode::AwaitingInput),
///     (GameMode::AwaitingInput, GameMode::RoundTransition),
/// ] {
///     history.record(ModeChange { from, to, timestamp: Utc::now(), round: 1 });
/// }
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(
///     history.get_path(),
///     vec![&GameMode::Presenting, &GameMode::AwaitingInput, &GameMode::RoundTransition]
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ModeHistory<S: State> {
    changes: VecDeque<ModeChange<S>>,
    limit: usize,
}

/// Default number of changes kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

impl<S: State> Default for ModeHistory<S> {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl<S: State> ModeHistory<S> {
    /// Create an empty history holding at most `limit` changes.
    ///
    /// A limit of zero is raised to one.
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            changes: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    /// Append a change, evicting the oldest one when full.
    pub fn record(&mut self, change: ModeChange<S>) {
        if self.changes.len() == self.limit {
            self.changes.pop_front();
        }
        self.changes.push_back(change);
    }

    /// Modes traversed: the `from` of the oldest kept change, then the
    /// `to` of every change.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.changes.len() + 1);
        if let Some(first) = self.changes.front() {
            path.push(&first.from);
        }
        path.extend(self.changes.iter().map(|c| &c.to));
        path
    }

    /// Wall time between the oldest and newest kept change.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.changes.front()?, self.changes.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn last(&self) -> Option<&ModeChange<S>> {
        self.changes.back()
    }

    pub fn changes(&self) -> impl Iterator<Item = &ModeChange<S>> {
        self.changes.iter()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.changes.clear();
    }
}
