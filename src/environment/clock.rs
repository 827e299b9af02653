//! Deterministic in-memory clock.

use super::Clock;
use crate::schedule::ScheduledTransition;
use std::collections::BTreeMap;
use std::time::Duration;

/// Timer queue on a virtual timeline.
///
/// Time only moves when the owner pops due transitions or settles it.
/// Entries with the same deadline come out in scheduling order.
///
/// # Example
///
/// ```rust
/// use recall::environment::{Clock, VirtualClock};
/// use recall::schedule::{Action, ScheduledTransition};
/// use std::time::Duration;
///
/// let mut clock = VirtualClock::new();
/// clock.after(Duration::from_millis(750), ScheduledTransition::new(0, Action::NextRound));
///
/// assert!(clock.pop_due(Duration::from_millis(700)).is_none());
/// assert!(clock.pop_due(Duration::from_millis(750)).is_some());
/// assert_eq!(clock.now(), Duration::from_millis(750));
/// ```
#[derive(Debug, Default, Clone)]
pub struct VirtualClock {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, u64), ScheduledTransition>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the clock was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Remove the earliest transition due at or before `until`, moving
    /// the clock to its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<ScheduledTransition> {
        let deadline = self.next_deadline()?;
        if deadline > until {
            return None;
        }
        let ((deadline, _), transition) = self.queue.pop_first()?;
        self.now = self.now.max(deadline);
        Some(transition)
    }

    /// Move the clock forward to `until` without firing anything.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Drop every pending transition.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl Clock for VirtualClock {
    fn after(&mut self, delay: Duration, transition: ScheduledTransition) {
        let id = self.next_id;
        self.next_id += 1;
        self.queue.insert((self.now + delay, id), transition);
    }
}
