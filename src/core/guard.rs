//! Guard predicates over engine modes.
//!
//! The engine consults a guard before acting on an external request
//! (start, press). A guard that rejects the current mode turns the
//! request into a no-op.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;

/// Pure predicate deciding whether a request applies in a mode.
///
/// # Example
///
/// ```rust
/// use recall::core::{GameMode, Guard, State};
///
/// let presses = Guard::new(|mode: &GameMode| mode.accepts_input());
///
/// assert!(presses.check(&GameMode::AwaitingInput));
/// assert!(!presses.check(&GameMode::Presenting));
/// ```
pub struct Guard<S: State> {
    label: &'static str,
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Self::labeled("guard", predicate)
    }

    /// Create a guard with a label that shows up in logs.
    pub fn labeled<F>(label: &'static str, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            label,
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard admits this mode.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("label", &self.label).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameMode;

    #[test]
    fn guard_allows_matching_modes() {
        let guard = Guard::new(|m: &GameMode| matches!(m, GameMode::Idle));

        assert!(guard.check(&GameMode::Idle));
        assert!(!guard.check(&GameMode::Presenting));
    }

    #[test]
    fn input_guard_admits_only_awaiting_input() {
        let guard = Guard::new(|m: &GameMode| m.accepts_input());

        assert!(!guard.check(&GameMode::Idle));
        assert!(!guard.check(&GameMode::Presenting));
        assert!(guard.check(&GameMode::AwaitingInput));
        assert!(!guard.check(&GameMode::RoundTransition));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|m: &GameMode| !m.is_idle());

        let first = guard.check(&GameMode::Presenting);
        let second = guard.check(&GameMode::Presenting);

        assert_eq!(first, second);
    }

    #[test]
    fn labeled_guard_reports_label() {
        let guard = Guard::labeled("start", |m: &GameMode| *m != GameMode::Presenting);

        assert_eq!(guard.label(), "start");
        assert!(format!("{guard:?}").contains("start"));
    }
}
