//! Judging a single press against the expected signal.

use crate::signal::Signal;
use serde::{Deserialize, Serialize};

/// Outcome of one press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Correct, more to go; carries the advanced cursor.
    Continue(usize),
    /// Correct, and it was the last signal of the round.
    RoundComplete,
    /// Wrong signal.
    Mistake,
}

impl Verdict {
    pub fn is_mistake(&self) -> bool {
        matches!(self, Verdict::Mistake)
    }
}

/// Compare `pressed` with `sequence[cursor]`.
///
/// Pure: neither the cursor nor the sequence is touched; recovery is up
/// to the caller. A cursor past the end of the sequence has nothing to
/// match and is judged a mistake.
///
/// # Example
///
/// ```rust
/// use recall::judge::{judge, Verdict};
/// use recall::signal::Signal::{Blue, Red};
///
/// let sequence = [Red, Blue];
/// assert_eq!(judge(Red, &sequence, 0), Verdict::Continue(1));
/// assert_eq!(judge(Blue, &sequence, 1), Verdict::RoundComplete);
/// assert_eq!(judge(Red, &sequence, 1), Verdict::Mistake);
/// ```
pub fn judge(pressed: Signal, sequence: &[Signal], cursor: usize) -> Verdict {
    match sequence.get(cursor) {
        Some(&expected) if expected == pressed => {
            let next = cursor + 1;
            if next < sequence.len() {
                Verdict::Continue(next)
            } else {
                Verdict::RoundComplete
            }
        }
        _ => Verdict::Mistake,
    }
}
