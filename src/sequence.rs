//! The growing pattern and the generator that extends it.

use crate::signal::Signal;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Ordered list of signals the player must reproduce.
///
/// Only the round engine mutates a sequence; everyone else sees it
/// through `Deref<Target = [Signal]>`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(Vec<Signal>);

impl Sequence {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Round number: the current length.
    pub fn round(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[Signal] {
        &self.0
    }

    pub(crate) fn push(&mut self, signal: Signal) {
        self.0.push(signal);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl Deref for Sequence {
    type Target = [Signal];

    fn deref(&self) -> &[Signal] {
        &self.0
    }
}

impl From<Vec<Signal>> for Sequence {
    fn from(signals: Vec<Signal>) -> Self {
        Self(signals)
    }
}

impl FromIterator<Signal> for Sequence {
    fn from_iter<I: IntoIterator<Item = Signal>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Appends uniformly random signals to a sequence.
///
/// Each draw is independent and with replacement: every catalog member
/// has probability `1 / Signal::COUNT` on every call.
///
/// # Example
///
/// ```rust
/// use recall::sequence::{Sequence, SequenceGenerator};
///
/// let mut generator = SequenceGenerator::seeded(7);
/// let one = generator.extend(&Sequence::new());
/// let two = generator.extend(&one);
///
/// assert_eq!(two.len(), 2);
/// assert_eq!(two[0], one[0]);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceGenerator<R: Rng = ChaCha8Rng> {
    rng: R,
}

impl SequenceGenerator<ChaCha8Rng> {
    /// Deterministic generator: same seed, same sequences.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> SequenceGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw one signal uniformly from the catalog.
    pub fn draw(&mut self) -> Signal {
        Signal::ALL[self.rng.gen_range(0..Signal::COUNT)]
    }

    /// Return `sequence` with one random signal appended.
    pub fn extend(&mut self, sequence: &Sequence) -> Sequence {
        let mut next = sequence.clone();
        self.grow(&mut next);
        next
    }

    /// Append one random signal in place.
    pub fn grow(&mut self, sequence: &mut Sequence) -> Signal {
        let signal = self.draw();
        sequence.push(signal);
        signal
    }
}
