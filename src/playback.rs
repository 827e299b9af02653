//! Playback of a sequence as timed cues.
//!
//! A playback is planned up front: every activate/deactivate and the
//! final "finished" marker gets an offset from the moment playback
//! starts. [`PlaybackController::present`] then hands each cue to the
//! clock as a scheduled transition. Offsets are cumulative, so the result
//! is the same as waiting step by step.
//!
//! Timeline for a sequence of `n` signals:
//!
//! ```text
//! lead-in | on(s0) D | off(s0) gap | on(s1) D | off(s1) ... on(sn-1) D | off(sn-1) finished
//! ```

use crate::environment::Clock;
use crate::schedule::{Action, ScheduledTransition};
use crate::signal::Signal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Playback timing, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackTiming {
    /// Pause before the first signal.
    pub lead_in_ms: u64,
    /// Active duration before any speed-up.
    pub base_signal_ms: u64,
    /// Shortening per signal in the sequence.
    pub speed_step_ms: u64,
    /// Floor for the active duration.
    pub min_signal_ms: u64,
    /// Pause between consecutive signals.
    pub gap_ms: u64,
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self {
            lead_in_ms: 600,
            base_signal_ms: 700,
            speed_step_ms: 25,
            min_signal_ms: 300,
            gap_ms: 130,
        }
    }
}

impl PlaybackTiming {
    /// `max(min, base - step * length_for_speed)`.
    pub fn signal_duration(&self, length_for_speed: usize) -> Duration {
        let length = u64::try_from(length_for_speed).unwrap_or(u64::MAX);
        let shrink = self.speed_step_ms.saturating_mul(length);
        let ms = self
            .base_signal_ms
            .saturating_sub(shrink)
            .max(self.min_signal_ms);
        Duration::from_millis(ms)
    }

    pub fn lead_in(&self) -> Duration {
        Duration::from_millis(self.lead_in_ms)
    }

    pub fn gap(&self) -> Duration {
        Duration::from_millis(self.gap_ms)
    }
}

/// One step of a playback, `at` after playback starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cue {
    pub at: Duration,
    pub action: Action,
}

/// Every cue of one playback in firing order. The last cue is always
/// [`Action::PresentationFinished`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackPlan {
    cues: Vec<Cue>,
    signal_duration: Duration,
}

impl PlaybackPlan {
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Active duration used for every signal of this playback.
    pub fn signal_duration(&self) -> Duration {
        self.signal_duration
    }

    /// Offset of the finished marker.
    pub fn total(&self) -> Duration {
        self.cues.last().map(|c| c.at).unwrap_or_default()
    }
}

/// Turns sequences into scheduled cues.
#[derive(Clone, Debug, Default)]
pub struct PlaybackController {
    timing: PlaybackTiming,
}

impl PlaybackController {
    pub fn new(timing: PlaybackTiming) -> Self {
        Self { timing }
    }

    pub fn timing(&self) -> &PlaybackTiming {
        &self.timing
    }

    /// Plan the playback of `sequence` at the speed for `length_for_speed`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recall::playback::{PlaybackController, PlaybackTiming};
    /// use recall::schedule::Action;
    /// use recall::signal::Signal;
    /// use std::time::Duration;
    ///
    /// let controller = PlaybackController::new(PlaybackTiming::default());
    /// let plan = controller.plan(&[Signal::Red, Signal::Blue], 2);
    ///
    /// // 600 lead-in, 650 on, 130 gap, 650 on
    /// assert_eq!(plan.total(), Duration::from_millis(2030));
    /// assert_eq!(plan.cues()[0].action, Action::Activate(Signal::Red));
    /// ```
    pub fn plan(&self, sequence: &[Signal], length_for_speed: usize) -> PlaybackPlan {
        let signal_duration = self.timing.signal_duration(length_for_speed);
        let mut cues = Vec::with_capacity(sequence.len() * 2 + 1);
        let mut at = self.timing.lead_in();

        for (i, &signal) in sequence.iter().enumerate() {
            cues.push(Cue {
                at,
                action: Action::Activate(signal),
            });
            at += signal_duration;
            cues.push(Cue {
                at,
                action: Action::Deactivate(signal),
            });
            if i + 1 < sequence.len() {
                at += self.timing.gap();
            }
        }

        cues.push(Cue {
            at,
            action: Action::PresentationFinished,
        });

        PlaybackPlan {
            cues,
            signal_duration,
        }
    }

    /// Schedule every cue of the playback on `clock`, tagged with
    /// `generation`. Returns the plan that was scheduled.
    pub fn present<C: Clock + ?Sized>(
        &self,
        sequence: &[Signal],
        length_for_speed: usize,
        generation: u64,
        clock: &mut C,
    ) -> PlaybackPlan {
        let plan = self.plan(sequence, length_for_speed);
        for cue in plan.cues() {
            clock.after(cue.at, ScheduledTransition::new(generation, cue.action));
        }
        plan
    }
}
