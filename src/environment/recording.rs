//! Presentation that records calls instead of rendering them.

use super::Presentation;
use crate::signal::Signal;
use std::collections::HashSet;
use std::time::Duration;

/// One call made on a [`Presentation`].
#[derive(Clone, Debug, PartialEq)]
pub enum PresentationEvent {
    Activate(Signal),
    Deactivate(Signal),
    Status { message: String, accent: bool },
    Round(usize),
    Best(usize),
    Vibrate(Duration),
    Wake,
}

/// Records every call in order and tracks what is currently shown.
#[derive(Debug, Default, Clone)]
pub struct RecordingPresentation {
    events: Vec<PresentationEvent>,
    lit: HashSet<Signal>,
    status: Option<(String, bool)>,
    round: usize,
    best: usize,
}

impl RecordingPresentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[PresentationEvent] {
        &self.events
    }

    /// Signals activated, in order.
    pub fn activations(&self) -> Vec<Signal> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PresentationEvent::Activate(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn is_lit(&self, signal: Signal) -> bool {
        self.lit.contains(&signal)
    }

    pub fn any_lit(&self) -> bool {
        !self.lit.is_empty()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(m, _)| m.as_str())
    }

    pub fn status_accent(&self) -> Option<bool> {
        self.status.as_ref().map(|(_, accent)| *accent)
    }

    pub fn round_display(&self) -> usize {
        self.round
    }

    pub fn best_display(&self) -> usize {
        self.best
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Presentation for RecordingPresentation {
    fn activate(&mut self, signal: Signal) {
        self.lit.insert(signal);
        self.events.push(PresentationEvent::Activate(signal));
    }

    fn deactivate(&mut self, signal: Signal) {
        self.lit.remove(&signal);
        self.events.push(PresentationEvent::Deactivate(signal));
    }

    fn set_status(&mut self, message: &str, accent: bool) {
        self.status = Some((message.to_string(), accent));
        self.events.push(PresentationEvent::Status {
            message: message.to_string(),
            accent,
        });
    }

    fn set_round_display(&mut self, round: usize) {
        self.round = round;
        self.events.push(PresentationEvent::Round(round));
    }

    fn set_best_display(&mut self, best: usize) {
        self.best = best;
        self.events.push(PresentationEvent::Best(best));
    }

    fn vibrate(&mut self, duration: Duration) {
        self.events.push(PresentationEvent::Vibrate(duration));
    }

    fn wake(&mut self) {
        self.events.push(PresentationEvent::Wake);
    }
}
