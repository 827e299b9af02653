//! The round engine.

use super::status;
use crate::checkpoint::{CheckpointError, Snapshot};
use crate::config::{ConfigError, GameConfig};
use crate::core::{GameMode, Guard, ModeChange, ModeHistory, State};
use crate::environment::{Clock, PersistentStore, Presentation, VirtualClock};
use crate::judge::{judge, Verdict};
use crate::playback::PlaybackController;
use crate::schedule::{Action, ScheduledTransition};
use crate::sequence::{Sequence, SequenceGenerator};
use crate::signal::Signal;
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Owns the sequence, the player cursor, the strict flag, the mode and
/// the best score. Every mutation goes through a method on this type.
///
/// The engine is driven from outside by three kinds of calls:
/// requests ([`start`](Self::start), [`press`](Self::press),
/// [`set_strict`](Self::set_strict), [`restart`](Self::restart)),
/// and delivery of due timers ([`fire`](Self::fire)).
pub struct Game<P, S, C>
where
    P: Presentation,
    S: PersistentStore,
    C: Clock,
{
    config: GameConfig,
    presentation: P,
    store: S,
    clock: C,
    generator: SequenceGenerator,
    playback: PlaybackController,
    sequence: Sequence,
    cursor: usize,
    strict: bool,
    best: usize,
    mode: GameMode,
    generation: u64,
    history: ModeHistory<GameMode>,
    start_guard: Guard<GameMode>,
    press_guard: Guard<GameMode>,
}

impl<P, S, C> Game<P, S, C>
where
    P: Presentation,
    S: PersistentStore,
    C: Clock,
{
    /// Build an idle game. The best score is read from `store` once,
    /// here; a missing or unreadable value counts as 0.
    pub fn new(config: GameConfig, presentation: P, store: S, clock: C) -> Result<Self, ConfigError> {
        config.check()?;

        let generator = match config.seed {
            Some(seed) => SequenceGenerator::seeded(seed),
            None => SequenceGenerator::from_entropy(),
        };
        let best = load_best(&store, &config.best_score_key);

        let mut game = Self {
            playback: PlaybackController::new(config.playback.clone()),
            history: ModeHistory::with_limit(config.history_limit),
            strict: config.strict,
            config,
            presentation,
            store,
            clock,
            generator,
            sequence: Sequence::new(),
            cursor: 0,
            best,
            mode: GameMode::Idle,
            generation: 0,
            start_guard: Guard::labeled("start", |m: &GameMode| {
                !matches!(m, GameMode::Presenting | GameMode::AwaitingInput)
            }),
            press_guard: Guard::labeled("press", |m: &GameMode| m.accepts_input()),
        };

        game.presentation.set_best_display(best);
        game.reset();
        info!(best, strict = game.strict, "game ready");
        Ok(game)
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Current round number, i.e. the sequence length.
    pub fn round(&self) -> usize {
        self.sequence.round()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn best(&self) -> usize {
        self.best
    }

    /// Incremented by every reset; tags scheduled transitions.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn history(&self) -> &ModeHistory<GameMode> {
        &self.history
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Begin a game, or the next round of one.
    ///
    /// Ignored while presenting and while waiting for input. Returns
    /// whether the request took effect.
    pub fn start(&mut self) -> bool {
        if !self.start_guard.check(&self.mode) {
            debug!(mode = %self.mode, "start ignored");
            return false;
        }

        info!(round = self.round(), "starting");
        self.presentation.wake();
        self.show(status::STARTING);
        self.next_round();
        true
    }

    /// Judge one press. Returns `None` when the press is ignored
    /// because no input is expected.
    pub fn press(&mut self, signal: Signal) -> Option<Verdict> {
        if !self.press_guard.check(&self.mode) || self.sequence.is_empty() {
            debug!(%signal, mode = %self.mode, "press ignored");
            return None;
        }

        self.acknowledge(signal);

        let verdict = judge(signal, &self.sequence, self.cursor);
        debug!(%signal, cursor = self.cursor, ?verdict, "press judged");
        match verdict {
            Verdict::Continue(next) => self.cursor = next,
            Verdict::RoundComplete => self.complete_round(),
            Verdict::Mistake => self.mistake(),
        }
        Some(verdict)
    }

    /// Press by raw identifier. Names outside the catalog are ignored.
    pub fn press_named(&mut self, name: &str) -> Option<Verdict> {
        match Signal::from_name(name) {
            Some(signal) => self.press(signal),
            None => {
                debug!(name, "unknown signal ignored");
                None
            }
        }
    }

    /// Change how future mistakes are handled. Never touches the game in
    /// progress.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
        info!(strict, "strict mode changed");
        if strict {
            self.show(status::STRICT_ON);
        } else if self.sequence.is_empty() {
            self.show(status::IDLE);
        }
    }

    /// Abandon whatever is going on and return to idle.
    ///
    /// Timers already handed to the clock are not recalled; what happens
    /// when they fire depends on
    /// [`StaleTransitionPolicy`](crate::schedule::StaleTransitionPolicy).
    pub fn restart(&mut self) {
        info!(round = self.round(), "restart requested");
        self.reset();
    }

    /// Run a scheduled transition whose delay has elapsed.
    pub fn fire(&mut self, transition: ScheduledTransition) {
        if !self
            .config
            .stale_transitions
            .admits(&transition, self.generation)
        {
            debug!(?transition, current = self.generation, "stale transition discarded");
            return;
        }

        match transition.action {
            Action::Activate(signal) => self.presentation.activate(signal),
            Action::Deactivate(signal) => self.presentation.deactivate(signal),
            Action::PresentationFinished => self.finish_presentation(),
            Action::NextRound => self.next_round(),
            Action::Replay => {
                if self.sequence.is_empty() {
                    debug!("replay skipped, no sequence");
                    return;
                }
                self.show(status::WATCH_AGAIN);
                self.present();
            }
            Action::StrictReset => {
                self.reset();
                self.show(status::STRICT_RESET);
            }
        }
    }

    /// Capture the session for later [`restore`](Self::restore).
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            &self.sequence,
            self.cursor,
            self.mode,
            self.strict,
            self.best,
        )
    }

    /// Resume a captured session.
    ///
    /// The game is reset first. A non-empty sequence is then presented
    /// again from the start; an empty one leaves the game idle. The best
    /// score never goes down.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<(), CheckpointError> {
        snapshot.validate()?;

        self.reset();
        self.strict = snapshot.strict;
        if snapshot.best > self.best {
            self.record_best(snapshot.best);
        }
        info!(id = %snapshot.id, round = snapshot.sequence.len(), "restoring snapshot");

        if !snapshot.sequence.is_empty() {
            self.sequence = snapshot.sequence;
            self.show(status::WATCH_AGAIN);
            self.present();
        }
        Ok(())
    }

    fn next_round(&mut self) {
        let signal = self.generator.grow(&mut self.sequence);
        debug!(%signal, round = self.round(), "sequence extended");
        self.present();
    }

    fn present(&mut self) {
        if self.sequence.is_empty() {
            debug!("nothing to present");
            return;
        }

        self.enter(GameMode::Presenting);
        self.presentation.set_round_display(self.sequence.len());
        self.show(status::MEMORIZE);

        let plan = self.playback.present(
            &self.sequence,
            self.sequence.len(),
            self.generation,
            &mut self.clock,
        );
        debug!(
            round = self.sequence.len(),
            signal_ms = plan.signal_duration().as_millis() as u64,
            total_ms = plan.total().as_millis() as u64,
            "presentation scheduled"
        );
    }

    fn finish_presentation(&mut self) {
        if self.sequence.is_empty() {
            debug!("presentation finished with no sequence, staying idle");
            return;
        }
        self.cursor = 0;
        self.enter(GameMode::AwaitingInput);
        self.show(status::YOUR_TURN);
    }

    fn acknowledge(&mut self, signal: Signal) {
        self.presentation.activate(signal);
        let ack = self.config.rounds.press_ack();
        self.schedule(ack, Action::Deactivate(signal));
    }

    fn complete_round(&mut self) {
        let round = self.sequence.len();
        self.cursor = round;
        self.record_best(round);
        self.enter(GameMode::RoundTransition);
        self.show(status::ROUND_COMPLETE);
        info!(round, best = self.best, "round complete");

        let delay = self.config.rounds.advance_delay();
        self.schedule(delay, Action::NextRound);
    }

    fn mistake(&mut self) {
        self.show(status::MISSED);
        self.presentation
            .vibrate(self.config.rounds.mistake_vibration());

        if self.strict {
            info!(round = self.round(), "mistake in strict mode, resetting");
            self.presentation.set_round_display(0);
            self.enter(GameMode::RoundTransition);
            let delay = self.config.rounds.strict_reset_delay();
            self.schedule(delay, Action::StrictReset);
        } else {
            info!(round = self.round(), "mistake, replaying");
            self.cursor = 0;
            self.enter(GameMode::RoundTransition);
            let delay = self.config.rounds.replay_delay();
            self.schedule(delay, Action::Replay);
        }
    }

    fn record_best(&mut self, score: usize) {
        self.best = self.best.max(score);
        self.presentation.set_best_display(self.best);

        let key = &self.config.best_score_key;
        if let Err(e) = self.store.set(key, &self.best.to_string()) {
            warn!(error = %e, key = %key, "failed to persist best score");
        }
    }

    fn reset(&mut self) {
        self.sequence.clear();
        self.cursor = 0;
        self.generation += 1;
        self.enter(GameMode::Idle);
        self.presentation.set_round_display(0);
        self.show(status::IDLE);
    }

    fn schedule(&mut self, delay: Duration, action: Action) {
        self.clock
            .after(delay, ScheduledTransition::new(self.generation, action));
    }

    fn show(&mut self, (message, accent): (&str, bool)) {
        self.presentation.set_status(message, accent);
    }

    fn enter(&mut self, to: GameMode) {
        if self.mode == to {
            return;
        }
        debug!(from = self.mode.name(), to = to.name(), "mode change");
        self.history.record(ModeChange {
            from: self.mode,
            to,
            timestamp: Utc::now(),
            round: self.sequence.len(),
        });
        self.mode = to;
    }
}

impl<P, S> Game<P, S, VirtualClock>
where
    P: Presentation,
    S: PersistentStore,
{
    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Move virtual time forward by `by`, firing everything that falls
    /// due on the way, including transitions scheduled meanwhile.
    /// Returns how many transitions fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let until = self.clock.now() + by;
        let mut fired = 0;
        while let Some(transition) = self.clock.pop_due(until) {
            self.fire(transition);
            fired += 1;
        }
        self.clock.settle(until);
        fired
    }

    /// Fire pending transitions one at a time until `done` holds.
    /// Returns `false` if the queue ran dry first.
    pub fn run_until(&mut self, mut done: impl FnMut(&Self) -> bool) -> bool {
        loop {
            if done(&*self) {
                return true;
            }
            let Some(deadline) = self.clock.next_deadline() else {
                return false;
            };
            if let Some(transition) = self.clock.pop_due(deadline) {
                self.fire(transition);
            }
        }
    }

    /// Fire transitions until the player is expected to press.
    pub fn advance_until_input(&mut self) -> bool {
        self.run_until(|game| game.mode().accepts_input())
    }

    /// Fire everything that is pending, however far in the future.
    pub fn drain(&mut self) -> usize {
        let mut fired = 0;
        while let Some(deadline) = self.clock.next_deadline() {
            if let Some(transition) = self.clock.pop_due(deadline) {
                self.fire(transition);
                fired += 1;
            }
        }
        fired
    }
}

fn load_best<S: PersistentStore>(store: &S, key: &str) -> usize {
    match store.get(key) {
        None => 0,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "stored best score is not a number, using 0");
            0
        }),
    }
}
