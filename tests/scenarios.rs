//! End-to-end sessions driven on the virtual clock.

use recall::checkpoint::Snapshot;
use recall::config::GameConfig;
use recall::core::GameMode;
use recall::environment::{
    JsonFileStore, MemoryStore, PersistentStore, PresentationEvent, RecordingPresentation,
    VirtualClock,
};
use recall::judge::Verdict;
use recall::sequence::{Sequence, SequenceGenerator};
use recall::{Game, GameBuilder, Signal};
use std::time::Duration;

type TestGame = Game<RecordingPresentation, MemoryStore, VirtualClock>;

fn game_with_store(store: MemoryStore) -> TestGame {
    GameBuilder::new()
        .presentation(RecordingPresentation::new())
        .store(store)
        .clock(VirtualClock::new())
        .seed(2024)
        .build()
        .unwrap()
}

fn other_than(signal: Signal) -> Signal {
    Signal::from_index((signal.index() + 1) % Signal::COUNT).unwrap()
}

/// Complete rounds until the sequence has `len` signals and the player
/// is expected to press.
fn reach_round(game: &mut TestGame, len: usize) {
    game.start();
    loop {
        assert!(game.advance_until_input());
        if game.round() == len {
            return;
        }
        let expected = game.sequence().to_vec();
        for signal in expected {
            game.press(signal);
        }
    }
}

#[test]
fn first_round_then_growth() {
    let mut game = game_with_store(MemoryStore::new());

    game.start();
    assert_eq!(game.round(), 1);
    assert_eq!(game.mode(), GameMode::Presenting);

    assert!(game.advance_until_input());
    let first = game.sequence()[0];
    assert_eq!(game.presentation().activations(), vec![first]);

    assert_eq!(game.press(first), Some(Verdict::RoundComplete));
    assert_eq!(game.best(), 1);
    assert_eq!(game.presentation().best_display(), 1);

    game.advance(Duration::from_millis(750));
    assert_eq!(game.round(), 2);
    assert_eq!(game.sequence()[0], first);
    assert_eq!(game.mode(), GameMode::Presenting);
}

#[test]
fn lenient_mistake_replays_after_700ms() {
    let mut game = game_with_store(MemoryStore::new());
    reach_round(&mut game, 2);
    let before = game.sequence().clone();

    assert_eq!(game.press(other_than(before[0])), Some(Verdict::Mistake));

    game.advance(Duration::from_millis(699));
    assert_eq!(game.mode(), GameMode::RoundTransition);

    game.advance(Duration::from_millis(1));
    assert_eq!(game.mode(), GameMode::Presenting);
    assert_eq!(game.sequence(), &before);
    assert_eq!(game.cursor(), 0);
    assert_eq!(game.presentation().status(), Some("Memorize the pattern…"));

    // the replay shows the same pattern again
    game.presentation_mut().clear();
    assert!(game.advance_until_input());
    assert_eq!(game.presentation().activations(), before.to_vec());
}

#[test]
fn strict_mistake_mid_round_resets_after_400ms() {
    let mut game = game_with_store(MemoryStore::new());
    reach_round(&mut game, 3);
    game.set_strict(true);

    let sequence = game.sequence().clone();
    assert_eq!(game.press(sequence[0]), Some(Verdict::Continue(1)));
    assert_eq!(game.cursor(), 1);

    assert_eq!(game.press(other_than(sequence[1])), Some(Verdict::Mistake));
    assert_eq!(game.presentation().round_display(), 0);

    game.advance(Duration::from_millis(399));
    assert_eq!(game.round(), 3);

    game.advance(Duration::from_millis(1));
    assert_eq!(game.mode(), GameMode::Idle);
    assert!(game.sequence().is_empty());
    assert_eq!(game.cursor(), 0);
}

#[test]
fn start_during_presentation_is_ignored() {
    let mut game = game_with_store(MemoryStore::new());
    game.start();
    let pending = game.clock().pending();
    let sequence = game.sequence().clone();

    assert!(!game.start());

    assert_eq!(game.mode(), GameMode::Presenting);
    assert_eq!(game.sequence(), &sequence);
    assert_eq!(game.clock().pending(), pending);
}

#[test]
fn stored_best_survives_a_lower_round() {
    let mut game = game_with_store(MemoryStore::with_value("simon_best", "7"));
    assert_eq!(game.best(), 7);
    assert_eq!(game.presentation().best_display(), 7);

    reach_round(&mut game, 5);
    let expected = game.sequence().to_vec();
    for signal in expected {
        game.press(signal);
    }

    assert_eq!(game.mode(), GameMode::RoundTransition);
    assert_eq!(game.best(), 7);
    assert_eq!(game.store().get("simon_best"), Some("7".to_string()));
}

#[test]
fn start_during_round_transition_grows_immediately() {
    let mut game = game_with_store(MemoryStore::new());
    reach_round(&mut game, 1);
    let first = game.sequence()[0];
    game.press(first);
    assert_eq!(game.mode(), GameMode::RoundTransition);

    assert!(game.start());
    assert_eq!(game.round(), 2);
    assert_eq!(game.mode(), GameMode::Presenting);
}

#[test]
fn playback_timing_follows_speed_curve() {
    let mut game = game_with_store(MemoryStore::new());
    reach_round(&mut game, 3);
    game.presentation_mut().clear();
    let started = game.now();
    let sequence = game.sequence().clone();
    for signal in sequence.iter() {
        game.press(*signal);
    }

    // 750 advance delay, then round 4: 600 lead-in, 4 x 600 on, 3 x 130 gap
    assert!(game.advance_until_input());
    assert_eq!(
        game.now() - started,
        Duration::from_millis(750 + 600 + 4 * 600 + 3 * 130)
    );
}

#[test]
fn mistake_vibrates_and_reports() {
    let mut game = game_with_store(MemoryStore::new());
    reach_round(&mut game, 1);
    let first = game.sequence()[0];

    game.press(other_than(first));

    let events = game.presentation().events();
    assert!(events.contains(&PresentationEvent::Vibrate(Duration::from_millis(180))));
    assert!(events.contains(&PresentationEvent::Status {
        message: "Missed it! Try again.".to_string(),
        accent: false,
    }));
}

#[test]
fn extend_is_uniform_over_the_catalog() {
    let mut generator = SequenceGenerator::seeded(77);
    let base: Sequence = vec![Signal::Red, Signal::Red].into();
    let mut counts = [0usize; Signal::COUNT];
    let n = 20_000;

    for _ in 0..n {
        let extended = generator.extend(&base);
        counts[extended[2].index()] += 1;
    }

    // chi-square with 3 degrees of freedom, p = 0.001 critical value 16.27
    let expected = n as f64 / Signal::COUNT as f64;
    let chi2: f64 = counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum();
    assert!(chi2 < 16.27, "chi2 {chi2} for counts {counts:?}");
}

#[test]
fn snapshot_restore_replays_saved_sequence() {
    let mut game = game_with_store(MemoryStore::new());
    reach_round(&mut game, 3);
    game.set_strict(true);
    let saved = Snapshot::from_json(&game.snapshot().to_json().unwrap()).unwrap();

    let mut fresh = game_with_store(MemoryStore::new());
    fresh.restore(saved.clone()).unwrap();

    assert!(fresh.is_strict());
    assert_eq!(fresh.sequence(), &saved.sequence);
    assert_eq!(fresh.best(), saved.best);
    assert_eq!(fresh.mode(), GameMode::Presenting);
    assert!(fresh.advance_until_input());
    assert_eq!(fresh.presentation().activations(), saved.sequence.to_vec());
}

#[test]
fn restoring_an_idle_snapshot_stays_idle() {
    let game = game_with_store(MemoryStore::with_value("simon_best", "4"));
    let saved = game.snapshot();

    let mut fresh = game_with_store(MemoryStore::with_value("simon_best", "9"));
    fresh.restore(saved).unwrap();

    assert_eq!(fresh.mode(), GameMode::Idle);
    assert_eq!(fresh.best(), 9);
}

#[test]
fn file_store_keeps_best_between_games() {
    let path = std::env::temp_dir().join(format!("recall-best-{}.json", uuid::Uuid::new_v4()));

    {
        let mut game = Game::new(
            GameConfig::default().with_seed(5),
            RecordingPresentation::new(),
            JsonFileStore::open(&path).unwrap(),
            VirtualClock::new(),
        )
        .unwrap();
        game.start();
        game.advance_until_input();
        let first = game.sequence()[0];
        game.press(first);
        assert_eq!(game.best(), 1);
    }

    let game = Game::new(
        GameConfig::default().with_seed(6),
        RecordingPresentation::new(),
        JsonFileStore::open(&path).unwrap(),
        VirtualClock::new(),
    )
    .unwrap();
    assert_eq!(game.best(), 1);

    std::fs::remove_file(&path).unwrap();
}
